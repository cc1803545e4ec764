//! Panel 1: a square-wave epicycle chain with a scrolling wave beside it.

use super::{Demo, DemoKind};
use crate::color::{BACKGROUND, PURPLE};
use crate::constants::{
    reference_frames, HARMONICS_RANGE, INTRO_RAD_PER_FRAME, INTRO_SCALE, SPEED_RANGE, TRAIL_RANGE,
};
use crate::controls::{clamp_f64, clamp_usize, nudge, Control, Readout};
use crate::draw::{DrawList, Viewport};
use crate::epicycle::{evaluate_epicycles, Reconstruction};
use crate::geometry::Point;
use crate::series::{square_series, SeriesChain};
use crate::trail::Trail;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct IntroParams {
    pub circles: usize,
    pub speed: f64,
    pub trail_length: usize,
    pub opacity: f64,
    pub show_wave: bool,
}

impl Default for IntroParams {
    fn default() -> Self {
        Self {
            circles: 5,
            speed: 1.0,
            trail_length: 600,
            opacity: 0.7,
            show_wave: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct IntroDemo {
    params: IntroParams,
    viewport: Viewport,
    time: f64,
    chain: SeriesChain,
    frame: Reconstruction,
    /// Tip positions relative to the first circle's centre.
    trail: Trail<Point>,
}

impl Default for IntroDemo {
    fn default() -> Self {
        Self::new(IntroParams::default())
    }
}

impl IntroDemo {
    pub fn new(params: IntroParams) -> Self {
        let chain = square_series(params.circles, INTRO_SCALE);
        let trail = Trail::new(params.trail_length);
        Self {
            params,
            viewport: Viewport::default(),
            time: 0.0,
            chain,
            frame: Reconstruction::default(),
            trail,
        }
    }

    pub fn params(&self) -> &IntroParams {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn tip(&self) -> Point {
        self.frame.tip
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    fn set_circles(&mut self, circles: usize) {
        self.params.circles = clamp_usize(circles, HARMONICS_RANGE);
        self.chain = square_series(self.params.circles, INTRO_SCALE);
        self.trail.clear();
    }

    fn origin(&self) -> Point {
        self.viewport.at(0.3, 0.5)
    }
}

impl Demo for IntroDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Intro
    }

    fn activate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn step(&mut self, dt_sec: f64) {
        self.time += INTRO_RAD_PER_FRAME * self.params.speed * reference_frames(dt_sec);
        self.frame = evaluate_epicycles(&self.chain, self.time / TAU, self.chain.len());
        self.trail.push(self.frame.tip);
    }

    fn render(&self, out: &mut DrawList) {
        out.clear(BACKGROUND);
        let origin = self.origin();
        out.epicycles(&self.frame.circles, origin, self.params.opacity);
        out.fading_trail(self.trail.iter(), origin, 2.0);

        let tip = self.frame.tip + origin;
        out.tip_marker(tip);

        if !self.params.show_wave {
            return;
        }
        let wave_x = self.viewport.width * 0.6;
        out.dashed_line(tip, Point::new(wave_x, tip.y), PURPLE.with_alpha(0.3), 1.0);

        // newest tip height at wave_x, older ones scrolling right
        let span = (self.viewport.width * 0.35).floor().max(0.0) as usize;
        let len = self.trail.len().min(span);
        let mut prev: Option<Point> = None;
        for (i, p) in self.trail.iter().rev().take(len).enumerate() {
            let cur = Point::new(wave_x + i as f64, origin.y + p.y);
            if let Some(from) = prev {
                out.line(
                    from,
                    cur,
                    crate::color::trail_color(1.0 - i as f64 / len as f64),
                    2.0,
                );
            }
            prev = Some(cur);
        }
    }

    fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::SetTerms(n) => self.set_circles(n),
            Control::NudgeTerms(d) => self.set_circles(nudge(self.params.circles, d, HARMONICS_RANGE)),
            Control::SetSpeed(s) => self.params.speed = clamp_f64(s, SPEED_RANGE),
            Control::SetTrailLength(n) => {
                self.params.trail_length = clamp_usize(n, TRAIL_RANGE);
                self.trail.set_capacity(self.params.trail_length);
            }
            Control::SetOpacity(o) => self.params.opacity = clamp_f64(o, (0.0, 1.0)),
            Control::SetOverlay(on) => self.params.show_wave = on,
            Control::ToggleOverlay => self.params.show_wave = !self.params.show_wave,
            Control::Reset => {
                self.time = 0.0;
                self.trail.clear();
            }
            _ => return false,
        }
        true
    }

    fn readouts(&self) -> Vec<Readout> {
        vec![
            Readout::new("epi-count", self.params.circles.to_string()),
            Readout::new("epi-tipx", format!("{:.1}", self.frame.tip.x)),
            Readout::new("epi-tipy", format!("{:.1}", self.frame.tip.y)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERENCE_FRAME_SEC;

    #[test]
    fn trail_grows_until_its_cap() {
        let mut demo = IntroDemo::new(IntroParams {
            trail_length: 10,
            ..IntroParams::default()
        });
        demo.activate(Viewport::default());
        for _ in 0..25 {
            demo.step(REFERENCE_FRAME_SEC);
        }
        assert_eq!(demo.trail_len(), 10);
    }

    #[test]
    fn one_frame_advances_by_the_base_rate() {
        let mut demo = IntroDemo::default();
        demo.step(REFERENCE_FRAME_SEC);
        assert!((demo.time() - INTRO_RAD_PER_FRAME).abs() < 1e-12);
        // long stalls are clamped
        let before = demo.time();
        demo.step(10.0);
        assert!((demo.time() - before - INTRO_RAD_PER_FRAME * 6.0).abs() < 1e-9);
    }

    #[test]
    fn circles_are_clamped_and_clear_the_trail() {
        let mut demo = IntroDemo::default();
        demo.step(REFERENCE_FRAME_SEC);
        assert!(demo.apply(Control::SetTerms(99)));
        assert_eq!(demo.params().circles, 50);
        assert_eq!(demo.trail_len(), 0);
        assert!(demo.apply(Control::NudgeTerms(-100)));
        assert_eq!(demo.params().circles, 1);
    }

    #[test]
    fn reset_rewinds_time() {
        let mut demo = IntroDemo::default();
        for _ in 0..5 {
            demo.step(REFERENCE_FRAME_SEC);
        }
        demo.apply(Control::Reset);
        assert_eq!(demo.time(), 0.0);
        assert_eq!(demo.trail_len(), 0);
    }

    #[test]
    fn ignores_foreign_controls() {
        let mut demo = IntroDemo::default();
        assert!(!demo.apply(Control::ToggleDrawing));
        assert!(!demo.apply(Control::SetFixedRadius(50.0)));
    }

    #[test]
    fn readouts_report_tip() {
        let mut demo = IntroDemo::default();
        demo.step(0.0);
        let r = demo.readouts();
        assert_eq!(r[0], Readout::new("epi-count", "5"));
        // at t = 0 every term points along +x
        let expected: f64 = (0..5).map(|i| INTRO_SCALE * 4.0 / ((2 * i + 1) as f64 * std::f64::consts::PI)).sum();
        assert_eq!(r[1].value, format!("{expected:.1}"));
    }
}
