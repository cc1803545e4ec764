//! Panel 4: draw any closed-ish path with the pointer, then watch epicycles
//! redraw it.
//!
//! The panel has two modes. While `Drawing`, pointer drags are captured
//! relative to the viewport centre. Toggling to `Replaying` resamples the
//! capture, runs the DFT once, and animates the sorted chain; toggling back
//! drops the chain and its trail but keeps the raw capture.

use super::{Demo, DemoKind};
use crate::color::{BACKGROUND, TEAL};
use crate::constants::{
    reference_frames, EPICYCLES_RANGE, FREEHAND_CYCLES_PER_FRAME, FREEHAND_TRAIL_PER_SAMPLE,
    MIN_REPLAY_POINTS, MIN_RESAMPLE_POINTS, SPEED_RANGE,
};
use crate::controls::{clamp_f64, clamp_usize, nudge, Control, PointerInput, Readout};
use crate::dft::EpicycleChain;
use crate::draw::{DrawList, Viewport};
use crate::epicycle::{evaluate_epicycles, wrap_unit, Reconstruction};
use crate::geometry::Point;
use crate::resample::resample_path;
use crate::trail::Trail;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    #[default]
    Drawing,
    Replaying,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FreehandParams {
    pub epicycles: usize,
    pub speed: f64,
    pub opacity: f64,
}

impl Default for FreehandParams {
    fn default() -> Self {
        Self {
            epicycles: 80,
            speed: 1.0,
            opacity: 0.7,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FreehandDemo {
    params: FreehandParams,
    viewport: Viewport,
    mode: DrawMode,
    capturing: bool,
    /// Raw capture, relative to the viewport centre.
    raw: Vec<Point>,
    /// Present exactly while replaying.
    chain: Option<EpicycleChain>,
    time: f64,
    frame: Reconstruction,
    trail: Trail<Point>,
}

impl FreehandDemo {
    pub fn new(params: FreehandParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn params(&self) -> &FreehandParams {
        &self.params
    }

    pub fn raw_points(&self) -> &[Point] {
        &self.raw
    }

    pub fn chain(&self) -> Option<&EpicycleChain> {
        self.chain.as_ref()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn trail(&self) -> &Trail<Point> {
        &self.trail
    }

    pub fn tip(&self) -> Point {
        self.frame.tip
    }

    /// Whether enough has been captured to start a replay.
    pub fn can_replay(&self) -> bool {
        self.raw.len() > MIN_REPLAY_POINTS
    }

    /// Replace the capture wholesale (points relative to the viewport centre).
    /// Returns to drawing mode.
    pub fn load_path(&mut self, points: Vec<Point>) {
        self.stop_replay();
        self.raw = points;
        self.capturing = false;
    }

    fn start_replay(&mut self) {
        if !self.can_replay() {
            log::debug!(
                "[freehand] {} points captured, need more than {}",
                self.raw.len(),
                MIN_REPLAY_POINTS
            );
            return;
        }
        self.mode = DrawMode::Replaying;
        self.capturing = false;
        self.recompute();
    }

    fn stop_replay(&mut self) {
        self.mode = DrawMode::Drawing;
        self.chain = None;
        self.frame = Reconstruction::default();
        self.trail.clear();
        self.time = 0.0;
    }

    fn recompute(&mut self) {
        let samples = (self.params.epicycles * 2).max(MIN_RESAMPLE_POINTS);
        let resampled = resample_path(&self.raw, samples);
        let chain = EpicycleChain::from_points(&resampled);
        self.trail.set_capacity(chain.len() * FREEHAND_TRAIL_PER_SAMPLE);
        self.trail.clear();
        self.time = 0.0;
        self.frame = Reconstruction::default();
        log::info!(
            "[freehand] {} raw points -> {} samples, {} epicycles",
            self.raw.len(),
            chain.len(),
            self.params.epicycles.min(chain.len())
        );
        self.chain = Some(chain);
    }

    fn set_epicycles(&mut self, n: usize) {
        self.params.epicycles = clamp_usize(n, EPICYCLES_RANGE);
        if self.chain.is_some() {
            self.recompute();
        }
    }

    fn clear(&mut self) {
        self.raw.clear();
        self.capturing = false;
        self.stop_replay();
    }
}

impl Demo for FreehandDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Freehand
    }

    fn activate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn deactivate(&mut self) {
        self.capturing = false;
    }

    fn drawing(&self) -> bool {
        self.mode == DrawMode::Drawing
    }

    fn step(&mut self, dt_sec: f64) {
        let Some(chain) = &self.chain else {
            return;
        };
        self.time = wrap_unit(
            self.time + FREEHAND_CYCLES_PER_FRAME * self.params.speed * reference_frames(dt_sec),
        );
        self.frame = evaluate_epicycles(chain.components(), self.time, self.params.epicycles);
        self.trail.push(self.frame.tip);
    }

    fn render(&self, out: &mut DrawList) {
        out.clear(BACKGROUND);
        let center = self.viewport.center();
        let raw: Vec<Point> = self.raw.iter().map(|p| *p + center).collect();
        match self.mode {
            DrawMode::Drawing => out.polyline(raw, TEAL, 2.0),
            DrawMode::Replaying => {
                out.polyline(raw, TEAL.with_alpha(0.15), 1.0);
                out.epicycles(&self.frame.circles, center, self.params.opacity);
                out.fading_trail(self.trail.iter(), center, 2.5);
                out.tip_marker(self.frame.tip + center);
            }
        }
    }

    fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::ToggleDrawing => match self.mode {
                DrawMode::Drawing => self.start_replay(),
                DrawMode::Replaying => self.stop_replay(),
            },
            Control::Clear => self.clear(),
            Control::SetTerms(n) => self.set_epicycles(n),
            Control::NudgeTerms(d) => {
                self.set_epicycles(nudge(self.params.epicycles, d, EPICYCLES_RANGE))
            }
            Control::SetSpeed(s) => self.params.speed = clamp_f64(s, SPEED_RANGE),
            Control::SetOpacity(o) => self.params.opacity = clamp_f64(o, (0.0, 1.0)),
            Control::Reset => {
                self.time = 0.0;
                self.trail.clear();
            }
            _ => return false,
        }
        true
    }

    fn pointer(&mut self, input: PointerInput) {
        if self.mode != DrawMode::Drawing {
            return;
        }
        let center = self.viewport.center();
        match input {
            PointerInput::Down(p) => {
                self.capturing = true;
                self.raw.clear();
                self.raw.push(p - center);
            }
            PointerInput::Move(p) if self.capturing => self.raw.push(p - center),
            PointerInput::Move(_) => {}
            PointerInput::Up | PointerInput::Leave => self.capturing = false,
        }
    }

    fn readouts(&self) -> Vec<Readout> {
        let (mode, toggle) = match self.mode {
            DrawMode::Drawing => ("Drawing", "Play"),
            DrawMode::Replaying => ("Playing", "Draw"),
        };
        let active = self
            .chain
            .as_ref()
            .map(|c| self.params.epicycles.min(c.len()).to_string())
            .unwrap_or_else(|| "-".to_string());
        vec![
            Readout::new("draw-mode", mode),
            Readout::new("draw-toggle", toggle),
            Readout::new("draw-pts", self.raw.len().to_string()),
            Readout::new("draw-nepi", active),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERENCE_FRAME_SEC;
    use crate::geometry::polar;
    use std::f64::consts::TAU;

    fn drag(demo: &mut FreehandDemo, points: &[Point]) {
        demo.pointer(PointerInput::Down(points[0]));
        for p in &points[1..] {
            demo.pointer(PointerInput::Move(*p));
        }
        demo.pointer(PointerInput::Up);
    }

    /// `n` points around a closed circle; the last point repeats the first.
    fn circle_drag(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new(400.0, 300.0) + polar(100.0, i as f64 / (n - 1) as f64 * TAU))
            .collect()
    }

    #[test]
    fn capture_is_relative_to_the_centre() {
        let mut demo = FreehandDemo::default();
        demo.activate(Viewport::new(800.0, 600.0));
        drag(&mut demo, &[Point::new(400.0, 300.0), Point::new(410.0, 290.0)]);
        assert_eq!(demo.raw_points(), &[Point::ZERO, Point::new(10.0, -10.0)]);
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut demo = FreehandDemo::default();
        demo.pointer(PointerInput::Move(Point::new(1.0, 1.0)));
        assert!(demo.raw_points().is_empty());
    }

    #[test]
    fn ten_points_are_not_enough() {
        let mut demo = FreehandDemo::default();
        demo.activate(Viewport::default());
        drag(&mut demo, &circle_drag(10));
        demo.apply(Control::ToggleDrawing);
        assert_eq!(demo.mode(), DrawMode::Drawing);
        assert!(demo.chain().is_none());

        drag(&mut demo, &circle_drag(11));
        demo.apply(Control::ToggleDrawing);
        assert_eq!(demo.mode(), DrawMode::Replaying);
    }

    #[test]
    fn replay_resamples_to_at_least_one_hundred() {
        let mut demo = FreehandDemo::new(FreehandParams {
            epicycles: 20,
            ..FreehandParams::default()
        });
        demo.activate(Viewport::default());
        drag(&mut demo, &circle_drag(40));
        demo.apply(Control::ToggleDrawing);
        let chain = demo.chain().map(|c| c.len());
        assert_eq!(chain, Some(100));
        assert_eq!(demo.trail().capacity(), 300);

        demo.apply(Control::SetTerms(80));
        assert_eq!(demo.chain().map(|c| c.len()), Some(160));
    }

    #[test]
    fn drawing_again_drops_chain_and_trail() {
        let mut demo = FreehandDemo::default();
        demo.activate(Viewport::default());
        drag(&mut demo, &circle_drag(50));
        demo.apply(Control::ToggleDrawing);
        for _ in 0..10 {
            demo.step(REFERENCE_FRAME_SEC);
        }
        assert_eq!(demo.trail().len(), 10);
        demo.apply(Control::ToggleDrawing);
        assert_eq!(demo.mode(), DrawMode::Drawing);
        assert!(demo.chain().is_none());
        assert!(demo.trail().is_empty());
        assert_eq!(demo.raw_points().len(), 50);
    }

    #[test]
    fn pointer_is_ignored_while_replaying() {
        let mut demo = FreehandDemo::default();
        drag(&mut demo, &circle_drag(20));
        demo.apply(Control::ToggleDrawing);
        demo.pointer(PointerInput::Down(Point::new(5.0, 5.0)));
        assert_eq!(demo.raw_points().len(), 20);
    }

    #[test]
    fn clear_empties_everything() {
        let mut demo = FreehandDemo::default();
        drag(&mut demo, &circle_drag(20));
        demo.apply(Control::ToggleDrawing);
        demo.step(REFERENCE_FRAME_SEC);
        demo.apply(Control::Clear);
        assert_eq!(demo.mode(), DrawMode::Drawing);
        assert!(demo.raw_points().is_empty());
        assert!(demo.trail().is_empty());
        assert_eq!(demo.readouts()[3], Readout::new("draw-nepi", "-"));
    }

    #[test]
    fn replay_time_wraps() {
        let mut demo = FreehandDemo::new(FreehandParams {
            speed: 5.0,
            ..FreehandParams::default()
        });
        drag(&mut demo, &circle_drag(30));
        demo.apply(Control::ToggleDrawing);
        for _ in 0..200 {
            demo.step(REFERENCE_FRAME_SEC);
            assert!((0.0..1.0).contains(&demo.time()));
        }
    }

    #[test]
    fn replayed_circle_stays_on_the_circle() {
        let mut demo = FreehandDemo::default();
        demo.activate(Viewport::new(800.0, 600.0));
        drag(&mut demo, &circle_drag(64));
        demo.apply(Control::ToggleDrawing);
        for _ in 0..50 {
            demo.step(REFERENCE_FRAME_SEC);
            let r = demo.tip().length();
            assert!((r - 100.0).abs() < 2.0, "radius {r}");
        }
    }
}
