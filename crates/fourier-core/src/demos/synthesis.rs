//! Panels 2 and 3: building square, sawtooth and triangle waves out of
//! harmonics, with the ideal waveform overlaid on the trace.

use super::{draw_target_trace, draw_wave_trace, trace_capacity, Demo, DemoKind, WaveSample};
use crate::color::{BACKGROUND, PURPLE};
use crate::constants::{
    reference_frames, HARMONICS_RANGE, SAW_RAD_PER_FRAME, SAW_SCALE, SPEED_RANGE,
    SQUARE_RAD_PER_FRAME, SQUARE_SCALE,
};
use crate::controls::{clamp_f64, clamp_usize, nudge, Control, Readout};
use crate::draw::{DrawList, Viewport};
use crate::epicycle::{evaluate_epicycles, Reconstruction};
use crate::geometry::Point;
use crate::series::{square_overshoot, square_series, square_wave, SeriesChain, WaveShape};
use crate::trail::Trail;
use std::f64::consts::TAU;

const TRACE_FRACTION: f64 = 0.55;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Shaped(WaveShape),
}

impl Waveform {
    fn scale(self) -> f64 {
        match self {
            Waveform::Square => SQUARE_SCALE,
            Waveform::Shaped(_) => SAW_SCALE,
        }
    }

    fn rate(self) -> f64 {
        match self {
            Waveform::Square => SQUARE_RAD_PER_FRAME,
            Waveform::Shaped(_) => SAW_RAD_PER_FRAME,
        }
    }

    fn series(self, harmonics: usize) -> SeriesChain {
        match self {
            Waveform::Square => square_series(harmonics, self.scale()),
            Waveform::Shaped(shape) => shape.series(harmonics, self.scale()),
        }
    }

    pub fn target(self, phase: f64) -> f64 {
        match self {
            Waveform::Square => square_wave(phase),
            Waveform::Shaped(shape) => shape.target(phase),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisParams {
    pub harmonics: usize,
    pub speed: f64,
    pub show_target: bool,
    pub opacity: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            harmonics: 5,
            speed: 1.0,
            show_target: true,
            opacity: 0.7,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SynthesisDemo {
    waveform: Waveform,
    params: SynthesisParams,
    viewport: Viewport,
    time: f64,
    chain: SeriesChain,
    /// Cached square-wave overshoot; recomputed when the harmonic count changes.
    overshoot: f64,
    frame: Reconstruction,
    trace: Trail<WaveSample>,
}

impl SynthesisDemo {
    pub fn new(waveform: Waveform, params: SynthesisParams) -> Self {
        let viewport = Viewport::default();
        let mut demo = Self {
            waveform,
            params,
            viewport,
            time: 0.0,
            chain: SeriesChain::new(),
            overshoot: 0.0,
            frame: Reconstruction::default(),
            trace: Trail::new(trace_capacity(viewport, TRACE_FRACTION)),
        };
        demo.rebuild();
        demo
    }

    pub fn square() -> Self {
        Self::new(Waveform::Square, SynthesisParams::default())
    }

    pub fn sawtooth() -> Self {
        Self::new(
            Waveform::Shaped(WaveShape::Sawtooth),
            SynthesisParams::default(),
        )
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn params(&self) -> &SynthesisParams {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn trace_len(&self) -> usize {
        self.trace.len()
    }

    pub fn tip(&self) -> Point {
        self.frame.tip
    }

    fn rebuild(&mut self) {
        self.chain = self.waveform.series(self.params.harmonics);
        if self.waveform == Waveform::Square {
            self.overshoot = square_overshoot(self.params.harmonics);
        }
    }

    fn set_harmonics(&mut self, harmonics: usize) {
        self.params.harmonics = clamp_usize(harmonics, HARMONICS_RANGE);
        self.rebuild();
    }

    fn gibbs_label(&self) -> String {
        if self.params.harmonics > 1 {
            format!("~{:.0}%", self.overshoot * 100.0)
        } else {
            "N/A".to_string()
        }
    }
}

impl Demo for SynthesisDemo {
    fn kind(&self) -> DemoKind {
        match self.waveform {
            Waveform::Square => DemoKind::Square,
            Waveform::Shaped(_) => DemoKind::SawTriangle,
        }
    }

    fn activate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.trace
            .set_capacity(trace_capacity(viewport, TRACE_FRACTION));
    }

    fn step(&mut self, dt_sec: f64) {
        self.time += self.waveform.rate() * self.params.speed * reference_frames(dt_sec);
        self.frame = evaluate_epicycles(&self.chain, self.time / TAU, self.chain.len());
        self.trace.push(WaveSample {
            value: self.frame.tip.y,
            phase: self.time,
        });
    }

    fn render(&self, out: &mut DrawList) {
        out.clear(BACKGROUND);
        let origin = self.viewport.at(0.25, 0.5);
        out.epicycles(&self.frame.circles, origin, self.params.opacity);
        let tip = self.frame.tip + origin;
        out.tip_marker(tip);

        let wave_start = Point::new(self.viewport.width * 0.45, origin.y);
        out.dashed_line(
            tip,
            Point::new(wave_start.x, tip.y),
            PURPLE.with_alpha(0.3),
            1.0,
        );
        if self.params.show_target {
            let waveform = self.waveform;
            draw_target_trace(out, &self.trace, wave_start, waveform.scale(), |p| {
                waveform.target(p)
            });
        }
        draw_wave_trace(out, &self.trace, wave_start);
    }

    fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::SetTerms(n) => self.set_harmonics(n),
            Control::NudgeTerms(d) => {
                self.set_harmonics(nudge(self.params.harmonics, d, HARMONICS_RANGE))
            }
            Control::SetSpeed(s) => self.params.speed = clamp_f64(s, SPEED_RANGE),
            Control::SetOpacity(o) => self.params.opacity = clamp_f64(o, (0.0, 1.0)),
            Control::SetOverlay(on) => self.params.show_target = on,
            Control::ToggleOverlay => self.params.show_target = !self.params.show_target,
            Control::SelectWave(shape) if matches!(self.waveform, Waveform::Shaped(_)) => {
                self.waveform = Waveform::Shaped(shape);
                self.rebuild();
                self.trace.clear();
            }
            Control::Reset => {
                self.time = 0.0;
                self.trace.clear();
            }
            _ => return false,
        }
        true
    }

    fn readouts(&self) -> Vec<Readout> {
        match self.waveform {
            Waveform::Square => vec![
                Readout::new("sq-count", self.params.harmonics.to_string()),
                Readout::new("sq-gibbs", self.gibbs_label()),
            ],
            Waveform::Shaped(shape) => vec![
                Readout::new("saw-wtype", shape.label()),
                Readout::new("saw-count", self.params.harmonics.to_string()),
            ],
        }
    }
}
