//! Panel 6: hand-tuned amplitudes for eight harmonic bins.

use super::{draw_wave_trace, trace_capacity, Demo, DemoKind, WaveSample};
use crate::color::{hsl_to_rgb, Color, BACKGROUND, GRID, PURPLE};
use crate::constants::{
    reference_frames, BIN_AMPLITUDE_MAX, EXPLORER_RADIUS_PER_UNIT, EXPLORER_RAD_PER_FRAME,
    SPEED_RANGE,
};
use crate::controls::{clamp_f64, Control, Readout};
use crate::dft::FrequencyComponent;
use crate::draw::{DrawList, Viewport};
use crate::epicycle::{evaluate_epicycles, Reconstruction};
use crate::geometry::Point;
use crate::series::SeriesChain;
use crate::trail::Trail;
use std::f64::consts::TAU;

pub const BINS: usize = 8;
const TRACE_FRACTION: f64 = 0.45;

#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerParams {
    /// Bin `i` drives harmonic `i + 1`.
    pub amplitudes: [f64; BINS],
    pub speed: f64,
    pub opacity: f64,
}

impl Default for ExplorerParams {
    fn default() -> Self {
        Self {
            amplitudes: [80.0, 40.0, 20.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            speed: 1.0,
            opacity: 0.7,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExplorerDemo {
    params: ExplorerParams,
    viewport: Viewport,
    time: f64,
    chain: SeriesChain,
    frame: Reconstruction,
    trace: Trail<WaveSample>,
}

impl Default for ExplorerDemo {
    fn default() -> Self {
        Self::new(ExplorerParams::default())
    }
}

impl ExplorerDemo {
    pub fn new(params: ExplorerParams) -> Self {
        let viewport = Viewport::default();
        let chain = bins_to_chain(&params.amplitudes);
        Self {
            params,
            viewport,
            time: 0.0,
            chain,
            frame: Reconstruction::default(),
            trace: Trail::new(trace_capacity(viewport, TRACE_FRACTION)),
        }
    }

    pub fn params(&self) -> &ExplorerParams {
        &self.params
    }

    pub fn chain(&self) -> &[FrequencyComponent] {
        &self.chain
    }

    pub fn trace_len(&self) -> usize {
        self.trace.len()
    }

    pub fn active_bins(&self) -> usize {
        self.params.amplitudes.iter().filter(|a| **a > 0.0).count()
    }

    pub fn total_amplitude(&self) -> f64 {
        self.params.amplitudes.iter().sum()
    }

    fn render_bars(&self, out: &mut DrawList) {
        let bar_h = self.viewport.height * 0.25;
        let left = self.viewport.width * 0.1;
        let slot = self.viewport.width * 0.8 / BINS as f64;
        let baseline = 20.0 + bar_h;
        out.line(
            Point::new(left, baseline),
            Point::new(left + slot * BINS as f64, baseline),
            GRID,
            1.0,
        );
        for (i, amp) in self.params.amplitudes.iter().enumerate() {
            let h = amp / BIN_AMPLITUDE_MAX * bar_h;
            if h <= 0.0 {
                continue;
            }
            let [r, g, b] = hsl_to_rgb(170.0 + i as f64 * 25.0, 0.9, 0.5);
            out.rect(
                Point::new(left + slot * (i as f64 + 0.15), baseline - h),
                Point::new(slot * 0.7, h),
                Color::rgba(r, g, b, 0.85),
            );
        }
    }
}

/// Non-silent bins as epicycle components, in bin order.
pub fn bins_to_chain(amplitudes: &[f64; BINS]) -> SeriesChain {
    amplitudes
        .iter()
        .enumerate()
        .filter(|(_, a)| **a > 0.0)
        .map(|(i, a)| FrequencyComponent {
            frequency: i + 1,
            amplitude: a * EXPLORER_RADIUS_PER_UNIT,
            phase: 0.0,
        })
        .collect()
}

impl Demo for ExplorerDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Explorer
    }

    fn activate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.trace
            .set_capacity(trace_capacity(viewport, TRACE_FRACTION));
    }

    fn step(&mut self, dt_sec: f64) {
        self.time += EXPLORER_RAD_PER_FRAME * self.params.speed * reference_frames(dt_sec);
        self.frame = evaluate_epicycles(&self.chain, self.time / TAU, self.chain.len());
        self.trace.push(WaveSample {
            value: self.frame.tip.y,
            phase: self.time,
        });
    }

    fn render(&self, out: &mut DrawList) {
        out.clear(BACKGROUND);
        self.render_bars(out);

        let origin = self.viewport.at(0.2, 0.65);
        out.epicycles(&self.frame.circles, origin, self.params.opacity);
        let tip = self.frame.tip + origin;
        out.tip_marker(tip);

        let wave_start = Point::new(self.viewport.width * 0.5, origin.y);
        out.dashed_line(
            tip,
            Point::new(wave_start.x, tip.y),
            PURPLE.with_alpha(0.3),
            1.0,
        );
        draw_wave_trace(out, &self.trace, wave_start);
    }

    fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::SetBinAmplitude { bin, amplitude } if bin < BINS => {
                self.params.amplitudes[bin] = clamp_f64(amplitude, (0.0, BIN_AMPLITUDE_MAX));
                self.chain = bins_to_chain(&self.params.amplitudes);
                self.trace.clear();
            }
            Control::SetSpeed(s) => self.params.speed = clamp_f64(s, SPEED_RANGE),
            Control::SetOpacity(o) => self.params.opacity = clamp_f64(o, (0.0, 1.0)),
            Control::Reset => {
                self.time = 0.0;
                self.trace.clear();
            }
            _ => return false,
        }
        true
    }

    fn readouts(&self) -> Vec<Readout> {
        vec![
            Readout::new("dft-active", self.active_bins().to_string()),
            Readout::new("dft-totalamp", format!("{:.0}", self.total_amplitude())),
        ]
    }
}
