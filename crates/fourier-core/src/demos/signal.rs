//! Panel 7: sum up to four sinusoids and plot each one plus the total.

use super::{Demo, DemoKind};
use crate::color::{hsl_to_rgb, Color, AXIS, BACKGROUND, COMPONENT_COLORS, GRID, MAGENTA};
use crate::constants::{
    reference_frames, SIGNAL_AMPLITUDE_MAX, SIGNAL_FREQUENCY_RANGE, SIGNAL_PLOT_MARGIN,
    SIGNAL_PLOT_MAX_AMPLITUDE, SIGNAL_RAD_PER_FRAME, SPEED_RANGE,
};
use crate::controls::{clamp_f64, Control, Readout};
use crate::draw::{DrawList, Viewport};
use crate::geometry::Point;
use crate::series::{signal_value, SignalComponent};
use std::f64::consts::PI;

pub const COMPONENTS: usize = 4;
/// The plot spans this many radians of signal time.
const PLOT_SPAN: f64 = 4.0 * PI;

#[derive(Clone, Debug, PartialEq)]
pub struct SignalParams {
    pub components: [SignalComponent; COMPONENTS],
    pub speed: f64,
    pub show_components: bool,
}

impl Default for SignalParams {
    fn default() -> Self {
        let c = |frequency: f64, amplitude: f64| SignalComponent {
            frequency,
            amplitude,
            phase: 0.0,
        };
        Self {
            components: [c(1.0, 80.0), c(3.0, 40.0), c(5.0, 0.0), c(7.0, 0.0)],
            speed: 1.0,
            show_components: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SignalDemo {
    params: SignalParams,
    viewport: Viewport,
    time: f64,
    /// Largest |value| across the visible plot, refreshed every step.
    peak: f64,
}

impl Default for SignalDemo {
    fn default() -> Self {
        Self::new(SignalParams::default())
    }
}

/// Plot geometry derived from the viewport.
#[derive(Clone, Copy, Debug)]
struct Plot {
    left: f64,
    width: f64,
    mid_y: f64,
    half_height: f64,
}

impl Plot {
    fn new(viewport: Viewport) -> Self {
        let m = SIGNAL_PLOT_MARGIN;
        Self {
            left: m,
            width: (viewport.width - 2.0 * m).max(1.0),
            mid_y: viewport.height * 0.5,
            half_height: ((viewport.height - 2.0 * m) * 0.5).max(1.0),
        }
    }

    fn columns(&self) -> usize {
        self.width.floor() as usize
    }

    /// Signal time at pixel column `px`.
    fn t_at(&self, px: usize, time: f64) -> f64 {
        px as f64 / self.width * PLOT_SPAN + time
    }

    fn y_for(&self, value: f64) -> f64 {
        self.mid_y - value * self.half_height / SIGNAL_PLOT_MAX_AMPLITUDE
    }
}

impl SignalDemo {
    pub fn new(params: SignalParams) -> Self {
        let mut demo = Self {
            params,
            viewport: Viewport::default(),
            time: 0.0,
            peak: 0.0,
        };
        demo.refresh_peak();
        demo
    }

    pub fn params(&self) -> &SignalParams {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn active_components(&self) -> usize {
        self.params
            .components
            .iter()
            .filter(|c| c.amplitude > 0.0)
            .count()
    }

    /// Combined signal at the left edge of the plot.
    pub fn current_value(&self) -> f64 {
        signal_value(&self.params.components, self.time)
    }

    fn refresh_peak(&mut self) {
        let plot = Plot::new(self.viewport);
        self.peak = (0..=plot.columns())
            .map(|px| signal_value(&self.params.components, plot.t_at(px, self.time)).abs())
            .fold(0.0, f64::max);
    }

    fn component_mut(&mut self, index: usize) -> Option<&mut SignalComponent> {
        self.params.components.get_mut(index)
    }
}

impl Demo for SignalDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Signal
    }

    fn activate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.refresh_peak();
    }

    fn step(&mut self, dt_sec: f64) {
        self.time += SIGNAL_RAD_PER_FRAME * self.params.speed * reference_frames(dt_sec);
        self.refresh_peak();
    }

    fn render(&self, out: &mut DrawList) {
        out.clear(BACKGROUND);
        let plot = Plot::new(self.viewport);
        let right = plot.left + plot.width;

        out.line(
            Point::new(plot.left, plot.mid_y),
            Point::new(right, plot.mid_y),
            AXIS,
            1.0,
        );
        out.line(
            Point::new(plot.left, plot.mid_y - plot.half_height),
            Point::new(plot.left, plot.mid_y + plot.half_height),
            AXIS,
            1.0,
        );
        for i in [-3.0, -2.0, -1.0, 1.0, 2.0, 3.0] {
            let y = plot.mid_y - i / 3.0 * plot.half_height;
            out.line(Point::new(plot.left, y), Point::new(right, y), GRID, 1.0);
        }

        let cols = plot.columns();
        if self.params.show_components {
            for (c, color) in self.params.components.iter().zip(COMPONENT_COLORS) {
                if c.amplitude <= 0.0 {
                    continue;
                }
                let points = (0..=cols)
                    .map(|px| {
                        let t = plot.t_at(px, self.time);
                        Point::new(plot.left + px as f64, plot.y_for(c.value(t)))
                    })
                    .collect();
                out.polyline(points, color.with_alpha(0.35), 1.0);
            }
        }

        // combined signal, hue sweeping left to right
        let mut prev: Option<Point> = None;
        for px in 0..=cols {
            let value = signal_value(&self.params.components, plot.t_at(px, self.time));
            let cur = Point::new(plot.left + px as f64, plot.y_for(value));
            if let Some(from) = prev {
                let [r, g, b] = hsl_to_rgb(170.0 + px as f64 / plot.width * 60.0, 0.9, 0.55);
                out.line(from, cur, Color::rgb(r, g, b), 2.5);
            }
            prev = Some(cur);
        }

        let marker = Point::new(plot.left, plot.y_for(self.current_value()));
        out.dashed_line(marker, Point::new(right, marker.y), MAGENTA.with_alpha(0.25), 1.0);
        out.disc(marker, 5.0, MAGENTA);
    }

    fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::SetComponentFrequency { index, frequency } => {
                let Some(c) = self.component_mut(index) else {
                    return false;
                };
                c.frequency = clamp_f64(frequency, SIGNAL_FREQUENCY_RANGE).round();
            }
            Control::SetComponentAmplitude { index, amplitude } => {
                let Some(c) = self.component_mut(index) else {
                    return false;
                };
                c.amplitude = clamp_f64(amplitude, (0.0, SIGNAL_AMPLITUDE_MAX));
            }
            Control::SetComponentPhase { index, degrees } => {
                let Some(c) = self.component_mut(index) else {
                    return false;
                };
                c.phase = clamp_f64(degrees, (-180.0, 180.0)).to_radians();
            }
            Control::SetSpeed(s) => self.params.speed = clamp_f64(s, SPEED_RANGE),
            Control::SetOverlay(on) => self.params.show_components = on,
            Control::ToggleOverlay => {
                self.params.show_components = !self.params.show_components
            }
            Control::Reset => self.time = 0.0,
            _ => return false,
        }
        self.refresh_peak();
        true
    }

    fn readouts(&self) -> Vec<Readout> {
        vec![
            Readout::new(
                "sig-active",
                format!("{} / {}", self.active_components(), COMPONENTS),
            ),
            Readout::new("sig-peak", format!("{:.1}", self.peak)),
        ]
    }
}
