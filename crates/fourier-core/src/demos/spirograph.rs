//! Panel 8: a hypotrochoid drawn by a pen inside a rolling circle.

use super::{Demo, DemoKind};
use crate::color::{spiro_color, BACKGROUND, MAGENTA, PURPLE, TEAL};
use crate::constants::{
    reference_frames, SPEED_RANGE, SPIRO_PEN_RANGE, SPIRO_RADIUS_RANGE, SPIRO_RAD_PER_FRAME,
    SPIRO_SUBSTEPS, SPIRO_TRAIL_MAX,
};
use crate::controls::{clamp_f64, Control, Readout};
use crate::draw::{DrawList, Viewport};
use crate::error::CoreError;
use crate::geometry::{polar, Point};
use crate::trail::Trail;
use std::fmt;
use std::str::FromStr;

/// Trail polylines per frame; the colour ramp steps once per chunk.
const TRAIL_CHUNKS: usize = 96;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpiroPreset {
    Flower5,
    Flower8,
    Star3,
    Star7,
    Deltoid,
    Astroid,
    Cardioid,
}

impl SpiroPreset {
    pub const ALL: [SpiroPreset; 7] = [
        SpiroPreset::Flower5,
        SpiroPreset::Flower8,
        SpiroPreset::Star3,
        SpiroPreset::Star7,
        SpiroPreset::Deltoid,
        SpiroPreset::Astroid,
        SpiroPreset::Cardioid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpiroPreset::Flower5 => "flower5",
            SpiroPreset::Flower8 => "flower8",
            SpiroPreset::Star3 => "star3",
            SpiroPreset::Star7 => "star7",
            SpiroPreset::Deltoid => "deltoid",
            SpiroPreset::Astroid => "astroid",
            SpiroPreset::Cardioid => "cardioid",
        }
    }

    /// `(fixed radius, rolling radius, pen offset)`.
    pub fn geometry(self) -> (f64, f64, f64) {
        match self {
            SpiroPreset::Flower5 => (100.0, 20.0, 20.0),
            SpiroPreset::Flower8 => (100.0, 12.5, 12.0),
            SpiroPreset::Star3 => (120.0, 40.0, 40.0),
            SpiroPreset::Star7 => (140.0, 20.0, 20.0),
            SpiroPreset::Deltoid => (120.0, 40.0, 40.0),
            SpiroPreset::Astroid => (120.0, 30.0, 30.0),
            SpiroPreset::Cardioid => (80.0, 80.0, 80.0),
        }
    }
}

impl fmt::Display for SpiroPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpiroPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        SpiroPreset::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| CoreError::UnknownSpiroPreset(s.to_string()))
    }
}

/// Pen position for fixed radius `big_r`, rolling radius `r` and pen offset
/// `d` at angle `t`, relative to the fixed circle's centre.
pub fn hypotrochoid(big_r: f64, r: f64, d: f64, t: f64) -> Point {
    let k = big_r - r;
    let q = k / r * t;
    Point::new(k * t.cos() + d * q.cos(), k * t.sin() - d * q.sin())
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpiroParams {
    pub fixed_radius: f64,
    pub rolling_radius: f64,
    pub pen_offset: f64,
    pub speed: f64,
    pub show_circles: bool,
}

impl Default for SpiroParams {
    fn default() -> Self {
        Self {
            fixed_radius: 100.0,
            rolling_radius: 40.0,
            pen_offset: 30.0,
            speed: 2.0,
            show_circles: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SpirographDemo {
    params: SpiroParams,
    viewport: Viewport,
    time: f64,
    trail: Trail<Point>,
}

impl Default for SpirographDemo {
    fn default() -> Self {
        Self::new(SpiroParams::default())
    }
}

impl SpirographDemo {
    pub fn new(params: SpiroParams) -> Self {
        Self {
            params,
            viewport: Viewport::default(),
            time: 0.0,
            trail: Trail::new(SPIRO_TRAIL_MAX),
        }
    }

    pub fn params(&self) -> &SpiroParams {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn trail(&self) -> &Trail<Point> {
        &self.trail
    }

    pub fn pen(&self) -> Point {
        let p = &self.params;
        hypotrochoid(p.fixed_radius, p.rolling_radius, p.pen_offset, self.time)
    }

    fn restart(&mut self) {
        self.time = 0.0;
        self.trail.clear();
    }

    fn ratio_label(&self) -> String {
        format!("{:.2}", self.params.fixed_radius / self.params.rolling_radius)
    }
}

impl Demo for SpirographDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Spirograph
    }

    fn activate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn step(&mut self, dt_sec: f64) {
        let advance = SPIRO_RAD_PER_FRAME * self.params.speed * reference_frames(dt_sec);
        let sub = advance / SPIRO_SUBSTEPS as f64;
        for _ in 0..SPIRO_SUBSTEPS {
            self.time += sub;
            let pen = self.pen();
            self.trail.push(pen);
        }
    }

    fn render(&self, out: &mut DrawList) {
        out.clear(BACKGROUND);
        let center = self.viewport.center();
        out.fading_polyline(self.trail.iter(), center, 1.5, TRAIL_CHUNKS, spiro_color);

        let pen = self.pen() + center;
        if self.params.show_circles {
            let p = &self.params;
            let rolling = center + polar(p.fixed_radius - p.rolling_radius, self.time);
            out.circle(center, p.fixed_radius, PURPLE.with_alpha(0.3), 1.0);
            out.circle(rolling, p.rolling_radius, TEAL.with_alpha(0.5), 1.0);
            out.line(rolling, pen, TEAL.with_alpha(0.6), 1.0);
            out.disc(rolling, 2.5, TEAL);
        }
        out.disc(pen, 4.0, MAGENTA);
    }

    fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::SetFixedRadius(v) => {
                self.params.fixed_radius = clamp_f64(v, SPIRO_RADIUS_RANGE);
                self.restart();
            }
            Control::SetRollingRadius(v) => {
                self.params.rolling_radius = clamp_f64(v, SPIRO_RADIUS_RANGE);
                self.restart();
            }
            Control::SetPenOffset(v) => {
                self.params.pen_offset = clamp_f64(v, SPIRO_PEN_RANGE);
                self.restart();
            }
            Control::SelectSpiroPreset(preset) => {
                let (big_r, r, d) = preset.geometry();
                self.params.fixed_radius = big_r;
                self.params.rolling_radius = r;
                self.params.pen_offset = d;
                self.restart();
            }
            Control::SetSpeed(s) => self.params.speed = clamp_f64(s, SPEED_RANGE),
            Control::SetOverlay(on) => self.params.show_circles = on,
            Control::ToggleOverlay => self.params.show_circles = !self.params.show_circles,
            Control::Reset | Control::Clear => self.restart(),
            _ => return false,
        }
        true
    }

    fn readouts(&self) -> Vec<Readout> {
        vec![
            Readout::new("spiro-r1disp", format!("{:.0}", self.params.fixed_radius)),
            Readout::new("spiro-r2disp", format!("{:.1}", self.params.rolling_radius)),
            Readout::new("spiro-ratio", self.ratio_label()),
            Readout::new("spiro-pts", self.trail.len().to_string()),
        ]
    }
}
