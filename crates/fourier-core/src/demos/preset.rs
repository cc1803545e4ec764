//! Panel 5: epicycles tracing one of the built-in shapes.

use super::{Demo, DemoKind};
use crate::color::{BACKGROUND, TEAL};
use crate::constants::{
    reference_frames, EPICYCLES_RANGE, FREEHAND_TRAIL_PER_SAMPLE, PRESET_CYCLES_PER_FRAME,
    PRESET_TRAIL_MIN, SPEED_RANGE,
};
use crate::controls::{clamp_f64, clamp_usize, nudge, Control, Readout};
use crate::dft::EpicycleChain;
use crate::draw::{DrawList, Viewport};
use crate::epicycle::{evaluate_epicycles, wrap_unit, Reconstruction};
use crate::geometry::Point;
use crate::shapes::ShapePreset;
use crate::trail::Trail;

#[derive(Clone, Debug, PartialEq)]
pub struct PresetParams {
    pub shape: ShapePreset,
    pub epicycles: usize,
    pub speed: f64,
    pub opacity: f64,
    pub show_outline: bool,
}

impl Default for PresetParams {
    fn default() -> Self {
        Self {
            shape: ShapePreset::Star,
            epicycles: 100,
            speed: 1.0,
            opacity: 0.7,
            show_outline: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PresetDemo {
    params: PresetParams,
    viewport: Viewport,
    /// Generated shape; empty until the first activation.
    points: Vec<Point>,
    chain: Option<EpicycleChain>,
    time: f64,
    frame: Reconstruction,
    trail: Trail<Point>,
}

impl PresetDemo {
    pub fn new(params: PresetParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn params(&self) -> &PresetParams {
        &self.params
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

    /// Generate the current shape, transform it and restart the trace.
    fn load_shape(&mut self) {
        self.points = self.params.shape.points();
        let chain = EpicycleChain::from_points(&self.points);
        self.trail
            .set_capacity((chain.len() * FREEHAND_TRAIL_PER_SAMPLE).max(PRESET_TRAIL_MIN));
        self.trail.clear();
        self.time = 0.0;
        self.frame = Reconstruction::default();
        log::info!(
            "[presets] loaded {} ({} samples)",
            self.params.shape,
            chain.len()
        );
        self.chain = Some(chain);
    }

    fn active_epicycles(&self) -> usize {
        self.chain
            .as_ref()
            .map_or(0, |c| self.params.epicycles.min(c.len()))
    }
}

impl Demo for PresetDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Presets
    }

    fn activate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.chain.is_none() {
            self.load_shape();
        }
    }

    fn step(&mut self, dt_sec: f64) {
        let Some(chain) = &self.chain else {
            return;
        };
        self.time = wrap_unit(
            self.time + PRESET_CYCLES_PER_FRAME * self.params.speed * reference_frames(dt_sec),
        );
        self.frame = evaluate_epicycles(chain.components(), self.time, self.params.epicycles);
        self.trail.push(self.frame.tip);
    }

    fn render(&self, out: &mut DrawList) {
        out.clear(BACKGROUND);
        if self.chain.is_none() {
            return;
        }
        let center = self.viewport.center();
        if self.params.show_outline {
            let mut outline: Vec<Point> = self.points.iter().map(|p| *p + center).collect();
            if let Some(first) = outline.first().copied() {
                outline.push(first);
            }
            out.polyline(outline, TEAL.with_alpha(0.12), 1.0);
        }
        out.epicycles(&self.frame.circles, center, self.params.opacity);
        out.fading_trail(self.trail.iter(), center, 2.0);
        out.tip_marker(self.frame.tip + center);
    }

    fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::SelectShape(shape) => {
                self.params.shape = shape;
                self.load_shape();
            }
            Control::SetTerms(n) => {
                self.params.epicycles = clamp_usize(n, EPICYCLES_RANGE);
                self.load_shape();
            }
            Control::NudgeTerms(d) => {
                self.params.epicycles = nudge(self.params.epicycles, d, EPICYCLES_RANGE);
                self.load_shape();
            }
            Control::SetSpeed(s) => self.params.speed = clamp_f64(s, SPEED_RANGE),
            Control::SetOpacity(o) => self.params.opacity = clamp_f64(o, (0.0, 1.0)),
            Control::SetOverlay(on) => self.params.show_outline = on,
            Control::ToggleOverlay => self.params.show_outline = !self.params.show_outline,
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
            Readout::new("shape-name", self.params.shape.name()),
            Readout::new(
                "shape-pts",
                self.chain.as_ref().map_or(0, EpicycleChain::len).to_string(),
            ),
            Readout::new("shape-nepi", self.active_epicycles().to_string()),
        ]
    }
}
