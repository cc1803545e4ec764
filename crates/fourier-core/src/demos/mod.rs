//! The eight interactive panels.
//!
//! Every driver owns its state outright and follows the same lifecycle:
//! `activate` when its panel becomes visible, `step` + `render` once per
//! frame while active, `deactivate` when another panel takes over. Time and
//! trails survive a deactivate/activate pair; only `Control::Reset` (or a
//! parameter change that invalidates them) clears them.

pub mod explorer;
pub mod freehand;
pub mod intro;
pub mod preset;
pub mod signal;
pub mod spirograph;
pub mod synthesis;

use crate::color::trail_color;
use crate::controls::{Control, PointerInput, Readout};
use crate::draw::{DrawList, Viewport};
use crate::error::CoreError;
use crate::geometry::Point;
use crate::trail::Trail;
use std::fmt;
use std::str::FromStr;

pub use explorer::ExplorerDemo;
pub use freehand::{DrawMode, FreehandDemo};
pub use intro::IntroDemo;
pub use preset::PresetDemo;
pub use signal::SignalDemo;
pub use spirograph::{SpiroPreset, SpirographDemo};
pub use synthesis::SynthesisDemo;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DemoKind {
    #[default]
    Intro,
    Square,
    SawTriangle,
    Freehand,
    Presets,
    Explorer,
    Signal,
    Spirograph,
}

impl DemoKind {
    pub const COUNT: usize = 8;

    /// Tab order.
    pub const ALL: [DemoKind; Self::COUNT] = [
        DemoKind::Intro,
        DemoKind::Square,
        DemoKind::SawTriangle,
        DemoKind::Freehand,
        DemoKind::Presets,
        DemoKind::Explorer,
        DemoKind::Signal,
        DemoKind::Spirograph,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::DemoIndex(index))
    }

    /// Short name used on the command line and in logs.
    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Intro => "intro",
            DemoKind::Square => "square",
            DemoKind::SawTriangle => "sawtooth",
            DemoKind::Freehand => "draw",
            DemoKind::Presets => "shapes",
            DemoKind::Explorer => "dft",
            DemoKind::Signal => "signal",
            DemoKind::Spirograph => "spirograph",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::Intro => "Epicycles",
            DemoKind::Square => "Square Wave",
            DemoKind::SawTriangle => "Sawtooth & Triangle",
            DemoKind::Freehand => "Draw Anything",
            DemoKind::Presets => "Preset Shapes",
            DemoKind::Explorer => "Frequency Explorer",
            DemoKind::Signal => "Signal Builder",
            DemoKind::Spirograph => "Spirograph",
        }
    }

    /// A fresh driver of this kind with default parameters.
    pub fn build(self) -> Box<dyn Demo> {
        match self {
            DemoKind::Intro => Box::new(IntroDemo::default()),
            DemoKind::Square => Box::new(SynthesisDemo::square()),
            DemoKind::SawTriangle => Box::new(SynthesisDemo::sawtooth()),
            DemoKind::Freehand => Box::new(FreehandDemo::default()),
            DemoKind::Presets => Box::new(PresetDemo::default()),
            DemoKind::Explorer => Box::new(ExplorerDemo::default()),
            DemoKind::Signal => Box::new(SignalDemo::default()),
            DemoKind::Spirograph => Box::new(SpirographDemo::default()),
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let alias = match key.as_str() {
            "saw" | "triangle" => "sawtooth",
            "freehand" => "draw",
            "presets" => "shapes",
            "explorer" => "dft",
            "spiro" => "spirograph",
            other => other,
        };
        DemoKind::ALL
            .into_iter()
            .find(|k| k.name() == alias)
            .ok_or_else(|| CoreError::UnknownDemo(s.to_string()))
    }
}

/// One animated panel.
pub trait Demo {
    fn kind(&self) -> DemoKind;

    /// Panel became visible at `viewport`. Must be safe to call repeatedly.
    fn activate(&mut self, viewport: Viewport);

    fn deactivate(&mut self) {}

    /// Tear down and reinitialise at the new size.
    fn resize(&mut self, viewport: Viewport) {
        self.deactivate();
        self.activate(viewport);
    }

    /// Advance time by `dt_sec` and refresh derived geometry and trails.
    fn step(&mut self, dt_sec: f64);

    /// Emit this frame's draw commands. Pure with respect to driver state.
    fn render(&self, out: &mut DrawList);

    /// Returns whether the control meant anything to this driver.
    fn apply(&mut self, control: Control) -> bool;

    fn pointer(&mut self, _input: PointerInput) {}

    /// Whether the panel is waiting for the user to draw.
    fn drawing(&self) -> bool {
        false
    }

    fn readouts(&self) -> Vec<Readout>;
}

/// One sample of a scrolling wave trace: the curve value (pixels, relative
/// to the trace's centre line) and the phase it was taken at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSample {
    pub value: f64,
    pub phase: f64,
}

/// Wave-trace capacity for a panel whose trace spans `fraction` of the width.
pub(crate) fn trace_capacity(viewport: Viewport, fraction: f64) -> usize {
    (viewport.width * fraction).floor().max(0.0) as usize
}

/// Newest sample at `start.x`, older samples one pixel further right each.
pub(crate) fn draw_wave_trace(out: &mut DrawList, trace: &Trail<WaveSample>, start: Point) {
    let len = trace.len();
    if len < 2 {
        return;
    }
    let mut prev: Option<Point> = None;
    for (i, s) in trace.iter().rev().enumerate() {
        let cur = Point::new(start.x + i as f64, start.y + s.value);
        if let Some(from) = prev {
            out.line(from, cur, trail_color(1.0 - i as f64 / len as f64), 2.0);
        }
        prev = Some(cur);
    }
}

/// Ideal waveform under a trace, evaluated at each sample's recorded phase.
pub(crate) fn draw_target_trace<F>(
    out: &mut DrawList,
    trace: &Trail<WaveSample>,
    start: Point,
    scale: f64,
    target: F,
) where
    F: Fn(f64) -> f64,
{
    let points = trace
        .iter()
        .rev()
        .enumerate()
        .map(|(i, s)| Point::new(start.x + i as f64, start.y + scale * target(s.phase)))
        .collect();
    out.polyline(points, crate::color::TARGET, 1.5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (i, kind) in DemoKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(DemoKind::from_index(i), Ok(kind));
            assert_eq!(kind.build().kind(), kind);
        }
        assert_eq!(DemoKind::from_index(8), Err(CoreError::DemoIndex(8)));
    }

    #[test]
    fn names_and_aliases_parse() {
        assert_eq!("shapes".parse::<DemoKind>(), Ok(DemoKind::Presets));
        assert_eq!("Spiro".parse::<DemoKind>(), Ok(DemoKind::Spirograph));
        assert_eq!("triangle".parse::<DemoKind>(), Ok(DemoKind::SawTriangle));
        assert!(matches!(
            "nope".parse::<DemoKind>(),
            Err(CoreError::UnknownDemo(_))
        ));
    }

    #[test]
    fn wave_trace_runs_right_from_newest() {
        let mut trace = Trail::new(10);
        for i in 0..3 {
            trace.push(WaveSample {
                value: i as f64,
                phase: 0.0,
            });
        }
        let mut out = DrawList::new();
        draw_wave_trace(&mut out, &trace, Point::new(100.0, 50.0));
        assert_eq!(out.len(), 2);
        match &out.commands()[0] {
            crate::draw::DrawCommand::Line { from, to, .. } => {
                assert_eq!(*from, Point::new(100.0, 52.0));
                assert_eq!(*to, Point::new(101.0, 51.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
