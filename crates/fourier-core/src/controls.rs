//! Host-facing vocabulary: parameter setters, pointer input and info readouts.
//!
//! Setters never fail. Out-of-range values are clamped into the ranges in
//! [`crate::constants`]; a control the active driver has no use for is
//! reported as unhandled and otherwise ignored.

use crate::demos::spirograph::SpiroPreset;
use crate::geometry::Point;
use crate::series::WaveShape;
use crate::shapes::ShapePreset;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    /// Circles / harmonics / epicycles, depending on the driver.
    SetTerms(usize),
    NudgeTerms(i32),
    SetSpeed(f64),
    SetTrailLength(usize),
    SetOpacity(f64),
    /// Wave / target / component / circle overlay, depending on the driver.
    SetOverlay(bool),
    ToggleOverlay,
    /// Clear trails and rewind time to zero.
    Reset,
    ToggleDrawing,
    Clear,
    SelectShape(ShapePreset),
    SelectWave(WaveShape),
    SelectSpiroPreset(SpiroPreset),
    SetBinAmplitude { bin: usize, amplitude: f64 },
    SetComponentFrequency { index: usize, frequency: f64 },
    SetComponentAmplitude { index: usize, amplitude: f64 },
    SetComponentPhase { index: usize, degrees: f64 },
    SetFixedRadius(f64),
    SetRollingRadius(f64),
    SetPenOffset(f64),
}

/// Pointer input in canvas pixels (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

/// One info label for the host to display, keyed by element id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    pub id: &'static str,
    pub value: String,
}

impl Readout {
    pub fn new(id: &'static str, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

#[inline]
pub fn clamp_f64(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if v.is_nan() {
        lo
    } else {
        v.clamp(lo, hi)
    }
}

#[inline]
pub fn clamp_usize(v: usize, (lo, hi): (usize, usize)) -> usize {
    v.clamp(lo, hi)
}

/// `current + delta`, saturating at zero, then clamped into `range`.
#[inline]
pub fn nudge(current: usize, delta: i32, range: (usize, usize)) -> usize {
    let moved = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        current.saturating_add(delta as usize)
    };
    clamp_usize(moved, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_range() {
        assert_eq!(clamp_f64(9.0, (0.1, 5.0)), 5.0);
        assert_eq!(clamp_f64(-1.0, (0.1, 5.0)), 0.1);
        assert_eq!(clamp_f64(f64::NAN, (0.1, 5.0)), 0.1);
        assert_eq!(clamp_usize(0, (1, 50)), 1);
    }

    #[test]
    fn nudge_saturates() {
        assert_eq!(nudge(3, -10, (1, 50)), 1);
        assert_eq!(nudge(49, 5, (1, 50)), 50);
        assert_eq!(nudge(10, 1, (1, 50)), 11);
    }
}
