// Shared timing and tuning constants for the demo drivers.
//
// Rates are expressed per reference frame (1/60 s) so the animation speed
// matches the classic per-frame increments regardless of the host's actual
// frame rate.

/// Duration of one reference frame in seconds.
pub const REFERENCE_FRAME_SEC: f64 = 1.0 / 60.0;
/// Longest step a single frame may take; avoids jumps after a stalled tab.
pub const MAX_STEP_SEC: f64 = 0.1;

// Time advance per reference frame at speed 1.0
pub const INTRO_RAD_PER_FRAME: f64 = 0.008;
pub const SQUARE_RAD_PER_FRAME: f64 = 0.008;
pub const SAW_RAD_PER_FRAME: f64 = 0.008;
pub const FREEHAND_CYCLES_PER_FRAME: f64 = 0.003;
pub const PRESET_CYCLES_PER_FRAME: f64 = 0.002;
pub const EXPLORER_RAD_PER_FRAME: f64 = 0.008;
pub const SIGNAL_RAD_PER_FRAME: f64 = 0.01;
pub const SPIRO_RAD_PER_FRAME: f64 = 0.02;
pub const SPIRO_SUBSTEPS: usize = 3;

// Parameter ranges (inclusive); setters clamp into these
pub const SPEED_RANGE: (f64, f64) = (0.1, 5.0);
pub const HARMONICS_RANGE: (usize, usize) = (1, 50);
pub const EPICYCLES_RANGE: (usize, usize) = (1, 500);
pub const TRAIL_RANGE: (usize, usize) = (10, 5000);
pub const BIN_AMPLITUDE_MAX: f64 = 100.0;
pub const SIGNAL_FREQUENCY_RANGE: (f64, f64) = (1.0, 20.0);
pub const SIGNAL_AMPLITUDE_MAX: f64 = 200.0;
pub const SPIRO_RADIUS_RANGE: (f64, f64) = (5.0, 200.0);
pub const SPIRO_PEN_RANGE: (f64, f64) = (0.0, 200.0);

// Geometry scales (pixels)
pub const INTRO_SCALE: f64 = 80.0;
pub const SQUARE_SCALE: f64 = 90.0;
pub const SAW_SCALE: f64 = 80.0;
pub const EXPLORER_RADIUS_PER_UNIT: f64 = 0.6;
pub const SIGNAL_PLOT_MARGIN: f64 = 40.0;
pub const SIGNAL_PLOT_MAX_AMPLITUDE: f64 = 200.0;

// Freehand drawing
/// Captured points required before replay is allowed (strictly more than this).
pub const MIN_REPLAY_POINTS: usize = 10;
/// Lower bound on the resample count; the actual count is max(2·epicycles, this).
pub const MIN_RESAMPLE_POINTS: usize = 100;

// Trail caps
pub const FREEHAND_TRAIL_PER_SAMPLE: usize = 3;
pub const PRESET_TRAIL_MIN: usize = 800;
pub const SPIRO_TRAIL_MAX: usize = 15_000;

/// Number of whole-or-fractional reference frames covered by `dt_sec`,
/// after clamping to [`MAX_STEP_SEC`].
#[inline]
pub fn reference_frames(dt_sec: f64) -> f64 {
    dt_sec.clamp(0.0, MAX_STEP_SEC) / REFERENCE_FRAME_SEC
}
