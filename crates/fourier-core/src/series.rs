//! Classic Fourier series used by the synthesis panels, and the ideal
//! waveforms they converge to.
//!
//! Series are expressed as epicycle components so the same evaluator draws
//! them. Their time parameter is an angle in radians; pass `angle / TAU` to
//! [`crate::epicycle::evaluate_epicycles`]. The vertical component of the
//! tip, divided by `scale`, approximates the matching target function.

use crate::dft::FrequencyComponent;
use crate::error::CoreError;
use smallvec::SmallVec;
use std::f64::consts::{FRAC_2_PI, PI};
use std::fmt;
use std::str::FromStr;

/// Inline storage covers the default slider ranges without allocating.
pub type SeriesChain = SmallVec<[FrequencyComponent; 16]>;

/// Odd harmonics `n = 1, 3, 5, …` with amplitude `scale · 4 / (nπ)`.
pub fn square_series(harmonics: usize, scale: f64) -> SeriesChain {
    (0..harmonics)
        .map(|i| {
            let n = 2 * i + 1;
            FrequencyComponent::from_signed(n, scale * 4.0 / (n as f64 * PI), 0.0)
        })
        .collect()
}

/// All harmonics `n = 1..=harmonics` with amplitude `±scale · 2 / (nπ)`,
/// negative for even `n`.
pub fn sawtooth_series(harmonics: usize, scale: f64) -> SeriesChain {
    (1..=harmonics)
        .map(|n| {
            let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
            FrequencyComponent::from_signed(n, sign * scale * 2.0 / (n as f64 * PI), 0.0)
        })
        .collect()
}

/// Odd harmonics up to `harmonics` with amplitude `±scale · 8 / (n²π²)`,
/// alternating sign starting positive.
pub fn triangle_series(harmonics: usize, scale: f64) -> SeriesChain {
    (1..=harmonics)
        .filter(|n| n % 2 == 1)
        .map(|n| {
            let sign = if (n / 2) % 2 == 0 { 1.0 } else { -1.0 };
            let nf = n as f64;
            FrequencyComponent::from_signed(n, sign * scale * 8.0 / (nf * nf * PI * PI), 0.0)
        })
        .collect()
}

/// ±1 square wave: +1 while `sin(phase) >= 0`.
pub fn square_wave(phase: f64) -> f64 {
    if phase.sin() >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Rising sawtooth through the origin: `phase / π` on (−π, π], repeating.
pub fn sawtooth_wave(phase: f64) -> f64 {
    crate::dft::principal_phase(phase) / PI
}

/// Triangle wave peaking at +1 when `phase = π/2`.
pub fn triangle_wave(phase: f64) -> f64 {
    FRAC_2_PI * phase.sin().asin()
}

/// Largest overshoot of the partial square-wave sum above its target, as a
/// fraction of the jump height (≈0.09 for many harmonics: the Gibbs
/// phenomenon).
pub fn square_overshoot(harmonics: usize) -> f64 {
    const SAMPLES: usize = 2000;
    let chain = square_series(harmonics, 1.0);
    let peak = (1..=SAMPLES)
        .map(|i| {
            let theta = (i as f64 / SAMPLES as f64) * (PI / 2.0);
            chain
                .iter()
                .map(|c| c.amplitude * (c.frequency as f64 * theta + c.phase).sin())
                .sum::<f64>()
        })
        .fold(f64::MIN, f64::max);
    // the jump runs from -1 to +1
    (peak - 1.0) / 2.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaveShape {
    #[default]
    Sawtooth,
    Triangle,
}

impl WaveShape {
    pub fn series(self, harmonics: usize, scale: f64) -> SeriesChain {
        match self {
            WaveShape::Sawtooth => sawtooth_series(harmonics, scale),
            WaveShape::Triangle => triangle_series(harmonics, scale),
        }
    }

    pub fn target(self, phase: f64) -> f64 {
        match self {
            WaveShape::Sawtooth => sawtooth_wave(phase),
            WaveShape::Triangle => triangle_wave(phase),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WaveShape::Sawtooth => "Sawtooth",
            WaveShape::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WaveShape {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sawtooth" | "saw" => Ok(WaveShape::Sawtooth),
            "triangle" => Ok(WaveShape::Triangle),
            _ => Err(CoreError::UnknownWave(s.to_string())),
        }
    }
}

/// One sinusoid of the signal builder: `amplitude · sin(frequency · t + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalComponent {
    pub frequency: f64,
    pub amplitude: f64,
    /// Radians.
    pub phase: f64,
}

impl SignalComponent {
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency * t + self.phase).sin()
    }
}

/// Sum of all components at `t`; silent components contribute nothing.
pub fn signal_value(components: &[SignalComponent], t: f64) -> f64 {
    components
        .iter()
        .filter(|c| c.amplitude != 0.0)
        .map(|c| c.value(t))
        .sum()
}
