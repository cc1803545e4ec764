//! Discrete Fourier transform over 2D point sequences.
//!
//! Each point is read as the complex sample `x + iy`. The transform is the
//! plain O(N²) sum; inputs are interactively sized curves (a few hundred
//! samples), where that comfortably fits inside a frame.

use crate::geometry::Point;
use std::f64::consts::{PI, TAU};

/// One rotating vector: `frequency` full turns per traversal of the curve,
/// starting at `phase` radians, with length `amplitude`.
///
/// `frequency == 0` is the DC term, i.e. the centroid of the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyComponent {
    pub frequency: usize,
    pub amplitude: f64,
    pub phase: f64,
}

impl FrequencyComponent {
    /// Build a component from a signed coefficient. A negative `amplitude`
    /// becomes a half-turn of phase so the stored amplitude stays >= 0.
    pub fn from_signed(frequency: usize, amplitude: f64, phase: f64) -> Self {
        if amplitude < 0.0 {
            Self {
                frequency,
                amplitude: -amplitude,
                phase: principal_phase(phase + PI),
            }
        } else {
            Self {
                frequency,
                amplitude,
                phase: principal_phase(phase),
            }
        }
    }
}

/// Fold an angle into (−π, π].
#[inline]
pub fn principal_phase(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Transform `points` into one component per input sample.
///
/// For output index `k` and input index `n`, with `φ = 2πkn/N`:
/// `re = Σ x·cos φ + y·sin φ` and `im = Σ y·cos φ − x·sin φ`, both divided by
/// `N`. This orientation is what makes [`crate::epicycle::evaluate_epicycles`]
/// trace the input with the same handedness; keep it when touching this code.
///
/// An empty input yields an empty output.
pub fn compute_dft(points: &[Point]) -> Vec<FrequencyComponent> {
    let n_samples = points.len();
    let scale = n_samples as f64;
    (0..n_samples)
        .map(|k| {
            let mut re = 0.0;
            let mut im = 0.0;
            for (n, p) in points.iter().enumerate() {
                let phi = TAU * (k * n) as f64 / scale;
                let (sin, cos) = phi.sin_cos();
                re += p.x * cos + p.y * sin;
                im += p.y * cos - p.x * sin;
            }
            re /= scale;
            im /= scale;
            FrequencyComponent {
                frequency: k,
                amplitude: (re * re + im * im).sqrt(),
                phase: principal_phase(im.atan2(re)),
            }
        })
        .collect()
}

/// Read-only list of frequency components ready for reconstruction.
///
/// The order is fixed at construction. [`EpicycleChain::from_points`] and
/// [`EpicycleChain::sorted`] order by descending amplitude so that the first
/// `K` terms are the `K` most significant vectors; [`EpicycleChain::unsorted`]
/// keeps transform order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpicycleChain {
    components: Vec<FrequencyComponent>,
}

impl EpicycleChain {
    /// Run the DFT on `points` and sort the result once.
    pub fn from_points(points: &[Point]) -> Self {
        Self::sorted(compute_dft(points))
    }

    pub fn sorted(mut components: Vec<FrequencyComponent>) -> Self {
        components.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));
        Self { components }
    }

    pub fn unsorted(components: Vec<FrequencyComponent>) -> Self {
        Self { components }
    }

    #[inline]
    pub fn components(&self) -> &[FrequencyComponent] {
        &self.components
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_phase_stays_in_half_open_range() {
        assert_eq!(principal_phase(-PI), PI);
        assert_eq!(principal_phase(PI), PI);
        assert!((principal_phase(3.0 * PI) - PI).abs() < 1e-12);
        assert!((principal_phase(-0.5) + 0.5).abs() < 1e-12);
        assert!((principal_phase(TAU + 0.25) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(compute_dft(&[]).is_empty());
        assert!(EpicycleChain::from_points(&[]).is_empty());
    }

    #[test]
    fn constant_curve_is_all_dc() {
        let pts = vec![Point::new(3.0, -4.0); 8];
        let dft = compute_dft(&pts);
        assert_eq!(dft.len(), 8);
        assert!((dft[0].amplitude - 5.0).abs() < 1e-12);
        for c in &dft[1..] {
            assert!(c.amplitude < 1e-12, "k={} amp={}", c.frequency, c.amplitude);
        }
    }

    #[test]
    fn sorted_chain_is_descending_by_amplitude() {
        let comps = vec![
            FrequencyComponent { frequency: 0, amplitude: 1.0, phase: 0.0 },
            FrequencyComponent { frequency: 1, amplitude: 5.0, phase: 0.0 },
            FrequencyComponent { frequency: 2, amplitude: 3.0, phase: 0.0 },
        ];
        let chain = EpicycleChain::sorted(comps);
        let freqs: Vec<usize> = chain.components().iter().map(|c| c.frequency).collect();
        assert_eq!(freqs, vec![1, 2, 0]);
    }

    #[test]
    fn from_signed_flips_negative_amplitude_into_phase() {
        let c = FrequencyComponent::from_signed(2, -3.0, 0.0);
        assert_eq!(c.amplitude, 3.0);
        assert!((c.phase - PI).abs() < 1e-12);
    }
}
