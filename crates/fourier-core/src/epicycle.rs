//! Epicycle reconstruction: summing rotating vectors back into a point.

use crate::dft::FrequencyComponent;
use crate::geometry::{polar, Circle, Point};
use std::f64::consts::TAU;

/// Result of evaluating a chain at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reconstruction {
    pub tip: Point,
    pub circles: Vec<Circle>,
}

/// Sum the first `min(max_terms, chain.len())` components of `chain` at time
/// `t` (in traversals; one unit of `t` is one full trip around the curve).
///
/// Components are taken in chain order; sort the chain once beforehand if the
/// truncation should keep the largest vectors. Each term records a [`Circle`]
/// anchored where the running sum stood before that term was added. An empty
/// chain (or `max_terms == 0`) stays at the origin.
pub fn evaluate_epicycles(chain: &[FrequencyComponent], t: f64, max_terms: usize) -> Reconstruction {
    let count = max_terms.min(chain.len());
    let mut circles = Vec::with_capacity(count);
    let mut pos = Point::ZERO;
    for c in &chain[..count] {
        let center = pos;
        pos += polar(c.amplitude, term_angle(c, t));
        circles.push(Circle {
            center,
            radius: c.amplitude,
            tip: pos,
        });
    }
    Reconstruction { tip: pos, circles }
}

/// Same sum as [`evaluate_epicycles`] without recording the circles.
pub fn evaluate_tip(chain: &[FrequencyComponent], t: f64, max_terms: usize) -> Point {
    let count = max_terms.min(chain.len());
    chain[..count]
        .iter()
        .fold(Point::ZERO, |pos, c| pos + polar(c.amplitude, term_angle(c, t)))
}

/// Wrap a time parameter into [0, 1).
#[inline]
pub fn wrap_unit(t: f64) -> f64 {
    let w = t.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

#[inline]
fn term_angle(c: &FrequencyComponent, t: f64) -> f64 {
    c.frequency as f64 * t * TAU + c.phase
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(frequency: usize, amplitude: f64, phase: f64) -> FrequencyComponent {
        FrequencyComponent {
            frequency,
            amplitude,
            phase,
        }
    }

    #[test]
    fn circles_chain_from_origin_to_tip() {
        let chain = [comp(1, 2.0, 0.0), comp(2, 1.0, 0.0)];
        let r = evaluate_epicycles(&chain, 0.0, 10);
        assert_eq!(r.circles.len(), 2);
        assert_eq!(r.circles[0].center, Point::ZERO);
        assert_eq!(r.circles[0].tip, Point::new(2.0, 0.0));
        assert_eq!(r.circles[1].center, r.circles[0].tip);
        assert_eq!(r.circles[1].radius, 1.0);
        assert_eq!(r.tip, Point::new(3.0, 0.0));
    }

    #[test]
    fn max_terms_truncates_and_clamps() {
        let chain = [comp(1, 2.0, 0.0), comp(2, 1.0, 0.0)];
        assert_eq!(evaluate_epicycles(&chain, 0.0, 1).tip, Point::new(2.0, 0.0));
        assert_eq!(evaluate_epicycles(&chain, 0.0, 0).tip, Point::ZERO);
        assert_eq!(evaluate_epicycles(&chain, 0.0, 99).circles.len(), 2);
    }

    #[test]
    fn empty_chain_stays_at_origin() {
        let r = evaluate_epicycles(&[], 0.3, 5);
        assert_eq!(r.tip, Point::ZERO);
        assert!(r.circles.is_empty());
    }

    #[test]
    fn tip_only_matches_full_evaluation() {
        let chain = [comp(3, 1.5, 0.4), comp(0, 2.0, -1.0), comp(7, 0.25, 2.0)];
        for i in 0..20 {
            let t = i as f64 / 20.0;
            let full = evaluate_epicycles(&chain, t, 3).tip;
            let tip = evaluate_tip(&chain, t, 3);
            assert!(full.distance(tip) < 1e-12);
        }
    }

    #[test]
    fn wrap_unit_handles_negatives() {
        assert!((wrap_unit(1.25) - 0.25).abs() < 1e-12);
        assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-12);
        assert!(wrap_unit(-1e-300) < 1.0);
    }
}
