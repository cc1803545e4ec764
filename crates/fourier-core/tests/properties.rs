// Properties of the resample → DFT → evaluate pipeline, checked over seeded
// random curves so failures reproduce.

use fourier_core::dft::principal_phase;
use fourier_core::{
    compute_dft, evaluate_epicycles, evaluate_tip, path_length, resample_path, EpicycleChain,
    Point,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

fn random_curve(rng: &mut StdRng, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0)))
        .collect()
}

/// A smooth closed blob: a circle with a few low-frequency wobbles.
fn blob(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * TAU;
            let r = 100.0 + 20.0 * (3.0 * a).sin() + 8.0 * (5.0 * a).cos();
            Point::new(r * a.cos(), r * a.sin())
        })
        .collect()
}

#[test]
fn round_trip_reproduces_every_sample() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [1usize, 2, 3, 16, 57, 128] {
        let pts = random_curve(&mut rng, n);
        let chain = EpicycleChain::unsorted(compute_dft(&pts));
        for (i, p) in pts.iter().enumerate() {
            let t = i as f64 / n as f64;
            let tip = evaluate_tip(chain.components(), t, n);
            assert!(tip.distance(*p) < 1e-8, "n={n} i={i} {tip:?} vs {p:?}");
        }
    }
}

#[test]
fn sorting_does_not_change_the_full_sum() {
    let pts = blob(64);
    let unsorted = EpicycleChain::unsorted(compute_dft(&pts));
    let sorted = EpicycleChain::from_points(&pts);
    for i in 0..64 {
        let t = i as f64 / 64.0;
        let a = evaluate_tip(unsorted.components(), t, 64);
        let b = evaluate_tip(sorted.components(), t, 64);
        assert!(a.distance(b) < 1e-8);
    }
}

fn mean_squared_error(chain: &EpicycleChain, truth: &[Point], terms: usize) -> f64 {
    let n = truth.len();
    truth
        .iter()
        .enumerate()
        .map(|(i, p)| evaluate_tip(chain.components(), i as f64 / n as f64, terms).distance_squared(*p))
        .sum::<f64>()
        / n as f64
}

#[test]
fn more_terms_never_hurt() {
    let mut rng = StdRng::seed_from_u64(11);
    for pts in [blob(48), random_curve(&mut rng, 40)] {
        let chain = EpicycleChain::from_points(&pts);
        let n = pts.len();
        let mut prev = f64::INFINITY;
        for terms in 0..=n {
            let err = mean_squared_error(&chain, &pts, terms);
            assert!(err <= prev + 1e-9, "terms={terms} err={err} prev={prev}");
            prev = err;
        }
        assert!(prev < 1e-12, "full chain error {prev}");
    }
}

#[test]
fn resample_always_returns_n_points() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let len = rng.gen_range(2..50);
        let pts = random_curve(&mut rng, len);
        for n in [1, 2, 7, 100, 333] {
            assert_eq!(resample_path(&pts, n).len(), n);
        }
    }
}

#[test]
fn resampled_points_are_evenly_spaced() {
    // densely sampled smooth curve, so chords match arc length closely
    let dense = blob(2000);
    let total = path_length(&dense);
    let out = resample_path(&dense, 100);
    let step = total / 100.0;
    for w in out.windows(2) {
        let d = w[0].distance(w[1]);
        assert!((d - step).abs() < step * 0.01, "{d} vs {step}");
    }
}

#[test]
fn amplitudes_are_non_negative_and_phases_principal() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..10 {
        let len = rng.gen_range(1..80);
        let pts = random_curve(&mut rng, len);
        for c in compute_dft(&pts) {
            assert!(c.amplitude >= 0.0);
            assert!(c.phase > -PI && c.phase <= PI, "phase {}", c.phase);
            assert_eq!(principal_phase(c.phase), c.phase);
        }
    }
}

#[test]
fn reconstruction_has_period_one() {
    let mut rng = StdRng::seed_from_u64(5);
    let pts = random_curve(&mut rng, 32);
    let chain = EpicycleChain::from_points(&pts);
    for terms in [0, 1, 5, 32] {
        for _ in 0..10 {
            let t: f64 = rng.gen_range(0.0..1.0);
            let a = evaluate_epicycles(chain.components(), t, terms);
            let b = evaluate_epicycles(chain.components(), t + 1.0, terms);
            assert!(a.tip.distance(b.tip) < 1e-8);
            assert_eq!(a.circles.len(), b.circles.len());
        }
    }
}
