//! Arc-length resampling of polylines.
//!
//! Raw pointer captures arrive unevenly spaced (fast strokes leave big gaps,
//! slow strokes pile up points) and key-point outlines have only a handful of
//! vertices. The DFT wants uniformly spaced samples, so both are resampled
//! here into `n` points evenly spaced by distance travelled along the path.
//!
//! Degenerate paths (fewer than two points, or zero total length) are passed
//! through as a best-effort copy instead of failing. Anything computed from
//! such output downstream is degenerate too; callers that care (the freehand
//! driver) require a minimum number of captured points first.

use crate::geometry::{lerp_point, Point};

/// Where the `n` output samples sit along the path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spacing {
    /// Target distance `(i / n) · total`: the curve is treated as closed, so
    /// the step from the last sample back to the first matches every other
    /// step. This is what the DFT wants.
    #[default]
    Closed,
    /// Target distance `(i / (n - 1)) · total`: both endpoints are included.
    Open,
}

/// Total length of the polyline through `points`, in order.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Resample `points` into exactly `n` points with [`Spacing::Closed`].
pub fn resample_path(points: &[Point], n: usize) -> Vec<Point> {
    resample_path_with(points, n, Spacing::Closed)
}

/// Resample `points` into exactly `n` points evenly spaced by arc length.
///
/// Returns a copy of the input when it has fewer than two points, and the
/// first `min(n, len)` points when the path has zero length.
pub fn resample_path_with(points: &[Point], n: usize, spacing: Spacing) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    if n == 0 {
        return Vec::new();
    }

    let mut dists = Vec::with_capacity(points.len());
    dists.push(0.0);
    for w in points.windows(2) {
        let prev = dists[dists.len() - 1];
        dists.push(prev + w[0].distance(w[1]));
    }
    let total = dists[dists.len() - 1];
    if total == 0.0 {
        return points[..n.min(points.len())].to_vec();
    }

    let denom = match spacing {
        Spacing::Closed => n as f64,
        Spacing::Open if n > 1 => (n - 1) as f64,
        Spacing::Open => 1.0,
    };
    let last = points.len() - 1;

    (0..n)
        .map(|i| {
            let target = (i as f64 / denom) * total;
            // First vertex index j >= 1 whose cumulative distance reaches the
            // target; zero-length segments are stepped over by the search.
            let j = 1 + dists[1..last].partition_point(|&d| d < target);
            let seg_len = dists[j] - dists[j - 1];
            let t = if seg_len > 0.0 {
                (target - dists[j - 1]) / seg_len
            } else {
                0.0
            };
            lerp_point(points[j - 1], points[j], t)
        })
        .collect()
}
