//! Plain 2D geometry shared by the resampler, the DFT and the drivers.

use glam::DVec2;

/// A 2D coordinate relative to some local origin (usually a shape's centroid
/// or the canvas centre).
pub type Point = DVec2;

/// One rotating vector of an epicycle chain, captured at a single instant.
///
/// `center` is where the vector is anchored, `tip` where it ends; `radius` is
/// the vector's length and therefore the radius of the circle it sweeps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub tip: Point,
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Unit vector at `angle` radians, scaled by `radius`.
#[inline]
pub fn polar(radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(radius * cos, radius * sin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn lerp_point_hits_endpoints_and_midpoint() {
        let a = Point::new(0.0, 2.0);
        let b = Point::new(4.0, -2.0);
        assert_eq!(lerp_point(a, b, 0.0), a);
        assert_eq!(lerp_point(a, b, 1.0), b);
        assert_eq!(lerp_point(a, b, 0.5), Point::new(2.0, 0.0));
    }

    #[test]
    fn polar_quarter_turn_points_along_y() {
        let p = polar(3.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12);
    }
}
