//! Procedural preset curves for the shapes panel.
//!
//! Every generator is a pure function returning a closed point sequence
//! centred roughly on the origin, in canvas pixels with y pointing down.
//! Key-point outlines are scaled and then resampled by arc length; the
//! parametric curves are sampled uniformly in their parameter.

use crate::error::CoreError;
use crate::geometry::{lerp_point, polar, Point};
use crate::resample::resample_path;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapePreset {
    #[default]
    Star,
    Heart,
    Treble,
    Pi,
    Infinity,
    Butterfly,
    Arrow,
    Sigma,
}

impl ShapePreset {
    pub const ALL: [ShapePreset; 8] = [
        ShapePreset::Star,
        ShapePreset::Heart,
        ShapePreset::Treble,
        ShapePreset::Pi,
        ShapePreset::Infinity,
        ShapePreset::Butterfly,
        ShapePreset::Arrow,
        ShapePreset::Sigma,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapePreset::Star => "star",
            ShapePreset::Heart => "heart",
            ShapePreset::Treble => "treble",
            ShapePreset::Pi => "pi",
            ShapePreset::Infinity => "infinity",
            ShapePreset::Butterfly => "butterfly",
            ShapePreset::Arrow => "arrow",
            ShapePreset::Sigma => "sigma",
        }
    }

    /// Generate the preset at its default sample count.
    pub fn points(self) -> Vec<Point> {
        match self {
            ShapePreset::Star => star(5, 120.0, 50.0, 200),
            ShapePreset::Heart => heart(200),
            ShapePreset::Treble => treble_clef(200),
            ShapePreset::Pi => pi_symbol(200),
            ShapePreset::Infinity => lemniscate(100.0, 200),
            ShapePreset::Butterfly => butterfly(250),
            ShapePreset::Arrow => arrow(150),
            ShapePreset::Sigma => sigma(150),
        }
    }
}

impl fmt::Display for ShapePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapePreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ShapePreset::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| CoreError::UnknownShape(s.to_string()))
    }
}

/// Star with `tips` points alternating between `outer` and `inner` radius,
/// first tip straight up, edges straight between vertices.
pub fn star(tips: usize, outer: f64, inner: f64, samples: usize) -> Vec<Point> {
    let vertices = tips * 2;
    let vertex = |idx: usize| {
        let r = if idx % 2 == 0 { outer } else { inner };
        polar(r, (idx as f64 / vertices as f64) * TAU - FRAC_PI_2)
    };
    (0..samples)
        .map(|i| {
            let pos = (i as f64 / samples as f64) * vertices as f64;
            let seg = pos.floor() as usize;
            lerp_point(vertex(seg), vertex(seg + 1), pos - seg as f64)
        })
        .collect()
}

/// The classic `16 sin³ t` heart, scaled ×8 and flipped so the point is down.
pub fn heart(samples: usize) -> Vec<Point> {
    const SCALE: f64 = 8.0;
    (0..samples)
        .map(|i| {
            let t = (i as f64 / samples as f64) * TAU;
            let x = 16.0 * t.sin().powi(3);
            let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
            Point::new(x * SCALE, y * SCALE)
        })
        .collect()
}

/// Lemniscate of Bernoulli with half-width `a`.
pub fn lemniscate(a: f64, samples: usize) -> Vec<Point> {
    (0..samples)
        .map(|i| {
            let t = (i as f64 / samples as f64) * TAU;
            let denom = 1.0 + t.sin() * t.sin();
            Point::new(a * t.cos() / denom, a * t.sin() * t.cos() / denom)
        })
        .collect()
}

/// Temple Fay's butterfly curve over six turns, scaled ×40.
pub fn butterfly(samples: usize) -> Vec<Point> {
    (0..samples)
        .map(|i| {
            let t = (i as f64 / samples as f64) * 6.0 * TAU;
            let r = t.sin().exp() - 2.0 * (4.0 * t).cos() + ((2.0 * t - PI) / 24.0).sin().powi(5);
            Point::new(r * t.sin() * 40.0, -r * t.cos() * 40.0)
        })
        .collect()
}

pub fn treble_clef(samples: usize) -> Vec<Point> {
    const KEYS: [(f64, f64); 36] = [
        (0.0, 80.0), (-5.0, 70.0), (-10.0, 55.0), (-8.0, 40.0), (0.0, 30.0),
        (10.0, 25.0), (15.0, 15.0), (12.0, 5.0), (5.0, 0.0), (-5.0, 5.0),
        (-15.0, 15.0), (-20.0, 30.0), (-18.0, 45.0), (-10.0, 55.0), (0.0, 58.0),
        (10.0, 55.0), (18.0, 45.0), (20.0, 30.0), (15.0, 15.0), (5.0, 5.0),
        (0.0, -10.0), (2.0, -30.0), (5.0, -50.0), (3.0, -65.0), (0.0, -75.0),
        (-5.0, -80.0), (-10.0, -70.0), (-5.0, -60.0), (0.0, -50.0),
        (3.0, -35.0), (2.0, -15.0), (0.0, 0.0), (-2.0, 20.0), (-3.0, 40.0),
        (-2.0, 60.0), (0.0, 80.0),
    ];
    outline(&KEYS, 1.5, samples)
}

pub fn pi_symbol(samples: usize) -> Vec<Point> {
    const KEYS: [(f64, f64); 33] = [
        (-50.0, 30.0), (-50.0, -30.0), (-45.0, -35.0), (-35.0, -38.0),
        (35.0, -38.0), (45.0, -35.0), (50.0, -30.0), (50.0, 30.0),
        (45.0, 30.0), (40.0, -30.0), (35.0, -33.0), (30.0, -33.0),
        (25.0, -30.0), (20.0, 25.0), (15.0, 35.0), (10.0, 38.0),
        (5.0, 35.0), (5.0, 25.0), (8.0, -30.0), (5.0, -33.0),
        (-5.0, -33.0), (-8.0, -30.0), (-5.0, 25.0), (-5.0, 35.0),
        (-10.0, 38.0), (-15.0, 35.0), (-20.0, 25.0), (-25.0, -30.0),
        (-30.0, -33.0), (-35.0, -33.0), (-40.0, -30.0), (-45.0, 30.0),
        (-50.0, 30.0),
    ];
    outline(&KEYS, 2.0, samples)
}

pub fn arrow(samples: usize) -> Vec<Point> {
    const KEYS: [(f64, f64); 8] = [
        (0.0, -80.0), (50.0, 0.0), (25.0, 0.0), (25.0, 80.0),
        (-25.0, 80.0), (-25.0, 0.0), (-50.0, 0.0), (0.0, -80.0),
    ];
    outline(&KEYS, 1.2, samples)
}

pub fn sigma(samples: usize) -> Vec<Point> {
    const KEYS: [(f64, f64); 15] = [
        (50.0, -60.0), (45.0, -55.0), (-5.0, -55.0), (-35.0, 0.0),
        (-5.0, 55.0), (45.0, 55.0), (50.0, 60.0), (50.0, 65.0),
        (-55.0, 65.0), (-55.0, 55.0), (-10.0, 0.0), (-55.0, -55.0),
        (-55.0, -65.0), (50.0, -65.0), (50.0, -60.0),
    ];
    outline(&KEYS, 1.5, samples)
}

fn outline(keys: &[(f64, f64)], scale: f64, samples: usize) -> Vec<Point> {
    let scaled: Vec<Point> = keys
        .iter()
        .map(|&(x, y)| Point::new(x * scale, y * scale))
        .collect();
    resample_path(&scaled, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_has_its_sample_count() {
        let expected = [200, 200, 200, 200, 200, 250, 150, 150];
        for (preset, n) in ShapePreset::ALL.into_iter().zip(expected) {
            let pts = preset.points();
            assert_eq!(pts.len(), n, "{preset}");
            assert!(pts.iter().all(|p| p.is_finite()), "{preset}");
        }
    }

    #[test]
    fn star_starts_at_the_top_tip() {
        let pts = star(5, 120.0, 50.0, 200);
        assert!(pts[0].x.abs() < 1e-9);
        assert!((pts[0].y + 120.0).abs() < 1e-9);
    }

    #[test]
    fn heart_is_mirror_symmetric() {
        let pts = heart(200);
        // t and 2π - t mirror across the y axis
        for i in 1..100 {
            let a = pts[i];
            let b = pts[200 - i];
            assert!((a.x + b.x).abs() < 1e-9);
            assert!((a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn names_round_trip_through_parse() {
        for preset in ShapePreset::ALL {
            assert_eq!(preset.name().parse::<ShapePreset>(), Ok(preset));
        }
        assert_eq!(" Heart ".parse::<ShapePreset>(), Ok(ShapePreset::Heart));
        assert!(matches!(
            "circle".parse::<ShapePreset>(),
            Err(CoreError::UnknownShape(_))
        ));
    }
}
