//! Colours and the fixed palette the drivers paint with.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with alpha replaced (clamped to [0, 1]).
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string for Canvas 2D style setters.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }

    /// Linear `[r, g, b, a]` in 0..1 for GPU vertex colours.
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

// Palette
pub const BACKGROUND: Color = Color::rgb(13, 0, 26);
pub const TEAL: Color = Color::rgb(33, 214, 198);
pub const PURPLE: Color = Color::rgb(142, 51, 213);
pub const MAGENTA: Color = Color::rgb(240, 0, 210);
pub const VIOLET: Color = Color::rgb(114, 0, 203);
pub const AXIS: Color = Color::rgba(255, 255, 255, 0.15);
pub const GRID: Color = Color::rgba(255, 255, 255, 0.05);
pub const TARGET: Color = Color::rgba(240, 0, 210, 0.45);

/// Per-component colours for the signal builder.
pub const COMPONENT_COLORS: [Color; 4] = [TEAL, PURPLE, MAGENTA, VIOLET];

/// Convert HSL (hue in degrees, saturation and lightness in 0..1) to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_u8 = |v: f64| ((v + m) * 255.0).clamp(0.0, 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b)]
}

/// Colour of a trail segment at `age` in [0, 1] (0 oldest, 1 newest):
/// teal fading into violet, more opaque towards the head.
pub fn trail_color(age: f64) -> Color {
    let [r, g, b] = hsl_to_rgb(170.0 + age * 60.0, 0.9, 0.4 + age * 0.3);
    Color::rgba(r, g, b, (0.2 + age * 0.8) as f32)
}

/// Spirograph trail ramp: deep blue through magenta.
pub fn spiro_color(age: f64) -> Color {
    let [r, g, b] = hsl_to_rgb(250.0 + age * 110.0, 0.85, 0.35 + age * 0.35);
    Color::rgba(r, g, b, (0.3 + age * 0.7) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(-120.0, 1.0, 0.5), [0, 0, 255]);
    }

    #[test]
    fn grey_when_unsaturated() {
        let [r, g, b] = hsl_to_rgb(200.0, 0.0, 0.5);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn trail_head_is_opaque() {
        assert!((trail_color(1.0).a - 1.0).abs() < 1e-6);
        assert!(trail_color(0.0).a < trail_color(0.5).a);
    }

    #[test]
    fn css_string_format() {
        assert_eq!(Color::rgba(1, 2, 3, 0.5).css(), "rgba(1,2,3,0.500)");
    }
}
