use fourier_core::{Point, Viewport};

use crate::constants::{FALLBACK_CSS_HEIGHT, FALLBACK_CSS_WIDTH};

// ---------------- Pointer helpers ----------------

/// Client coordinates to canvas CSS pixels, given the canvas' bounding rect
/// origin. Drivers work in CSS pixels; the 2D context carries the DPR scale.
#[inline]
pub fn client_to_canvas(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point::new(client_x - rect_left, client_y - rect_top)
}

// ---------------- Canvas sizing ----------------

/// Layout size of a canvas wrapper, or a fallback while it is hidden.
#[inline]
pub fn css_viewport(css_width: f64, css_height: f64) -> Viewport {
    if css_width >= 1.0 && css_height >= 1.0 {
        Viewport::new(css_width, css_height)
    } else {
        Viewport::new(FALLBACK_CSS_WIDTH, FALLBACK_CSS_HEIGHT)
    }
}

/// Backing store size in device pixels, never zero.
#[inline]
pub fn backing_size(viewport: Viewport, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (viewport.width * dpr).floor().max(1.0) as u32;
    let h = (viewport.height * dpr).floor().max(1.0) as u32;
    (w, h)
}

// ---------------- Keyboard focus ----------------

/// Keys typed into form fields belong to the field, not the demos.
#[inline]
pub fn is_form_field(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "SELECT" | "TEXTAREA" | "BUTTON"
    )
}
