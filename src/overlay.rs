use crate::constants::{ACTIVE_CLASS, DRAWING_CLASS, PANEL_SELECTOR, TAB_SELECTOR};
use crate::dom;
use fourier_core::Readout;
use web_sys as web;

/// Mark the tab and panel at `active` and clear the rest.
pub fn sync_tabs(document: &web::Document, active: usize) {
    for selector in [TAB_SELECTOR, PANEL_SELECTOR] {
        for (i, el) in dom::query_all(document, selector).iter().enumerate() {
            dom::set_class(el, ACTIVE_CLASS, i == active);
        }
    }
}

#[inline]
pub fn write_readouts(document: &web::Document, readouts: &[Readout]) {
    for r in readouts {
        dom::set_text(document, r.id, &r.value);
    }
}

/// Crosshair styling on the canvas wrapper while a stroke is expected.
#[inline]
pub fn sync_drawing_class(canvas: &web::HtmlCanvasElement, drawing: bool) {
    if let Some(wrap) = canvas.parent_element() {
        if wrap.class_list().contains(DRAWING_CLASS) != drawing {
            dom::set_class(&wrap, DRAWING_CLASS, drawing);
        }
    }
}
