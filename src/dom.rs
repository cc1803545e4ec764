use crate::input;
use fourier_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}

/// Move a slider without firing its listeners, and refresh its label.
pub fn set_slider(document: &web::Document, element_id: &str, value: f64) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(slider) = el.dyn_into::<web::HtmlInputElement>() {
            slider.set_value(&format!("{value}"));
        }
    }
    set_text(
        document,
        &crate::constants::value_label_id(element_id),
        &format!("{value}"),
    );
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Size the canvas backing store from its wrapper's layout box and return
/// the logical (CSS pixel) viewport the drivers should use.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let (css_w, css_h) = canvas
        .parent_element()
        .map(|p| {
            let rect = p.get_bounding_client_rect();
            (rect.width(), rect.height())
        })
        .unwrap_or((0.0, 0.0));
    let viewport = input::css_viewport(css_w, css_h);
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w_px, h_px) = input::backing_size(viewport, dpr);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    viewport
}
