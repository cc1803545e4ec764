use crate::constants::{value_label_id, PANEL_SELECTOR, TAB_SELECTOR};
use crate::controls::{control_for_button, control_for_input, spiro_slider_values, value_label};
use crate::dom;
use crate::frame::FrameLoop;
use fourier_core::{Control, DemoKind, DemoManager};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_tabs(document: &web::Document, frame: &FrameLoop) {
    for (i, tab) in dom::query_all(document, TAB_SELECTOR).into_iter().enumerate() {
        let Ok(kind) = DemoKind::from_index(i) else {
            log::warn!("[tabs] extra tab at index {}", i);
            continue;
        };
        let frame = frame.clone();
        let closure = Closure::wrap(Box::new(move || {
            frame.ctx.borrow_mut().select(kind);
        }) as Box<dyn FnMut()>);
        _ = tab.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_buttons(document: &web::Document, manager: &Rc<RefCell<DemoManager>>) {
    for id in crate::controls::button_ids() {
        let Some(control) = control_for_button(&id) else {
            continue;
        };
        let manager = manager.clone();
        dom::add_click_listener(document, &id, move || {
            manager.borrow_mut().apply(control);
        });
    }
}

/// Hook every slider, checkbox and select inside a demo panel.
pub fn wire_panel_inputs(document: &web::Document, manager: &Rc<RefCell<DemoManager>>) {
    let selector = format!("{PANEL_SELECTOR} input, {PANEL_SELECTOR} select");
    let mut wired = 0usize;
    for el in dom::query_all(document, &selector) {
        let id = el.id();
        if id.is_empty() {
            continue;
        }
        let (event, read): (&str, Box<dyn Fn() -> String>) =
            if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
                let select = select.clone();
                ("change", Box::new(move || select.value()))
            } else if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                let input = input.clone();
                if input.type_() == "checkbox" {
                    ("change", Box::new(move || input.checked().to_string()))
                } else {
                    ("input", Box::new(move || input.value()))
                }
            } else {
                continue;
            };
        let manager = manager.clone();
        let doc = document.clone();
        let is_slider = event == "input";
        let closure = Closure::wrap(Box::new(move || {
            let value = read();
            if is_slider {
                dom::set_text(&doc, &value_label_id(&id), &value_label(&id, &value));
            }
            let Some(control) = control_for_input(&id, &value) else {
                return;
            };
            manager.borrow_mut().apply(control);
            if let Control::SelectSpiroPreset(preset) = control {
                for (slider, v) in spiro_slider_values(preset) {
                    dom::set_slider(&doc, slider, v);
                }
            }
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
        wired += 1;
    }
    log::info!("[controls] wired {} panel inputs", wired);
}
