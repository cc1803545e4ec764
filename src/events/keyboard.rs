use crate::frame::FrameLoop;
use crate::input;
use fourier_core::{action_for_key, KeyAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn focused_form_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| input::is_form_field(&el.tag_name()))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, frame: &FrameLoop) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || focused_form_field(ev) {
        return;
    }
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    match action {
        KeyAction::SelectDemo(kind) => {
            frame.ctx.borrow_mut().select(kind);
            log::info!("[keys] {} -> {}", key, kind);
        }
        KeyAction::Apply(control) => {
            let ctx = frame.ctx.borrow();
            ctx.manager.borrow_mut().apply(control);
        }
    }
    if key == " " {
        // keep the page from scrolling
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(frame: FrameLoop) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &frame);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
