use crate::input;
use fourier_core::{DemoManager, PointerInput};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward pointer activity on one panel canvas to the active driver.
///
/// Only the visible panel's canvas can receive events, so no routing by
/// panel index is needed.
pub fn wire_canvas_pointer(canvas: &web::HtmlCanvasElement, manager: Rc<RefCell<DemoManager>>) {
    wire_pointerdown(canvas, manager.clone());
    wire_pointermove(canvas, manager.clone());
    wire_release(canvas, "pointerup", manager.clone(), PointerInput::Up);
    wire_release(canvas, "pointerleave", manager, PointerInput::Leave);
}

fn canvas_pos(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> fourier_core::Point {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, manager: Rc<RefCell<DemoManager>>) {
    let c = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = canvas_pos(&ev, &c);
        let mut m = manager.borrow_mut();
        if m.drawing() {
            _ = c.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
        m.pointer(PointerInput::Down(pos));
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, manager: Rc<RefCell<DemoManager>>) {
    let c = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = canvas_pos(&ev, &c);
        manager.borrow_mut().pointer(PointerInput::Move(pos));
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    manager: Rc<RefCell<DemoManager>>,
    input: PointerInput,
) {
    let c = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if c.has_pointer_capture(ev.pointer_id()) {
            _ = c.release_pointer_capture(ev.pointer_id());
        }
        manager.borrow_mut().pointer(input);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
