#![cfg(target_arch = "wasm32")]
use fourier_core::{DemoKind, DemoManager};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

use canvas::Canvas2dSurface;
use frame::{FrameContext, FrameLoop};

/// Resizing stops the loop, re-measures the active canvas and restarts.
fn wire_window_resize(frame: FrameLoop) {
    let resize_closure = Closure::wrap(Box::new(move || {
        frame.cancel();
        frame.ctx.borrow_mut().resize_active();
        frame.start();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn panel_surfaces(
    document: &web::Document,
    manager: &Rc<RefCell<DemoManager>>,
) -> Vec<Option<Canvas2dSurface>> {
    (0..DemoKind::COUNT)
        .map(|i| {
            let id = constants::canvas_id(i);
            let canvas = document
                .get_element_by_id(&id)
                .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
            let Some(canvas) = canvas else {
                log::warn!("[init] missing #{}", id);
                return None;
            };
            events::wire_canvas_pointer(&canvas, manager.clone());
            let viewport = dom::sync_canvas_backing_size(&canvas);
            match Canvas2dSurface::new(canvas, viewport) {
                Ok(s) => Some(s),
                Err(e) => {
                    log::error!("[init] #{}: {:?}", id, e);
                    None
                }
            }
        })
        .collect()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fourier-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let initial = DemoKind::default();
    let first_canvas = document
        .get_element_by_id(&constants::canvas_id(initial.index()))
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::canvas_id(initial.index())))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    overlay::sync_tabs(&document, initial.index());
    let viewport = dom::sync_canvas_backing_size(&first_canvas);
    let manager = Rc::new(RefCell::new(DemoManager::new(viewport, initial)));
    let surfaces = panel_surfaces(&document, &manager);

    let frame = FrameLoop::new(FrameContext {
        manager: manager.clone(),
        surfaces,
        document: document.clone(),
        last_instant: Instant::now(),
    });

    events::wire_tabs(&document, &frame);
    events::wire_buttons(&document, &manager);
    events::wire_panel_inputs(&document, &manager);
    events::wire_global_keydown(frame.clone());
    wire_window_resize(frame.clone());

    frame.start();
    Ok(())
}
