use crate::canvas::Canvas2dSurface;
use crate::dom;
use crate::overlay;
use fourier_core::{DemoKind, DemoManager, Surface};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub manager: Rc<RefCell<DemoManager>>,
    /// One per panel in tab order; `None` where the page has no canvas.
    pub surfaces: Vec<Option<Canvas2dSurface>>,
    pub document: web::Document,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        let mut manager = self.manager.borrow_mut();
        let Some(Some(surface)) = self.surfaces.get_mut(manager.active().index()) else {
            return;
        };
        if let Err(e) = manager.frame(dt_sec, surface) {
            log::error!("[frame] {}: {}", manager.active(), e);
        }
        overlay::write_readouts(&self.document, &manager.readouts());
        overlay::sync_drawing_class(surface.canvas(), manager.drawing());
    }

    /// Re-measure the active panel's canvas and reinitialise its driver.
    pub fn resize_active(&mut self) {
        let mut manager = self.manager.borrow_mut();
        let Some(Some(surface)) = self.surfaces.get_mut(manager.active().index()) else {
            return;
        };
        let viewport = dom::sync_canvas_backing_size(surface.canvas());
        surface.resize(viewport);
        manager.resize(viewport);
    }

    /// Show `kind`'s panel and hand it the screen.
    pub fn select(&mut self, kind: DemoKind) {
        let previous = self.manager.borrow().active();
        if let Some(Some(surface)) = self.surfaces.get(previous.index()) {
            overlay::sync_drawing_class(surface.canvas(), false);
        }
        // the panel has to be visible before its canvas can be measured
        overlay::sync_tabs(&self.document, kind.index());
        self.manager.borrow_mut().switch_to(kind);
        self.resize_active();
    }
}

/// `requestAnimationFrame` loop whose pending callback can be cancelled.
#[derive(Clone)]
pub struct FrameLoop {
    pub ctx: Rc<RefCell<FrameContext>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        Self {
            ctx: Rc::new(RefCell::new(ctx)),
            handle: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        }
    }

    pub fn start(&self) {
        if self.handle.get().is_some() {
            return;
        }
        if self.tick.borrow().is_none() {
            let ctx = self.ctx.clone();
            let handle = self.handle.clone();
            let tick_clone = self.tick.clone();
            *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                handle.set(None);
                ctx.borrow_mut().frame();
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    handle.set(request_frame(cb));
                }
            }) as Box<dyn FnMut()>));
        }
        self.ctx.borrow_mut().last_instant = Instant::now();
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.handle.set(request_frame(cb));
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
