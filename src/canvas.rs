use fourier_core::{Color, CoreError, DrawCommand, DrawList, Point, Surface, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const DASH_PATTERN: [f64; 2] = [4.0, 4.0];

/// A panel canvas' 2D context. Commands arrive in CSS pixels; the context
/// transform scales them to the device-pixel backing store.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
    dash: js_sys::Array,
    no_dash: js_sys::Array,
}

impl Canvas2dSurface {
    pub fn new(canvas: web::HtmlCanvasElement, viewport: Viewport) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let dash = DASH_PATTERN.iter().map(|d| JsValue::from_f64(*d)).collect();
        let mut surface = Self {
            canvas,
            ctx,
            viewport,
            dash,
            no_dash: js_sys::Array::new(),
        };
        surface.resize(viewport);
        Ok(surface)
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn apply_transform(&self) {
        let vw = self.viewport.width.max(1.0);
        let scale = self.canvas.width() as f64 / vw;
        _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn stroke_path(&self, color: &Color, width: f64, dashed: bool) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width);
        if dashed {
            _ = self.ctx.set_line_dash(&self.dash);
        }
        self.ctx.stroke();
        if dashed {
            _ = self.ctx.set_line_dash(&self.no_dash);
        }
    }

    fn draw(&self, cmd: &DrawCommand) -> Result<(), CoreError> {
        let ctx = &self.ctx;
        match cmd {
            DrawCommand::Clear(color) => {
                ctx.set_fill_style_str(&color.css());
                ctx.fill_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
                dashed,
            } => {
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                self.stroke_path(color, *width, *dashed);
            }
            DrawCommand::Polyline {
                points,
                color,
                width,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                ctx.begin_path();
                ctx.move_to(first.x, first.y);
                for p in rest {
                    ctx.line_to(p.x, p.y);
                }
                self.stroke_path(color, *width, false);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                width,
            } => {
                ctx.begin_path();
                arc(ctx, *center, *radius)?;
                self.stroke_path(color, *width, false);
            }
            DrawCommand::Disc {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                arc(ctx, *center, *radius)?;
                ctx.set_fill_style_str(&color.css());
                ctx.fill();
            }
            DrawCommand::Rect {
                origin,
                size,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                ctx.fill_rect(origin.x, origin.y, size.x, size.y);
            }
        }
        Ok(())
    }
}

fn arc(ctx: &web::CanvasRenderingContext2d, center: Point, radius: f64) -> Result<(), CoreError> {
    ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU)
        .map_err(|e| CoreError::Surface(format!("arc: {:?}", e)))
}

impl Surface for Canvas2dSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        // changing the backing size resets the context state
        self.apply_transform();
    }

    fn present(&mut self, list: &DrawList) -> Result<(), CoreError> {
        for cmd in list.commands() {
            self.draw(cmd)?;
        }
        Ok(())
    }
}
