use crate::core::{Rgb, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Acquire the canvas' 2D context, if the browser provides one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok(),
        Ok(None) => None,
        Err(e) => {
            log::warn!("[render] 2d context error: {:?}", e);
            None
        }
    }
}

/// [`Surface`] over a 2D canvas context working in CSS pixels.
pub struct CanvasSurface<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    /// Wrap `ctx`, mapping CSS pixels onto a backing store `pixel_ratio` times larger.
    pub fn new(ctx: &'a web::CanvasRenderingContext2d, pixel_ratio: f64) -> Self {
        let _ = ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0);
        Self { ctx }
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.hex());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32) {
        self.ctx.set_stroke_style_str(&color.rgba(alpha));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
