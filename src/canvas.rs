use crate::field::Surface;
use crate::input::Viewport;
use crate::theme::{BlendMode, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D backend for the particle field.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn set_blend(&mut self, blend: BlendMode) {
        _ = self
            .ctx
            .set_global_composite_operation(blend.composite_operation());
    }

    fn set_blur(&mut self, px: f32) {
        if px > 0.0 {
            self.ctx.set_filter(&format!("blur({}px)", px));
        } else {
            self.ctx.set_filter("none");
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
