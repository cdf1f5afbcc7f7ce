use crate::input::Viewport;
use crate::theme::{BlendMode, Rgba};
use glam::Vec2;

/// The drawing operations the particle field needs from a 2D canvas.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn set_blend(&mut self, blend: BlendMode);
    /// Gaussian blur radius applied to subsequent fills; 0 disables it.
    fn set_blur(&mut self, px: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Viewport),
    Blend(BlendMode),
    Blur(f32),
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// A `Surface` that keeps every call, for headless use and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Line {
                from, to, color, ..
            } => Some((from, to, color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ops.push(DrawOp::Clear(viewport));
    }

    fn set_blend(&mut self, blend: BlendMode) {
        self.ops.push(DrawOp::Blend(blend));
    }

    fn set_blur(&mut self, px: f32) {
        self.ops.push(DrawOp::Blur(px));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }
}
