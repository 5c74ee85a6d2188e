/// Abstract rendering interface.

use crate::core::types::{Color, Point};
use crate::graph::geometry::Shape;

/// How the ends of an open stroked path are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub cap: LineCap,
}

impl Stroke {
    pub const fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
        }
    }

    pub const fn round(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
        }
    }
}

pub trait Renderer {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    fn fill_shape(&self, shape: &Shape, color: Color);
    fn stroke_shape(&self, shape: &Shape, color: Color, stroke: Stroke);
    fn draw_text(&self, position: Point, text: &str, size: f64, color: Color);
}
