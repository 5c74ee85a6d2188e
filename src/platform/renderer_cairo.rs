/// Cairo-based renderer implementation.

use crate::core::types::{Color, Point};
use crate::graph::geometry::Shape;
use crate::platform::renderer::{LineCap, Renderer, Stroke};
use cairo::Context;
use std::f64::consts::PI;

pub struct RendererCairo {
    cr: Context,
}

impl RendererCairo {
    pub fn new(cr: Context) -> Self {
        Self { cr }
    }

    /// Replace the Cairo context (e.g., when switching target surfaces).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn shape_path(&self, shape: &Shape) {
        self.cr.new_path();
        match *shape {
            Shape::Quad {
                start,
                control,
                end,
            } => {
                // Cairo only draws cubics; elevate the quadratic.
                let c1 = start + (control - start) * (2.0 / 3.0);
                let c2 = end + (control - end) * (2.0 / 3.0);
                self.cr.move_to(start.x, start.y);
                self.cr.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
            }
            Shape::Circle { top_left, diameter } => {
                let r = diameter * 0.5;
                self.cr.arc(top_left.x + r, top_left.y + r, r, 0.0, 2.0 * PI);
                self.cr.close_path();
            }
        }
    }
}

impl Renderer for RendererCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
    }

    fn end_frame(&mut self) {
        self.cr.restore().ok();
    }

    fn fill_shape(&self, shape: &Shape, color: Color) {
        self.set_color(color);
        self.shape_path(shape);
        if let Err(e) = self.cr.fill() {
            log::warn!("cairo fill failed: {}", e);
        }
    }

    fn stroke_shape(&self, shape: &Shape, color: Color, stroke: Stroke) {
        if stroke.width <= 0.0 {
            return;
        }
        self.set_color(color);
        self.cr.set_line_width(stroke.width);
        self.cr.set_line_cap(match stroke.cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
        });
        self.cr.set_line_join(cairo::LineJoin::Miter);
        self.shape_path(shape);
        if let Err(e) = self.cr.stroke() {
            log::warn!("cairo stroke failed: {}", e);
        }
    }

    fn draw_text(&self, position: Point, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.cr
            .select_font_face("sans-serif", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(size);
        // Center the label on the node.
        let (dx, dy) = match self.cr.text_extents(text) {
            Ok(ext) => (ext.width() / 2.0 + ext.x_bearing(), ext.height() / 2.0 + ext.y_bearing()),
            Err(_) => (0.0, 0.0),
        };
        self.cr.move_to(position.x - dx, position.y - dy);
        self.cr.show_text(text).ok();
    }
}
