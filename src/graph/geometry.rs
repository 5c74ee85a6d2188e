/// Vector shapes for overview nodes and edges.

use crate::core::config;
use crate::core::types::{Point, Vec2};

/// A drawable path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Quadratic curve from `start` to `end` bent through `control`.
    Quad {
        start: Point,
        control: Point,
        end: Point,
    },
    /// Axis-aligned circle given by its bounding box.
    Circle {
        top_left: Point,
        diameter: f64,
    },
}

/// Curved edge from `from` to `to`: the control point sits at 0.6 of the
/// edge length from `from`, rotated 30 degrees counter to the edge direction.
pub fn edge_shape(from: Point, to: Point) -> Shape {
    let delta = to - from;
    let angle = delta.angle() - config::EDGE_BEND_ANGLE;
    let r = delta.length() * config::EDGE_CONTROL_RATIO;
    Shape::Quad {
        start: from,
        control: from.polar_offset(angle, r),
        end: to,
    }
}

/// Drawn node diameter; never zero, even for `ratio == 0`.
pub fn node_diameter(ratio: f64) -> f64 {
    (ratio + config::MIN_NODE_SIZE) * config::NODE_FACTOR
}

pub fn node_shape(center: Point, ratio: f64) -> Shape {
    let diameter = node_diameter(ratio);
    Shape::Circle {
        top_left: Vec2::new(center.x - diameter * 0.5, center.y - diameter * 0.5),
        diameter,
    }
}
