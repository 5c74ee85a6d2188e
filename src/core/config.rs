/// Visual and behavioral constants.

use super::types::Color;

// --- Analysis ---
/// Entities with a p-value at or below this are significant.
pub const P_VALUE_THRESHOLD: f64 = 0.05;

// --- Node sizes ---
pub const MIN_NODE_SIZE: f64 = 0.025;
pub const NODE_FACTOR: f64 = 18.0;

// --- Edge shape ---
/// Control point distance as a fraction of the edge length.
pub const EDGE_CONTROL_RATIO: f64 = 0.6;
pub const EDGE_BEND_ANGLE: f64 = std::f64::consts::PI / 6.0;

// --- Strokes (base < selection < flag within each role) ---
pub const EDGE_DEFAULT_STROKE: f64 = 1.0;
pub const EDGE_SELECTION_STROKE: f64 = 2.0;
pub const EDGE_FLAG_STROKE: f64 = 3.0;
pub const NODE_DEFAULT_STROKE: f64 = 0.0;
pub const NODE_SELECTION_STROKE: f64 = 1.0;
pub const NODE_FLAG_STROKE: f64 = 2.0;

// --- Labels ---
pub const LABEL_COLOR: Color = Color::BLACK;
pub const LABEL_SELECTED_COLOR: Color = Color::BLUE;
pub const LABEL_FONT_SIZE: f64 = 12.0;

// --- Regulation codes ---
pub const REGULATION_MIN: i64 = -2;
pub const REGULATION_MAX: i64 = 2;
