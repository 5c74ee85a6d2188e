/// Edge rendering: curved path toward the target plus analysis color.

use crate::core::config;
use crate::core::types::*;
use crate::graph::color_selector::{ColorSelector, EdgeView};
use crate::graph::geometry::edge_shape;
use crate::platform::canvas::Canvas;
use crate::platform::renderer::Stroke;
use crate::profile::color_profile::Role;

const DEFAULT_STROKE: Stroke = Stroke::round(config::EDGE_DEFAULT_STROKE);
const SELECTION_STROKE: Stroke = Stroke::round(config::EDGE_SELECTION_STROKE);
const FLAG_STROKE: Stroke = Stroke::round(config::EDGE_FLAG_STROKE);

pub struct GraphEdgeRenderer;

impl GraphEdgeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render an edge between two nodes at time step `t`.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        selector: &ColorSelector<'_>,
        edge: &VisualEdge,
        source: &VisualNode,
        target: &VisualNode,
        t: usize,
    ) {
        let shape = edge_shape(source.position, target.position);
        let colors = selector.profile().role(Role::Edge);

        let view = EdgeView { edge, target };
        let color = selector.color(Role::Edge, &view, t);
        canvas.edges.add(shape, color, DEFAULT_STROKE);

        if edge.selected {
            canvas.edge_selection.add(shape, colors.selection, SELECTION_STROKE);
        }
        if edge.flagged {
            canvas.edge_flags.add(shape, colors.flag, FLAG_STROKE);
        }
    }
}

impl Default for GraphEdgeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
