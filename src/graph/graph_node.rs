/// Node rendering: circle geometry, analysis color, outlines and labels.

use crate::core::config;
use crate::core::types::*;
use crate::graph::color_selector::ColorSelector;
use crate::graph::geometry::node_shape;
use crate::platform::canvas::Canvas;
use crate::platform::renderer::Stroke;
use crate::profile::color_profile::Role;
use std::collections::HashSet;

const DEFAULT_STROKE: Stroke = Stroke::new(config::NODE_DEFAULT_STROKE);
const SELECTION_STROKE: Stroke = Stroke::new(config::NODE_SELECTION_STROKE);
const FLAG_STROKE: Stroke = Stroke::new(config::NODE_FLAG_STROKE);

pub struct GraphNodeRenderer;

impl GraphNodeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `node` at time step `t`. `explicitly_selected` holds the ids
    /// the caller selected directly, as opposed to propagated selection.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        selector: &ColorSelector<'_>,
        node: &VisualNode,
        explicitly_selected: &HashSet<NodeId>,
        t: usize,
    ) {
        let shape = node_shape(node.position, node.ratio);
        let colors = selector.profile().role(Role::Node);

        let fill = selector.color(Role::Node, node, t);
        canvas.nodes.add(shape, fill, DEFAULT_STROKE);

        if node.selected {
            canvas.node_selection.add(shape, colors.selection, SELECTION_STROKE);
        }
        if node.flagged {
            canvas.node_flags.add(shape, colors.flag, FLAG_STROKE);
        }

        self.text(canvas, node, explicitly_selected);
    }

    fn text(&self, canvas: &mut Canvas, node: &VisualNode, explicitly_selected: &HashSet<NodeId>) {
        if node.top_level {
            let color = if node.selected {
                config::LABEL_SELECTED_COLOR
            } else {
                config::LABEL_COLOR
            };
            canvas.text.add(&node.name, node.position, color);
        }
        if node.selected && explicitly_selected.contains(&node.id) {
            canvas
                .text
                .add(&node.name, node.position, config::LABEL_SELECTED_COLOR);
        }
    }
}

impl Default for GraphNodeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
