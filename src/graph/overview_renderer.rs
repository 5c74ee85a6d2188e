/// Render coordination: runs every edge and node through geometry and
/// color selection into a layered canvas, one canvas per time step.

use crate::analysis::analysis_context::AnalysisContext;
use crate::analysis::decorator::Decorator;
use crate::core::types::*;
use crate::graph::color_selector::ColorSelector;
use crate::graph::graph_edge::GraphEdgeRenderer;
use crate::graph::graph_node::GraphNodeRenderer;
use crate::platform::canvas::Canvas;
use crate::profile::color_profile::ColorProfile;

pub struct OverviewRenderer {
    profile: ColorProfile,
    context: AnalysisContext,
    decorator: Decorator,

    // Renderers
    node_renderer: GraphNodeRenderer,
    edge_renderer: GraphEdgeRenderer,
}

impl OverviewRenderer {
    pub fn new(profile: ColorProfile, context: AnalysisContext) -> Self {
        Self {
            profile,
            context,
            decorator: Decorator::new(),
            node_renderer: GraphNodeRenderer::new(),
            edge_renderer: GraphEdgeRenderer::new(),
        }
    }

    pub fn with_decorator(mut self, decorator: Decorator) -> Self {
        self.decorator = decorator;
        self
    }

    pub fn set_context(&mut self, context: AnalysisContext) {
        self.context = context;
    }

    pub fn set_profile(&mut self, profile: ColorProfile) {
        self.profile = profile;
    }

    /// Replace the decorator and re-apply it to `graph`.
    pub fn set_decorator(&mut self, decorator: Decorator, graph: &mut OverviewGraph) {
        self.decorator = decorator;
        self.decorate(graph);
    }

    /// Push the decorator's selection and flags into `graph`.
    pub fn decorate(&self, graph: &mut OverviewGraph) {
        self.decorator.apply(graph);
    }

    pub fn profile(&self) -> &ColorProfile {
        &self.profile
    }

    pub fn context(&self) -> &AnalysisContext {
        &self.context
    }

    /// Render `graph` at time step `t` into a fresh canvas.
    pub fn render(&self, graph: &OverviewGraph, t: usize) -> Canvas {
        let mut canvas = Canvas::new();
        self.render_into(&mut canvas, graph, t);
        canvas
    }

    /// Render edges first so nodes sit on top of them.
    pub fn render_into(&self, canvas: &mut Canvas, graph: &OverviewGraph, t: usize) {
        let selector = ColorSelector::new(&self.profile, &self.context);
        let mut skipped = 0usize;

        for edge in &graph.edges {
            let source = match graph.find_node(edge.from) {
                Some(n) => n,
                None => {
                    log::warn!("edge {} -> {}: missing source node", edge.from, edge.to);
                    skipped += 1;
                    continue;
                }
            };
            let target = match graph.find_node(edge.to) {
                Some(n) => n,
                None => {
                    log::warn!("edge {} -> {}: missing target node", edge.from, edge.to);
                    skipped += 1;
                    continue;
                }
            };

            self.edge_renderer
                .render(canvas, &selector, edge, source, target, t);
        }

        for node in &graph.nodes {
            self.node_renderer
                .render(canvas, &selector, node, self.decorator.selected(), t);
        }

        log::debug!(
            "rendered t={} ({}): {} nodes, {} edges, {} skipped",
            t,
            self.context.analysis_type(),
            graph.nodes.len(),
            graph.edges.len() - skipped,
            skipped
        );
    }

    /// One canvas per analysis time step.
    pub fn render_all_frames(&self, graph: &OverviewGraph) -> Vec<Canvas> {
        (0..graph.time_steps()).map(|t| self.render(graph, t)).collect()
    }
}
