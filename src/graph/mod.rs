pub mod color_selector;
pub mod geometry;
pub mod graph_edge;
pub mod graph_node;
pub mod overview_renderer;
