//! Pathway overview raster core.
//!
//! Builds node and edge shapes for a laid-out overview diagram, colors them
//! from the current analysis result and records them into a layered canvas
//! that a [`platform::renderer::Renderer`] backend paints.

pub mod analysis;
pub mod core;
pub mod graph;
pub mod platform;
pub mod profile;

pub use crate::analysis::analysis_context::{AnalysisContext, AnalysisType, ExpressionSummary};
pub use crate::analysis::decorator::Decorator;
pub use crate::core::error::ProfileError;
pub use crate::core::types::{Color, NodeId, OverviewGraph, Point, Vec2, VisualEdge, VisualNode};
pub use crate::graph::color_selector::{ColorSelector, EdgeView, EntityView};
pub use crate::graph::geometry::{edge_shape, node_diameter, node_shape, Shape};
pub use crate::graph::overview_renderer::OverviewRenderer;
pub use crate::platform::canvas::Canvas;
pub use crate::platform::renderer::{Renderer, Stroke};
pub use crate::profile::color_profile::{ColorProfile, Role, RoleProfile};
pub use crate::profile::gradient::Gradient;
