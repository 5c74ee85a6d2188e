/// Analysis-driven fill color selection shared by nodes and edges.

use crate::analysis::analysis_context::{AnalysisContext, AnalysisType};
use crate::core::types::{Color, NodeId, VisualEdge, VisualNode};
use crate::profile::color_profile::{ColorProfile, Role, RoleProfile};
use crate::profile::regulation::RegulationSheet;

/// The analysis data a colored entity exposes.
pub trait EntityView {
    /// Expression series, one value per time step.
    fn expression(&self) -> Option<&[f64]>;
    fn p_value(&self) -> Option<f64>;
    /// Id used for the coverage lookup.
    fn coverage_key(&self) -> NodeId;
}

impl EntityView for VisualNode {
    fn expression(&self) -> Option<&[f64]> {
        self.expression.as_deref()
    }

    fn p_value(&self) -> Option<f64> {
        self.p_value
    }

    fn coverage_key(&self) -> NodeId {
        self.id
    }
}

/// An edge seen through its target node: expression and coverage come from
/// the target, the p-value from the edge itself.
pub struct EdgeView<'a> {
    pub edge: &'a VisualEdge,
    pub target: &'a VisualNode,
}

impl EntityView for EdgeView<'_> {
    fn expression(&self) -> Option<&[f64]> {
        self.target.expression.as_deref()
    }

    fn p_value(&self) -> Option<f64> {
        self.edge.p_value
    }

    fn coverage_key(&self) -> NodeId {
        self.target.id
    }
}

pub struct ColorSelector<'a> {
    profile: &'a ColorProfile,
    context: &'a AnalysisContext,
}

impl<'a> ColorSelector<'a> {
    pub fn new(profile: &'a ColorProfile, context: &'a AnalysisContext) -> Self {
        Self { profile, context }
    }

    pub fn profile(&self) -> &'a ColorProfile {
        self.profile
    }

    pub fn context(&self) -> &'a AnalysisContext {
        self.context
    }

    /// Fill color of `entity` at time step `t`.
    pub fn color<E: EntityView + ?Sized>(&self, role: Role, entity: &E, t: usize) -> Color {
        let colors = self.profile.role(role);
        let context = self.context;

        if !context.has_result() {
            return colors.initial;
        }

        if context.coverage_mode() {
            if let Some(ratio) = context.coverage(entity.coverage_key()) {
                return colors.enrichment.at(ratio);
            }
        }

        let color = match context.analysis_type() {
            AnalysisType::None => Some(colors.initial),
            AnalysisType::Expression | AnalysisType::GsaStatistics | AnalysisType::Gsva => entity
                .expression()
                .map(|series| self.expression_color(colors, series, entity.p_value(), t)),
            AnalysisType::GsaRegulation => entity
                .expression()
                .map(|series| self.regulation_color(colors, series, entity.p_value(), t)),
            AnalysisType::Overrepresentation | AnalysisType::SpeciesComparison => entity
                .p_value()
                .filter(|&p| context.is_significant(p))
                .map(|p| colors.enrichment.at(p / context.p_value_threshold())),
        };

        let color = color.unwrap_or(colors.fadeout);
        log::trace!(
            "{:?} {} at t={} -> {:?}",
            role,
            entity.coverage_key(),
            t,
            color
        );
        color
    }

    fn significant(&self, p_value: Option<f64>) -> bool {
        p_value.is_some_and(|p| self.context.is_significant(p))
    }

    fn expression_color(
        &self,
        colors: &RoleProfile,
        series: &[f64],
        p_value: Option<f64>,
        t: usize,
    ) -> Color {
        if !self.significant(p_value) {
            return colors.hit;
        }
        let Some(&raw) = series.get(t) else {
            log::warn!("time step {} outside expression series of {}", t, series.len());
            return colors.hit;
        };

        let summary = self.context.expression_summary();
        let spread = summary.max - summary.min;
        if spread == 0.0 || !spread.is_finite() {
            log::warn!("expression range has no spread ({}..{})", summary.min, summary.max);
            return colors.hit;
        }

        // Inverted: low expression maps to the high end of the gradient.
        let val = 1.0 - (raw - summary.min) / spread;
        colors.expression.at(val)
    }

    fn regulation_color(
        &self,
        colors: &RoleProfile,
        series: &[f64],
        p_value: Option<f64>,
        t: usize,
    ) -> Color {
        if !self.significant(p_value) {
            return colors.hit;
        }
        let Some(&raw) = series.get(t) else {
            log::warn!("time step {} outside regulation series of {}", t, series.len());
            return colors.hit;
        };
        if !raw.is_finite() {
            log::warn!("regulation value {} at time step {} is not a code", raw, t);
            return colors.hit;
        }

        let sheet = RegulationSheet::new(&colors.expression);
        let code = raw.floor() as i64;
        sheet.color(code).unwrap_or_else(|| {
            log::warn!("no regulation color for code {}", code);
            colors.hit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec2;
    use std::collections::HashMap;

    fn profile() -> ColorProfile {
        ColorProfile::default()
    }

    fn node(id: NodeId, series: Option<Vec<f64>>, p_value: Option<f64>) -> VisualNode {
        let mut n = VisualNode::new(id, "pathway", Vec2::new(0.0, 0.0), 0.5);
        n.expression = series;
        n.p_value = p_value;
        n
    }

    fn expression_ctx(kind: AnalysisType) -> AnalysisContext {
        AnalysisContext::new(kind).with_expression_range(0.0, 10.0)
    }

    #[test]
    fn test_no_result_gives_initial() {
        let profile = profile();
        let ctx = AnalysisContext::none().with_coverage_mode(true);
        let selector = ColorSelector::new(&profile, &ctx);
        let mut n = node(1, Some(vec![1.0]), Some(0.001));
        n.selected = true;
        n.flagged = true;
        assert_eq!(selector.color(Role::Node, &n, 0), profile.node.initial);

        let target = node(2, None, None);
        let edge = VisualEdge::new(1, 2);
        let view = EdgeView { edge: &edge, target: &target };
        assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.initial);
    }

    #[test]
    fn test_coverage_wins_when_present() {
        let profile = profile();
        let mut coverage = HashMap::new();
        coverage.insert(1, 0.3);
        let ctx = expression_ctx(AnalysisType::Expression)
            .with_coverage_mode(true)
            .with_coverage(coverage);
        let selector = ColorSelector::new(&profile, &ctx);
        let n = node(1, Some(vec![5.0]), Some(0.01));
        assert_eq!(selector.color(Role::Node, &n, 0), profile.node.enrichment.at(0.3));
    }

    #[test]
    fn test_missing_coverage_falls_through_to_variant() {
        let profile = profile();
        let ctx = expression_ctx(AnalysisType::Expression).with_coverage_mode(true);
        let selector = ColorSelector::new(&profile, &ctx);
        let n = node(1, Some(vec![5.0]), Some(0.01));
        assert_eq!(selector.color(Role::Node, &n, 0), profile.node.expression.at(0.5));
    }

    #[test]
    fn test_edge_coverage_uses_target() {
        let profile = profile();
        let mut ctx = AnalysisContext::new(AnalysisType::Overrepresentation).with_coverage_mode(true);
        ctx.set_coverage(2, 0.8);
        let selector = ColorSelector::new(&profile, &ctx);
        let target = node(2, None, None);
        let edge = VisualEdge::new(1, 2);
        let view = EdgeView { edge: &edge, target: &target };
        assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.enrichment.at(0.8));
    }

    #[test]
    fn test_expression_boundary_p_value_is_significant() {
        let profile = profile();
        for kind in [AnalysisType::Expression, AnalysisType::GsaStatistics, AnalysisType::Gsva] {
            let ctx = expression_ctx(kind);
            let selector = ColorSelector::new(&profile, &ctx);
            let n = node(1, Some(vec![5.0]), Some(0.05));
            assert_eq!(selector.color(Role::Node, &n, 0), profile.node.expression.at(0.5));
        }
    }

    #[test]
    fn test_expression_above_threshold_is_hit() {
        let profile = profile();
        let ctx = expression_ctx(AnalysisType::Expression);
        let selector = ColorSelector::new(&profile, &ctx);
        let n = node(1, Some(vec![5.0]), Some(0.051));
        assert_eq!(selector.color(Role::Node, &n, 0), profile.node.hit);
        let missing_p = node(1, Some(vec![5.0]), None);
        assert_eq!(selector.color(Role::Node, &missing_p, 0), profile.node.hit);
    }

    #[test]
    fn test_expression_follows_time_step() {
        let profile = profile();
        let ctx = expression_ctx(AnalysisType::Gsva);
        let selector = ColorSelector::new(&profile, &ctx);
        let n = node(1, Some(vec![0.0, 2.5, 10.0]), Some(0.01));
        assert_eq!(selector.color(Role::Node, &n, 0), profile.node.expression.at(1.0));
        assert_eq!(selector.color(Role::Node, &n, 1), profile.node.expression.at(0.75));
        assert_eq!(selector.color(Role::Node, &n, 2), profile.node.expression.at(0.0));
        assert_eq!(selector.color(Role::Node, &n, 3), profile.node.hit);
    }

    #[test]
    fn test_expression_without_series_fades() {
        let profile = profile();
        let ctx = expression_ctx(AnalysisType::Expression);
        let selector = ColorSelector::new(&profile, &ctx);
        let n = node(1, None, Some(0.001));
        assert_eq!(selector.color(Role::Node, &n, 0), profile.node.fadeout);
    }

    #[test]
    fn test_flat_expression_range_is_hit() {
        let profile = profile();
        let ctx = AnalysisContext::new(AnalysisType::Expression).with_expression_range(4.0, 4.0);
        let selector = ColorSelector::new(&profile, &ctx);
        let n = node(1, Some(vec![4.0]), Some(0.01));
        assert_eq!(selector.color(Role::Node, &n, 0), profile.node.hit);
    }

    #[test]
    fn test_edge_expression_uses_target_series_and_edge_p_value() {
        let profile = profile();
        let ctx = expression_ctx(AnalysisType::Expression);
        let selector = ColorSelector::new(&profile, &ctx);
        let target = node(2, Some(vec![2.0]), Some(0.9));
        let mut edge = VisualEdge::new(1, 2);
        edge.p_value = Some(0.01);
        let view = EdgeView { edge: &edge, target: &target };
        assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.expression.at(0.8));

        edge.p_value = Some(0.2);
        let view = EdgeView { edge: &edge, target: &target };
        assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.hit);
    }

    #[test]
    fn test_regulation_sheet_lookup() {
        let profile = profile();
        let ctx = AnalysisContext::new(AnalysisType::GsaRegulation);
        let selector = ColorSelector::new(&profile, &ctx);
        let sheet = RegulationSheet::new(&profile.node.expression);
        let n = node(1, Some(vec![2.0, -1.5, 0.7]), Some(0.01));
        assert_eq!(selector.color(Role::Node, &n, 0), sheet.color(2).unwrap());
        assert_eq!(selector.color(Role::Node, &n, 1), sheet.color(-2).unwrap());
        assert_eq!(selector.color(Role::Node, &n, 2), sheet.color(0).unwrap());
    }

    #[test]
    fn test_regulation_not_significant_or_unknown_code() {
        let profile = profile();
        let ctx = AnalysisContext::new(AnalysisType::GsaRegulation);
        let selector = ColorSelector::new(&profile, &ctx);
        let weak = node(1, Some(vec![2.0]), Some(0.5));
        assert_eq!(selector.color(Role::Node, &weak, 0), profile.node.hit);
        let odd = node(1, Some(vec![9.0]), Some(0.01));
        assert_eq!(selector.color(Role::Node, &odd, 0), profile.node.hit);
        let none = node(1, None, Some(0.01));
        assert_eq!(selector.color(Role::Node, &none, 0), profile.node.fadeout);
    }

    #[test]
    fn test_enrichment_scales_by_threshold() {
        let profile = profile();
        for kind in [AnalysisType::Overrepresentation, AnalysisType::SpeciesComparison] {
            let ctx = AnalysisContext::new(kind);
            let selector = ColorSelector::new(&profile, &ctx);
            let n = node(1, None, Some(0.025));
            assert_eq!(selector.color(Role::Node, &n, 0), profile.node.enrichment.at(0.5));
            let weak = node(1, None, Some(0.06));
            assert_eq!(selector.color(Role::Node, &weak, 0), profile.node.fadeout);
            let absent = node(1, None, None);
            assert_eq!(selector.color(Role::Node, &absent, 0), profile.node.fadeout);
        }
    }

    #[test]
    fn test_regulation_non_finite_value_is_hit() {
        let profile = profile();
        let ctx = AnalysisContext::new(AnalysisType::GsaRegulation);
        let selector = ColorSelector::new(&profile, &ctx);
        for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let n = node(1, Some(vec![raw]), Some(0.01));
            assert_eq!(selector.color(Role::Node, &n, 0), profile.node.hit);
        }
    }

    #[test]
    fn test_edge_regulation_uses_edge_sheet_and_target_series() {
        let profile = profile();
        let ctx = AnalysisContext::new(AnalysisType::GsaRegulation);
        let selector = ColorSelector::new(&profile, &ctx);
        let sheet = RegulationSheet::new(&profile.edge.expression);
        // target p-value is not significant; the edge's own p-value decides
        let target = node(2, Some(vec![-2.0, 1.0]), Some(0.9));
        let mut edge = VisualEdge::new(1, 2);
        edge.p_value = Some(0.01);
        let view = EdgeView { edge: &edge, target: &target };
        assert_eq!(selector.color(Role::Edge, &view, 0), sheet.color(-2).unwrap());
        assert_eq!(selector.color(Role::Edge, &view, 1), sheet.color(1).unwrap());

        edge.p_value = Some(0.2);
        let view = EdgeView { edge: &edge, target: &target };
        assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.hit);

        let bare = node(3, None, Some(0.01));
        let view = EdgeView { edge: &edge, target: &bare };
        assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.fadeout);
    }

    #[test]
    fn test_edge_enrichment_uses_edge_p_value() {
        let profile = profile();
        for kind in [AnalysisType::Overrepresentation, AnalysisType::SpeciesComparison] {
            let ctx = AnalysisContext::new(kind);
            let selector = ColorSelector::new(&profile, &ctx);
            let target = node(2, None, Some(0.001));
            let mut edge = VisualEdge::new(1, 2);

            edge.p_value = Some(0.05);
            let view = EdgeView { edge: &edge, target: &target };
            assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.enrichment.at(1.0));

            edge.p_value = Some(0.025);
            let view = EdgeView { edge: &edge, target: &target };
            assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.enrichment.at(0.5));

            edge.p_value = None;
            let view = EdgeView { edge: &edge, target: &target };
            assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.fadeout);

            edge.p_value = Some(0.051);
            let view = EdgeView { edge: &edge, target: &target };
            assert_eq!(selector.color(Role::Edge, &view, 0), profile.edge.fadeout);
        }
    }

    #[test]
    fn test_selection_is_idempotent() {
        let profile = profile();
        let ctx = expression_ctx(AnalysisType::Expression);
        let selector = ColorSelector::new(&profile, &ctx);
        let n = node(1, Some(vec![3.0]), Some(0.02));
        let first = selector.color(Role::Node, &n, 0);
        let second = selector.color(Role::Node, &n, 0);
        assert_eq!(first, second);
        assert_eq!(n.expression.as_deref(), Some(&[3.0][..]));
    }
}
