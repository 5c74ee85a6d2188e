/// Analysis state consulted when coloring the overview.

use crate::core::config;
use crate::core::error::ProfileError;
use crate::core::types::NodeId;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Kind of analysis result overlaid on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisType {
    /// No result loaded yet.
    #[default]
    None,
    Expression,
    GsaStatistics,
    Gsva,
    GsaRegulation,
    Overrepresentation,
    SpeciesComparison,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 7] = [
        AnalysisType::None,
        AnalysisType::Expression,
        AnalysisType::GsaStatistics,
        AnalysisType::Gsva,
        AnalysisType::GsaRegulation,
        AnalysisType::Overrepresentation,
        AnalysisType::SpeciesComparison,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::None => "NONE",
            AnalysisType::Expression => "EXPRESSION",
            AnalysisType::GsaStatistics => "GSA_STATISTICS",
            AnalysisType::Gsva => "GSVA",
            AnalysisType::GsaRegulation => "GSA_REGULATION",
            AnalysisType::Overrepresentation => "OVERREPRESENTATION",
            AnalysisType::SpeciesComparison => "SPECIES_COMPARISON",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ProfileError::UnknownAnalysisType(s.to_string()))
    }
}

/// Global range of expression values in the filtered result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpressionSummary {
    pub min: f64,
    pub max: f64,
}

/// Analysis kind, normalization range, coverage values and threshold.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    analysis_type: AnalysisType,
    expression: ExpressionSummary,
    coverage_mode: bool,
    coverage: HashMap<NodeId, f64>,
    p_value_threshold: f64,
}

impl AnalysisContext {
    /// Context with no analysis result.
    pub fn none() -> Self {
        Self::new(AnalysisType::None)
    }

    pub fn new(analysis_type: AnalysisType) -> Self {
        Self {
            analysis_type,
            expression: ExpressionSummary { min: 0.0, max: 0.0 },
            coverage_mode: false,
            coverage: HashMap::new(),
            p_value_threshold: config::P_VALUE_THRESHOLD,
        }
    }

    pub fn with_expression_range(mut self, min: f64, max: f64) -> Self {
        self.expression = ExpressionSummary { min, max };
        self
    }

    pub fn with_coverage_mode(mut self, enabled: bool) -> Self {
        self.coverage_mode = enabled;
        self
    }

    pub fn with_coverage(mut self, coverage: HashMap<NodeId, f64>) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn set_coverage(&mut self, id: NodeId, ratio: f64) {
        self.coverage.insert(id, ratio);
    }

    pub fn analysis_type(&self) -> AnalysisType {
        self.analysis_type
    }

    pub fn has_result(&self) -> bool {
        self.analysis_type != AnalysisType::None
    }

    pub fn coverage_mode(&self) -> bool {
        self.coverage_mode
    }

    pub fn coverage(&self, id: NodeId) -> Option<f64> {
        self.coverage.get(&id).copied()
    }

    pub fn expression_summary(&self) -> ExpressionSummary {
        self.expression
    }

    pub fn p_value_threshold(&self) -> f64 {
        self.p_value_threshold
    }

    pub fn is_significant(&self, p_value: f64) -> bool {
        p_value <= self.p_value_threshold
    }
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis_type() {
        assert_eq!("GSA_REGULATION".parse::<AnalysisType>().unwrap(), AnalysisType::GsaRegulation);
        assert_eq!("species-comparison".parse::<AnalysisType>().unwrap(), AnalysisType::SpeciesComparison);
        assert!("TOPOLOGY".parse::<AnalysisType>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for t in AnalysisType::ALL {
            assert_eq!(t.to_string().parse::<AnalysisType>().unwrap(), t);
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let ctx = AnalysisContext::new(AnalysisType::Expression);
        assert!(ctx.is_significant(0.05));
        assert!(!ctx.is_significant(0.051));
    }

    #[test]
    fn test_none_has_no_result() {
        assert!(!AnalysisContext::none().has_result());
        assert!(AnalysisContext::new(AnalysisType::Gsva).has_result());
    }

    #[test]
    fn test_coverage_lookup() {
        let mut ctx = AnalysisContext::new(AnalysisType::Overrepresentation).with_coverage_mode(true);
        ctx.set_coverage(7, 0.25);
        assert_eq!(ctx.coverage(7), Some(0.25));
        assert_eq!(ctx.coverage(8), None);
    }
}
