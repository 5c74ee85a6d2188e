/// Discrete regulation color sheet derived from an expression gradient.

use super::gradient::Gradient;
use crate::core::config;
use crate::core::types::Color;
use std::collections::BTreeMap;

/// Maps regulation codes (`-2` significantly down .. `2` significantly up)
/// to colors. Up-regulation lands on the low end of the gradient, matching
/// the inverted normalization of continuous expression values.
#[derive(Debug, Clone)]
pub struct RegulationSheet {
    colors: BTreeMap<i64, Color>,
}

impl RegulationSheet {
    pub fn new(gradient: &Gradient) -> Self {
        let span = (config::REGULATION_MAX - config::REGULATION_MIN) as f64;
        let colors = (config::REGULATION_MIN..=config::REGULATION_MAX)
            .map(|code| {
                let val = (config::REGULATION_MAX - code) as f64 / span;
                (code, gradient.at(val))
            })
            .collect();
        Self { colors }
    }

    pub fn color(&self, code: i64) -> Option<Color> {
        self.colors.get(&code).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
