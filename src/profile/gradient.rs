/// Continuous color gradients used for enrichment and expression overlays.

use crate::core::types::Color;
use serde::Deserialize;

/// Two- or three-stop gradient over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gradient {
    pub min: Color,
    #[serde(default)]
    pub stop: Option<Color>,
    pub max: Color,
}

impl Gradient {
    pub fn new(min: Color, max: Color) -> Self {
        Self {
            min,
            stop: None,
            max,
        }
    }

    pub fn with_stop(min: Color, stop: Color, max: Color) -> Self {
        Self {
            min,
            stop: Some(stop),
            max,
        }
    }

    /// Color at `value`. Values outside `[0, 1]` are clamped.
    pub fn at(&self, value: f64) -> Color {
        let t = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        match self.stop {
            Some(stop) if t <= 0.5 => self.min.lerp(stop, t * 2.0),
            Some(stop) => stop.lerp(self.max, (t - 0.5) * 2.0),
            None => self.min.lerp(self.max, t),
        }
    }
}
