/// Common type definitions used across the raster core.

use super::error::ProfileError;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Stable identity of a diagram entity (pathway database id).
pub type NodeId = u64;

/// 2D coordinate vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Layout positions are plain vectors.
pub type Point = Vec2;

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle of the vector from the positive x axis, in radians.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Point at `distance` from `self` in direction `angle`.
    pub fn polar_offset(&self, angle: f64, distance: f64) -> Self {
        Self {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: alpha,
        }
    }

    /// Channel-wise linear interpolation, `t = 0` gives `self`.
    pub fn lerp(self, other: Color, t: f64) -> Self {
        Self {
            r: lerp_f64(self.r, other.r, t),
            g: lerp_f64(self.g, other.g, t),
            b: lerp_f64(self.b, other.b, t),
            a: lerp_f64(self.a, other.a, t),
        }
    }

    /// Parse a color literal: `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`
    /// or `rgba(r, g, b, a)` with 0..255 channels and a 0..1 alpha.
    pub fn parse(literal: &str) -> Result<Self, ProfileError> {
        let literal = literal.trim();
        if let Some(caps) = hex_re().captures(literal) {
            let digits = &caps[1];
            let invalid = || ProfileError::InvalidColor(literal.to_string());
            return match digits.len() {
                3 => {
                    let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                    let hex = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
                    Ok(Self::from_hex(hex, 1.0))
                }
                6 => {
                    let hex = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                    Ok(Self::from_hex(hex, 1.0))
                }
                8 => {
                    let hex = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                    Ok(Self::from_hex(hex >> 8, (hex & 0xFF) as f64 / 255.0))
                }
                _ => Err(invalid()),
            };
        }

        if let Some(caps) = rgba_re().captures(literal) {
            let channel = |i: usize| -> Result<f64, ProfileError> {
                let value: f64 = caps[i]
                    .parse()
                    .map_err(|_| ProfileError::InvalidColor(literal.to_string()))?;
                if !(0.0..=255.0).contains(&value) {
                    return Err(ProfileError::InvalidColor(literal.to_string()));
                }
                Ok(value / 255.0)
            };
            let alpha = match caps.get(4) {
                Some(a) => a
                    .as_str()
                    .parse::<f64>()
                    .map_err(|_| ProfileError::InvalidColor(literal.to_string()))?
                    .clamp(0.0, 1.0),
                None => 1.0,
            };
            return Ok(Self {
                r: channel(1)?,
                g: channel(2)?,
                b: channel(3)?,
                a: alpha,
            });
        }

        Err(ProfileError::InvalidColor(literal.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap())
}

fn rgba_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^rgba?\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*(?:,\s*(\d*(?:\.\d+)?)\s*)?\)$",
        )
        .unwrap()
    })
}

/// A pathway node of the overview diagram.
#[derive(Debug, Clone)]
pub struct VisualNode {
    pub id: NodeId,
    pub name: String,
    pub position: Point,
    /// Relative size in `[0, 1]`.
    pub ratio: f64,
    pub top_level: bool,
    pub selected: bool,
    pub flagged: bool,
    /// One value per analysis time step.
    pub expression: Option<Vec<f64>>,
    pub p_value: Option<f64>,
}

impl VisualNode {
    pub fn new(id: NodeId, name: &str, position: Point, ratio: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            position,
            ratio,
            top_level: false,
            selected: false,
            flagged: false,
            expression: None,
            p_value: None,
        }
    }
}

/// A directed link between two nodes, referenced by id.
#[derive(Debug, Clone)]
pub struct VisualEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub selected: bool,
    pub flagged: bool,
    /// p-value of the target pathway.
    pub p_value: Option<f64>,
}

impl VisualEdge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            selected: false,
            flagged: false,
            p_value: None,
        }
    }
}

/// The complete overview diagram
#[derive(Debug, Clone, Default)]
pub struct OverviewGraph {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

impl OverviewGraph {
    pub fn find_node(&self, id: NodeId) -> Option<&VisualNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_node_mut(&mut self, id: NodeId) -> Option<&mut VisualNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Number of analysis time steps, at least one.
    pub fn time_steps(&self) -> usize {
        self.nodes
            .iter()
            .filter_map(|n| n.expression.as_ref().map(Vec::len))
            .max()
            .unwrap_or(0)
            .max(1)
    }
}

/// Linear interpolation between two values.
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
