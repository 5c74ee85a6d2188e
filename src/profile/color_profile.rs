/// Color profiles: per-role solid colors and overlay gradients.

use super::gradient::Gradient;
use crate::core::error::ProfileError;
use crate::core::types::Color;
use serde::Deserialize;

/// Which kind of diagram element a color is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Node,
    Edge,
}

/// Colors for one role.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleProfile {
    pub initial: Color,
    pub fadeout: Color,
    pub hit: Color,
    pub selection: Color,
    pub flag: Color,
    pub enrichment: Gradient,
    pub expression: Gradient,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorProfile {
    pub name: String,
    pub node: RoleProfile,
    pub edge: RoleProfile,
}

impl ColorProfile {
    /// Parse a profile from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: ColorProfile = serde_json::from_str(json)?;
        log::debug!("loaded color profile {:?}", profile.name);
        Ok(profile)
    }

    /// Look up a built-in profile. Case, spaces and underscores are ignored.
    pub fn builtin(name: &str) -> Result<Self, ProfileError> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let json = match key.as_str() {
            "copper" => COPPER,
            "copperplus" => COPPER_PLUS,
            "bariumlithium" => BARIUM_LITHIUM,
            "calciumsalts" => CALCIUM_SALTS,
            _ => return Err(ProfileError::UnknownProfile(name.to_string())),
        };
        Self::from_json(json)
    }

    pub fn builtin_names() -> &'static [&'static str] {
        &["Copper", "Copper Plus", "Barium Lithium", "Calcium Salts"]
    }

    pub fn role(&self, role: Role) -> &RoleProfile {
        match role {
            Role::Node => &self.node,
            Role::Edge => &self.edge,
        }
    }
}

impl Default for ColorProfile {
    fn default() -> Self {
        Self::from_json(COPPER).expect("built-in Copper profile JSON is well-formed")
    }
}

const COPPER: &str = r##"{
  "name": "Copper",
  "node": {
    "initial": "#E3B27E",
    "fadeout": "#EEE1D0",
    "hit": "#C27D3B",
    "selection": "#1E90FF",
    "flag": "#FF00FF",
    "enrichment": { "min": "#FFFF00", "max": "#DDDDDD" },
    "expression": { "min": "#FFFF00", "stop": "#FF8000", "max": "#0000FF" }
  },
  "edge": {
    "initial": "#D2A06E",
    "fadeout": "#F0E6D8",
    "hit": "#B4783C",
    "selection": "#1E90FF",
    "flag": "#FF00FF",
    "enrichment": { "min": "#F0F000", "max": "#E6E6E6" },
    "expression": { "min": "#FFFF00", "stop": "#FF8000", "max": "#0000FF" }
  }
}"##;

const COPPER_PLUS: &str = r##"{
  "name": "Copper Plus",
  "node": {
    "initial": "#E3B27E",
    "fadeout": "#F3E8DA",
    "hit": "#A9652A",
    "selection": "#0064FF",
    "flag": "#D000D0",
    "enrichment": { "min": "#E6E600", "max": "#C8C8C8" },
    "expression": { "min": "#FFFF00", "stop": "#E05000", "max": "#0000C8" }
  },
  "edge": {
    "initial": "#CC9966",
    "fadeout": "#F5EDE2",
    "hit": "#A0642D",
    "selection": "#0064FF",
    "flag": "#D000D0",
    "enrichment": { "min": "#E6E600", "max": "#D2D2D2" },
    "expression": { "min": "#FFFF00", "stop": "#E05000", "max": "#0000C8" }
  }
}"##;

const BARIUM_LITHIUM: &str = r##"{
  "name": "Barium Lithium",
  "node": {
    "initial": "#58C3E5",
    "fadeout": "#E3F4FA",
    "hit": "#20799A",
    "selection": "#FF6400",
    "flag": "#FF00FF",
    "enrichment": { "min": "#D91A1A", "max": "#E2E2E2" },
    "expression": { "min": "#FFFF00", "stop": "#00C800", "max": "#0000FF" }
  },
  "edge": {
    "initial": "#4FB4D8",
    "fadeout": "#E8F6FB",
    "hit": "#1C6C8C",
    "selection": "#FF6400",
    "flag": "#FF00FF",
    "enrichment": { "min": "#CC1414", "max": "#EBEBEB" },
    "expression": { "min": "#FFFF00", "stop": "#00C800", "max": "#0000FF" }
  }
}"##;

const CALCIUM_SALTS: &str = r##"{
  "name": "Calcium Salts",
  "node": {
    "initial": "#E0584F",
    "fadeout": "#F8E0DE",
    "hit": "#A32A22",
    "selection": "#1E1EFF",
    "flag": "#00A000",
    "enrichment": { "min": "#0A7A0A", "max": "#E5E5E5" },
    "expression": { "min": "rgba(255, 255, 0, 1)", "max": "rgba(0, 0, 255, 1)" }
  },
  "edge": {
    "initial": "#D14A42",
    "fadeout": "#FAE6E4",
    "hit": "#96261F",
    "selection": "#1E1EFF",
    "flag": "#00A000",
    "enrichment": { "min": "#0A7A0A", "max": "#EEEEEE" },
    "expression": { "min": "rgba(255, 255, 0, 1)", "max": "rgba(0, 0, 255, 1)" }
  }
}"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_parse() {
        for name in ColorProfile::builtin_names() {
            let profile = ColorProfile::builtin(name).unwrap();
            assert_eq!(&profile.name, name);
        }
    }

    #[test]
    fn test_default_is_copper() {
        let profile = ColorProfile::default();
        assert_eq!(profile, ColorProfile::builtin("Copper").unwrap());
        assert_eq!(profile.name, "Copper");
    }

    #[test]
    fn test_builtin_name_normalization() {
        let a = ColorProfile::builtin("barium_lithium").unwrap();
        let b = ColorProfile::builtin("Barium Lithium").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_builtin() {
        let err = ColorProfile::builtin("Uranium").unwrap_err();
        assert!(matches!(err, ProfileError::UnknownProfile(_)));
    }

    #[test]
    fn test_role_lookup() {
        let profile = ColorProfile::default();
        assert_eq!(profile.role(Role::Node), &profile.node);
        assert_eq!(profile.role(Role::Edge), &profile.edge);
        assert_ne!(profile.node.initial, profile.edge.initial);
    }

    #[test]
    fn test_bad_color_in_json_is_an_error() {
        let json = COPPER.replace("#E3B27E", "copper-ish");
        let err = ColorProfile::from_json(&json).unwrap_err();
        assert!(matches!(err, ProfileError::Json(_)));
        assert!(err.to_string().contains("copper-ish"));
    }
}
