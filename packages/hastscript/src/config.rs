//! Factory configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag vocabulary a factory builds for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    Html,
    Svg,
}

impl Space {
    pub fn as_str(self) -> &'static str {
        match self {
            Space::Html => "html",
            Space::Svg => "svg",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Space {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Space::Html),
            "svg" => Ok(Space::Svg),
            _ => Err(ConfigError::UnknownSpace(s.to_string())),
        }
    }
}

/// Settings for a [`Factory`](crate::Factory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryConfig {
    pub space: Space,

    /// Tag name used when a selector has none
    pub default_tag_name: String,

    /// Restore canonical casing of mixed-case SVG tag names
    #[serde(default)]
    pub adjust_case: bool,
}

impl FactoryConfig {
    pub fn html() -> Self {
        Self {
            space: Space::Html,
            default_tag_name: "div".to_string(),
            adjust_case: false,
        }
    }

    pub fn svg() -> Self {
        Self {
            space: Space::Svg,
            default_tag_name: "g".to_string(),
            adjust_case: true,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_tag_name.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultTagName);
        }
        Ok(())
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self::html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_from_str() {
        assert_eq!("html".parse::<Space>(), Ok(Space::Html));
        assert_eq!("SVG".parse::<Space>(), Ok(Space::Svg));
        assert_eq!(
            "mathml".parse::<Space>(),
            Err(ConfigError::UnknownSpace("mathml".to_string()))
        );
    }

    #[test]
    fn test_presets() {
        assert_eq!(FactoryConfig::html().default_tag_name, "div");
        assert!(!FactoryConfig::html().adjust_case);
        assert_eq!(FactoryConfig::svg().default_tag_name, "g");
        assert!(FactoryConfig::svg().adjust_case);
    }

    #[test]
    fn test_validate() {
        let mut config = FactoryConfig::svg();
        assert!(config.validate().is_ok());
        config.default_tag_name = " ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyDefaultTagName));
    }

    #[test]
    fn test_deserialize() {
        let config: FactoryConfig =
            serde_json::from_str(r#"{"space": "svg", "defaultTagName": "g"}"#).unwrap();
        assert_eq!(config.space, Space::Svg);
        assert!(!config.adjust_case);
    }
}
