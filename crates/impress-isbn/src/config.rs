//! Check configuration
//!
//! Settings shared by the CLI and host integrations: which algorithm to use,
//! whether a supplied check character must agree, and how results render.

use serde::{Deserialize, Serialize};

use crate::{IsbnError, IsbnKind, Result};

/// How a verification result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Just the check character
    #[default]
    Text,
    /// The full report as JSON
    Json,
}

/// Configuration for a check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Force ISBN-10 or ISBN-13; `None` routes on digit count
    pub kind: Option<IsbnKind>,
    /// Fail when a supplied check character disagrees
    pub strict: bool,
    /// Result rendering
    pub output: OutputFormat,
}

impl CheckConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| IsbnError::Config(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| IsbnError::Config(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| IsbnError::Config(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| IsbnError::Config(e.to_string()))
    }

    /// Load configuration from a file, choosing the format by extension
    /// (`.json` is JSON, anything else TOML).
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| IsbnError::Config(format!("{}: {e}", path.display())))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CheckConfig::new();
        assert_eq!(config.kind, None);
        assert!(!config.strict);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn toml_partial() {
        let config = CheckConfig::from_toml("strict = true\nkind = \"isbn13\"").unwrap();
        assert!(config.strict);
        assert_eq!(config.kind, Some(IsbnKind::Isbn13));
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn toml_roundtrip() {
        let config = CheckConfig {
            kind: Some(IsbnKind::Isbn10),
            strict: true,
            output: OutputFormat::Json,
        };
        let toml_str = config.to_toml().unwrap();
        assert_eq!(CheckConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn json_config() {
        let config = CheckConfig::from_json(r#"{"output": "json"}"#).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.to_json().unwrap().contains("\"json\""));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = CheckConfig::from_toml("kind = \"isbn12\"").unwrap_err();
        assert!(matches!(err, IsbnError::Config(_)));
    }
}
