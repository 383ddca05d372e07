//! Configuration for the query pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaLensError};
use crate::spelling::suggest::SuggestionConfig;

/// Configuration for [`SchemaSystem`](crate::system::SchemaSystem).
///
/// Suggestion settings are flattened, so a config file is a single flat
/// mapping. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Minimum cosine similarity for a table to be reported.
    pub relevance_threshold: f64,

    /// Number of alternative query rewrites besides the best match.
    pub alternatives: usize,

    /// Append related business terms to the corrected query before scoring.
    pub expand_terminology: bool,

    /// Per-word suggestion settings.
    #[serde(flatten)]
    pub suggestion: SuggestionConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            relevance_threshold: 0.1,
            alternatives: 2,
            expand_terminology: false,
            suggestion: SuggestionConfig::default(),
        }
    }
}

impl SystemConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: SystemConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: SystemConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, YAML for `.yaml`/`.yml` and JSON otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        if is_yaml_path(path) {
            Self::from_yaml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.relevance_threshold.is_finite() {
            return Err(SchemaLensError::invalid_config(format!(
                "relevance_threshold must be finite, got {}",
                self.relevance_threshold
            )));
        }
        self.suggestion.validate()
    }
}

/// Whether a file should be read as YAML, judged by a `.yaml` or `.yml`
/// extension in any letter case.
pub(crate) fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SystemConfig::default();
        assert_eq!(config.relevance_threshold, 0.1);
        assert_eq!(config.alternatives, 2);
        assert!(!config.expand_terminology);
        assert_eq!(config.suggestion.max_suggestions, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_is_flat() {
        let config =
            SystemConfig::from_json_str(r#"{"relevance_threshold": 0.25, "fuzzy_cutoff": 0.7}"#)
                .unwrap();
        assert_eq!(config.relevance_threshold, 0.25);
        assert_eq!(config.suggestion.fuzzy_cutoff, 0.7);
        assert_eq!(config.suggestion.schema_confidence, 0.9);
    }

    #[test]
    fn test_yaml() {
        let config =
            SystemConfig::from_yaml_str("expand_terminology: true\nalternatives: 1\n").unwrap();
        assert!(config.expand_terminology);
        assert_eq!(config.alternatives, 1);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SystemConfig::from_json_str(r#"{"spelling_confidence": 2.0}"#).unwrap_err();
        assert!(matches!(err, SchemaLensError::Config(_)));

        let config = SystemConfig {
            relevance_threshold: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schemalens.yml");
        fs::write(&path, "relevance_threshold: 0.3\n").unwrap();

        let config = SystemConfig::load(&path).unwrap();
        assert_eq!(config.relevance_threshold, 0.3);
    }

    #[test]
    fn test_load_uppercase_yaml_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["schemalens.YML", "schemalens.Yaml"] {
            let path = dir.path().join(name);
            fs::write(&path, "relevance_threshold: 0.25\nalternatives: 1\n").unwrap();

            let config = SystemConfig::load(&path).unwrap();
            assert_eq!(config.relevance_threshold, 0.25);
            assert_eq!(config.alternatives, 1);
        }
    }

    #[test]
    fn test_is_yaml_path() {
        assert!(is_yaml_path(Path::new("config.yaml")));
        assert!(is_yaml_path(Path::new("config.YML")));
        assert!(!is_yaml_path(Path::new("config.json")));
        assert!(!is_yaml_path(Path::new("yaml")));
    }
}
