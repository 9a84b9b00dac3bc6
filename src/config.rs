//! YAML configuration for the Docsim pipeline.
//!
//! One file configures the index and the comparison policy:
//!
//! ```yaml
//! version: "1.0"
//! name: "plagiarism-check"
//!
//! index:
//!   initial_capacity: 1024
//!
//! matcher:
//!   # Report only exact duplicates (100) or lower it for graded similarity.
//!   min_score: 100.0
//!   max_results: 50
//! ```

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocsimConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub index: IndexYamlConfig,

    /// Default reporting policy for comparisons.
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl DocsimConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DocsimConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))
    }

    pub fn match_config(&self) -> MatchConfig {
        self.matcher.clone()
    }
}

impl Default for DocsimConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            index: IndexYamlConfig::default(),
            matcher: MatchConfig::default(),
        }
    }
}

/// Index YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IndexYamlConfig {
    /// Records to pre-allocate room for.
    #[serde(default)]
    pub initial_capacity: usize,
}
