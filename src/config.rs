//! Configuration for the analysis pipeline.
//!
//! Handles loading and parsing of the `qazmorph.toml` configuration file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Lookup service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Lookup service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the morphology lookup service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Tense tags whose decoded forms are dropped from results.
    ///
    /// The service is known to mislabel these; a deployment that trusts
    /// its replies can empty the list.
    #[serde(default = "default_denied_tenses")]
    pub denied_tenses: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            denied_tenses: default_denied_tenses(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_denied_tenses() -> Vec<String> {
    vec!["presentContinuous".to_string(), "infinitive".to_string()]
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get default config file path
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "qazmorph")
            .map(|dirs| dirs.config_dir().join("qazmorph.toml"))
    }

    /// Load configuration from default path or workspace
    pub fn load_from_default() -> Self {
        // Try workspace path first
        let workspace_path = PathBuf::from("qazmorph.toml");
        if workspace_path.exists() {
            if let Ok(config) = Self::load(&workspace_path) {
                return config;
            }
        }

        // Try user config directory
        if let Some(default_path) = Self::default_path() {
            if let Ok(config) = Self::load(&default_path) {
                return config;
            }
        }

        Config::default()
    }
}

impl ServiceConfig {
    /// Effective base URL (environment variable wins over the config file)
    pub fn effective_base_url(&self) -> String {
        std::env::var("QAZMORPH_SERVICE_URL").unwrap_or_else(|_| self.base_url.clone())
    }
}
