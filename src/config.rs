//! Configuration loading for the curricula CLI.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.curricula/config.toml` (user)
//!
//! Every field has a default, so running without any config file is fine.
//! The API key is never read from the config file; it comes from the
//! `GOOGLE_API_KEY` environment variable (a `.env` file works too).

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::llm::{DEFAULT_MODEL, RetryConfig};
use crate::{CurriculaError, Result};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub retry: RetrySection,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// Generation backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Model to request (default: models/gemini-2.5-flash).
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Retry policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrySection {
    /// Total attempts, first try included (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base backoff delay in seconds (default: 1).
    #[serde(default = "default_initial_delay")]
    pub initial_delay_secs: u64,
    /// Backoff ceiling in seconds (default: 30).
    #[serde(default = "default_max_delay")]
    pub max_delay_secs: u64,
    /// Stop retrying on errors that cannot succeed (default: false).
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for RetrySection {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_secs: default_initial_delay(),
            max_delay_secs: default_max_delay(),
            fail_fast: false,
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay() -> u64 {
    1
}

fn default_max_delay() -> u64 {
    30
}

impl RetrySection {
    /// Convert to the runtime retry policy.
    pub fn to_retry_config(&self) -> RetryConfig {
        RetryConfig::new()
            .max_attempts(self.max_attempts)
            .initial_delay(Duration::from_secs(self.initial_delay_secs))
            .max_delay(Duration::from_secs(self.max_delay_secs))
            .fail_fast(self.fail_fast)
    }
}

/// Knowledge base configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeConfig {
    /// Directory of `.md`/`.txt` reference documents.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided, must exist)
    /// 2. `~/.curricula/config.toml`
    ///
    /// Returns defaults when no file is found.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit_path)? else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(&path).map_err(|e| {
            CurriculaError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            CurriculaError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, if any exists.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(CurriculaError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".curricula").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        Ok(None)
    }
}
