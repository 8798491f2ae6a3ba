//! Server configuration.
//!
//! Loaded from TOML. Resolution order:
//! 1. explicit path (`--config` or `ELICIT_CONFIG`)
//! 2. `{config_dir}/elicit/config.toml`
//! 3. built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "elicit=info";

const DEFAULT_INSTRUCTIONS: &str = r#"# Elicitation

Tools that ask the human operator a single question and return the answer.

- elicit_information — free-form text
- elicit_options — pick one of a fixed list of options
- elicit_boolean — yes/no question
- elicit_number — number, optionally bounded
- elicit_date_time — date or date-time
- elicit_email — email address
- elicit_uri — URI

Keep titles short. Each call asks exactly once: the result says whether the
user answered, gave no answer, declined, or canceled. Do not re-ask unless the
conversation calls for it.
"#;

fn default_name() -> String {
    "elicit".to_string()
}

fn default_title() -> String {
    "Elicitation".to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Implementation name reported during `initialize`.
    #[serde(default = "default_name")]
    pub name: String,
    /// Human-readable server title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Instructions sent to the client; the built-in text when absent.
    #[serde(default)]
    pub instructions: Option<String>,
    /// `tracing` filter directive, used unless `RUST_LOG` is set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            instructions: None,
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    pub fn instructions(&self) -> &str {
        self.instructions.as_deref().unwrap_or(DEFAULT_INSTRUCTIONS)
    }

    /// Parse a config file. Errors name the offending path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("elicit").join("config.toml"))
}

/// Resolve the configuration.
///
/// An explicitly requested file must exist and parse. The implicit default
/// file falls back to defaults when it cannot be parsed; the second element
/// then carries the reason, to be reported once logging is initialized.
pub fn load_config(explicit: Option<&Path>) -> Result<(ServerConfig, Option<anyhow::Error>)> {
    match explicit {
        Some(path) => Ok((ServerConfig::from_file(path)?, None)),
        None => Ok(load_implicit(default_config_path().as_deref())),
    }
}

fn load_implicit(path: Option<&Path>) -> (ServerConfig, Option<anyhow::Error>) {
    match path {
        Some(path) if path.exists() => match ServerConfig::from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (ServerConfig::default(), Some(e)),
        },
        _ => (ServerConfig::default(), None),
    }
}
