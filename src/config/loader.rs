//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::state::app_state::{SearchDelays, DEFAULT_SEARCH_DEBOUNCE};
use crate::state::list_state::DEFAULT_PER_PAGE;

/// Environment variable naming an alternative config file.
pub const ENV_CONFIG: &str = "AIDLOG_CONFIG";
/// Environment variable overriding the service endpoint.
pub const ENV_ENDPOINT: &str = "AIDLOG_ENDPOINT";
/// Environment variable carrying the admin session token.
pub const ENV_TOKEN: &str = "AIDLOG_TOKEN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A key parsed but its value is out of range.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Offending key.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/aidlog/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Aid service endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Rows per page for both lists.
    #[serde(default)]
    pub per_page: Option<usize>,

    /// Quiet period for the Future search box, in milliseconds.
    #[serde(default)]
    pub future_search_debounce_ms: Option<u64>,

    /// Quiet period for the Completed search box, in milliseconds.
    #[serde(default)]
    pub completed_search_debounce_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Aid service endpoint; required before the UI starts.
    pub endpoint: Option<String>,
    /// Admin session token. Never read from the config file.
    pub token: Option<String>,
    /// Rows per page.
    pub per_page: NonZeroUsize,
    /// Search debounce delays.
    pub search_delays: SearchDelays,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            per_page: DEFAULT_PER_PAGE,
            search_delays: SearchDelays {
                future: DEFAULT_SEARCH_DEBOUNCE,
                completed: DEFAULT_SEARCH_DEBOUNCE,
            },
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/aidlog/aidlog.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("aidlog").join("aidlog.log")
    } else {
        PathBuf::from("aidlog.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/aidlog/config.toml` on Unix, appropriate path on other
/// platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aidlog").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `AIDLOG_CONFIG` environment variable
/// 3. Default path `~/.config/aidlog/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for `per_page = 0`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let per_page = match config.per_page {
        Some(n) => NonZeroUsize::new(n).ok_or(ConfigError::InvalidValue {
            key: "per_page",
            reason: "must be at least 1".to_string(),
        })?,
        None => defaults.per_page,
    };

    Ok(ResolvedConfig {
        endpoint: config.endpoint.or(defaults.endpoint),
        token: defaults.token,
        per_page,
        search_delays: SearchDelays {
            future: config
                .future_search_debounce_ms
                .map_or(defaults.search_delays.future, Duration::from_millis),
            completed: config
                .completed_search_debounce_ms
                .map_or(defaults.search_delays.completed, Duration::from_millis),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `AIDLOG_ENDPOINT`: Override endpoint
/// - `AIDLOG_TOKEN`: Session token
///
/// Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(endpoint) = non_empty_env(ENV_ENDPOINT) {
        config.endpoint = Some(endpoint);
    }
    if let Some(token) = non_empty_env(ENV_TOKEN) {
        config.token = Some(token);
    }
    config
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    token_override: Option<String>,
    per_page_override: Option<NonZeroUsize>,
) -> ResolvedConfig {
    if let Some(endpoint) = endpoint_override {
        config.endpoint = Some(endpoint);
    }
    if let Some(token) = token_override {
        config.token = Some(token);
    }
    if let Some(per_page) = per_page_override {
        config.per_page = per_page;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
