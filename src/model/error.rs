//! Error types for aidlog.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`AidError`] - Failures of remote calls and admin input
//!   - [`crate::config::ConfigError`] - Config file read/parse failures
//!   - [`crate::logging::LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! [`AidError`] is **non-fatal**. It is caught at the controller boundary,
//! logged, and turned into a notification; the list state is left exactly as
//! it was before the failed call. Retrying is always a manual admin action.
//! Config, logging and terminal errors are fatal and end the process.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote or validation failure that escaped to the top level.
    ///
    /// Only happens for the initial fetch in non-interactive paths; inside the
    /// UI these become notifications instead.
    #[error("{0}")]
    Aid(#[from] AidError),

    /// Configuration file exists but cannot be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the UI cannot function. The shell restores
    /// the terminal before this reaches the user.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// No remote endpoint was configured.
    #[error("No endpoint configured: pass --endpoint, set AIDLOG_ENDPOINT, or add `endpoint` to the config file")]
    MissingEndpoint,
}

/// Failures of aid operations.
///
/// Every variant carries a message suitable for showing to the admin as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AidError {
    /// The request never produced a usable response.
    ///
    /// Covers connection failures, non-2xx HTTP statuses and bodies that are
    /// not valid service JSON.
    #[error("Network error: {reason}")]
    Network {
        /// Human-readable cause.
        reason: String,
    },

    /// The service answered with `success: false`.
    #[error("Server error: {message}")]
    Server {
        /// Message reported by the service.
        message: String,
    },

    /// Admin input cannot be sent as-is.
    #[error("Invalid input: {reason}")]
    Validation {
        /// What is wrong with the input.
        reason: String,
    },

    /// A bulk operation was requested with nothing to complete and nothing
    /// to delete.
    #[error("Nothing to do: no records to complete and no exceptions listed")]
    NoOp,
}

impl AidError {
    /// Build a [`AidError::Network`].
    pub fn network(reason: impl Into<String>) -> Self {
        AidError::Network {
            reason: reason.into(),
        }
    }

    /// Build a [`AidError::Server`]; an empty message gets a generic text.
    pub fn server(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "unknown server error".to_string());
        AidError::Server { message }
    }

    /// Build a [`AidError::Validation`].
    pub fn validation(reason: impl Into<String>) -> Self {
        AidError::Validation {
            reason: reason.into(),
        }
    }

    /// Whether this is a local warning rather than a failure.
    ///
    /// Warnings are shown in a softer style and never involve the network.
    pub fn is_warning(&self) -> bool {
        matches!(self, AidError::NoOp | AidError::Validation { .. })
    }
}

impl From<reqwest::Error> for AidError {
    fn from(e: reqwest::Error) -> Self {
        AidError::network(e.to_string())
    }
}

impl From<serde_json::Error> for AidError {
    fn from(e: serde_json::Error) -> Self {
        AidError::network(format!("invalid response body: {e}"))
    }
}
