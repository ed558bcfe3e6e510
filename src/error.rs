//! Error types for the traffic dashboard
//!
//! Structured error definitions use thiserror; the binary propagates them
//! with anyhow.

use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not a valid snapshot
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration sources could not be read or merged
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration was readable but semantically invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashError>;
