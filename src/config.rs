//! Dashboard configuration
//!
//! Values are layered, lowest precedence first:
//! 1. Built-in defaults
//! 2. Optional TOML file (`--config`)
//! 3. Environment variables prefixed with `TRAFFIC_DASH_`
//! 4. Command-line overrides (applied by the binary via [`DashConfig::apply_overrides`])

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Default backend endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/detect";

/// Default poll cadence in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Default per-request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Accepted values for `log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

const ENV_PREFIX: &str = "TRAFFIC_DASH";

/// Runtime configuration for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashConfig {
    /// Snapshot endpoint (absolute http/https URL)
    pub endpoint: String,
    /// Poll cadence in milliseconds
    pub poll_interval_ms: u64,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log file; defaults to `traffic-dash.log` in the temp directory
    pub log_file: Option<PathBuf>,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over every other source
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl DashConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("endpoint", defaults.endpoint)?
            .set_default("poll_interval_ms", defaults.poll_interval_ms as i64)?
            .set_default("request_timeout_ms", defaults.request_timeout_ms as i64)?
            .set_default("log_level", defaults.log_level)?;

        if let Some(path) = file {
            debug!("Reading configuration file: {}", path.display());
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(interval) = overrides.poll_interval_ms {
            self.poll_interval_ms = interval;
        }
        if let Some(timeout) = overrides.request_timeout_ms {
            self.request_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check semantic constraints the deserializer cannot express
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(DashError::InvalidConfig(
                "poll_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(DashError::InvalidConfig(
                "request_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(DashError::InvalidConfig(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            DashError::InvalidConfig(format!("endpoint '{}' is not a valid URL: {}", self.endpoint, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DashError::InvalidConfig(format!(
                "endpoint scheme must be http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Resolved log file path
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("traffic-dash.log"))
    }
}
