//! Configuration for the glimpse vision client.
//!
//! Loaded from a TOML file at the platform config path with sensible
//! defaults. Credentials are `${ENV_VAR}` references resolved when the
//! backend is built, never stored resolved.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the subscription key.
pub const API_KEY_VAR: &str = "AZURE_COMPUTERVISION_API_KEY";

/// Environment variable holding the regional endpoint base URL.
pub const ENDPOINT_VAR: &str = "AZURE_ENDPOINT";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Azure endpoint and credential settings
    pub azure: AzureConfig,

    /// Request deadline and retry settings
    pub request: RequestConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Platform-appropriate directories (Linux: ~/.config/glimpse/config.toml),
    /// falling back to ~/.glimpse/config.toml if detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "glimpse", "glimpse")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".glimpse").join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.request.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "request.timeout_ms must be > 0".into(),
            ));
        }
        if self.request.max_candidates == 0 {
            return Err(ConfigError::ValidationError(
                "request.max_candidates must be > 0".into(),
            ));
        }
        if crate::output::OutputFormat::parse(&self.output.format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "output.format must be \"text\" or \"json\", got \"{}\"",
                self.output.format
            )));
        }
        Ok(())
    }
}

/// Azure Computer Vision connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureConfig {
    /// Base URL of the regional endpoint (supports ${ENV_VAR} syntax)
    pub endpoint: String,

    /// Subscription key (supports ${ENV_VAR} syntax)
    pub api_key: String,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            endpoint: format!("${{{ENDPOINT_VAR}}}"),
            api_key: format!("${{{API_KEY_VAR}}}"),
        }
    }
}

/// Request deadline and retry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Per-request deadline in milliseconds
    pub timeout_ms: u64,

    /// Max retry attempts for transient failures
    pub retry_attempts: u32,

    /// Base delay between retries in milliseconds
    pub retry_delay_ms: u64,

    /// Caption candidates requested from the describe operation
    pub max_candidates: u32,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 60_000,
            retry_attempts: 2,
            retry_delay_ms: 1000,
            max_candidates: 1,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
