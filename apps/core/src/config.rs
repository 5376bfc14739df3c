//! Runtime configuration for the navigator shell.
//!
//! Values come from the environment (a `.env` file is honoured) and can be
//! overridden by command-line flags. The engine itself needs no
//! configuration; its knowledge tables are compiled in.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use validator::Validate;

use crate::error::AppError;

pub const ENV_LOG: &str = "NAVIGATOR_LOG";
pub const ENV_LOG_FORMAT: &str = "NAVIGATOR_LOG_FORMAT";
pub const ENV_OUTPUT: &str = "NAVIGATOR_OUTPUT";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Log line format written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{ENV_LOG_FORMAT} must be 'compact' or 'json', got '{other}'"
            ))),
        }
    }
}

/// How the shell renders replies on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(AppError::Config(format!(
                "{ENV_OUTPUT} must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// `EnvFilter` directive, e.g. `navigator_core=debug`
    #[validate(length(min = 1))]
    pub log_filter: String,
    pub log_format: LogFormat,
    pub output: OutputMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            output: OutputMode::default(),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any), then read the process environment.
    pub fn load() -> Result<Self, AppError> {
        // Missing .env is normal
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Read configuration from the current environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(filter) = env::var(ENV_LOG) {
            config.log_filter = filter.trim().to_string();
        }
        if let Ok(format) = env::var(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }
        if let Ok(output) = env::var(ENV_OUTPUT) {
            config.output = output.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Install the global tracing subscriber. Logs go to stderr.
    pub fn init_tracing(&self) -> Result<(), AppError> {
        let filter = EnvFilter::try_new(&self.log_filter)
            .map_err(|e| AppError::Config(format!("invalid {ENV_LOG} directive: {e}")))?;

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.log_format {
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
        };

        result.map_err(|e| AppError::Config(format!("tracing already initialized: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.output, OutputMode::Text);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("JSON".parse::<LogFormat>().ok(), Some(LogFormat::Json));
        assert_eq!(" compact ".parse::<LogFormat>().ok(), Some(LogFormat::Compact));
        assert!("pretty".parse::<LogFormat>().is_err());
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("json".parse::<OutputMode>().ok(), Some(OutputMode::Json));
        assert!("html".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_empty_filter_fails_validation() {
        let config = AppConfig {
            log_filter: String::new(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
