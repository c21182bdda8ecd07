use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/nss-kubernetes.toml";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Main configuration structure for nss-kubernetes
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Diagnostic logging
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Lookup behaviour
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. /etc/nss-kubernetes.toml
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(parse_message(&contents, &e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup.ttl < 0 {
            return Err(ConfigError::Validation(format!(
                "TTL cannot be negative: {}",
                self.lookup.ttl
            )));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Parse error text without the source excerpt toml's `Display` includes,
/// so the contents of whatever file was named never reach a log line.
fn parse_message(contents: &str, error: &toml::de::Error) -> String {
    match error.span() {
        Some(span) => {
            let end = span.start.min(contents.len());
            let line = contents.as_bytes()[..end]
                .iter()
                .filter(|b| **b == b'\n')
                .count()
                + 1;
            format!("line {}: {}", line, error.message())
        }
        None => error.message().to_string(),
    }
}
