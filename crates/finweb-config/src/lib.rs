//! Configuration management for finweb
//!
//! This module handles loading, validation, and management of
//! finweb configuration from YAML files. All values are fixed at
//! process start; nothing is mutated at runtime.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8029
}

/// Downstream API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the finance-tracking API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8090/api".to_string()
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency symbol
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
    /// Decimal separator
    #[serde(default = "default_decimal_sep")]
    pub decimal_separator: String,
    /// Currency symbol position ("before" or "after")
    #[serde(default)]
    pub symbol_position: SymbolPosition,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: 2,
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            symbol_position: SymbolPosition::Before,
        }
    }
}

impl CurrencyConfig {
    /// Format a monetary value for display, e.g. `$ 1.234,50`.
    ///
    /// Absent remote values are rendered by passing `0.0`.
    pub fn format(&self, value: f64) -> String {
        let number = finweb_utils::format_grouped(
            value,
            self.decimal_places,
            &self.thousands_separator,
            &self.decimal_separator,
        );
        match self.symbol_position {
            SymbolPosition::Before => format!("{} {}", self.symbol, number),
            SymbolPosition::After => format!("{} {}", number, self.symbol),
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_thousands_sep() -> String {
    ".".to_string()
}

fn default_decimal_sep() -> String {
    ",".to_string()
}

/// Currency symbol position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

impl Default for SymbolPosition {
    fn default() -> Self {
        SymbolPosition::Before
    }
}

/// Client-side stats refresh settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Poll interval for the stats refresh loop, in seconds
    #[serde(default = "default_refresh_interval")]
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_refresh_interval(),
        }
    }
}

fn default_refresh_interval() -> u64 {
    30
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Downstream API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Stats refresh settings
    #[serde(default)]
    pub refresh: RefreshConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                reason: e.to_string(),
            },
        })?;

        Self::parse(&content)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(ConfigError::FileNotFound { .. }) => Ok(Config::default()),
            Err(e) => Err(e),
        }
    }

    /// Parse and validate a YAML configuration document
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let config: Config =
            serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
                reason: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "Base URL must start with http:// or https://".to_string(),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh.interval_secs".to_string(),
                reason: "Refresh interval must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8029);
        assert_eq!(config.api.base_url, "http://localhost:8090/api");
        assert_eq!(config.refresh.interval_secs, 30);
        assert_eq!(config.logging.level, "info");
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn test_parse_partial_document() {
        let config = Config::parse("server:\n  port: 9000\napi:\n  base_url: http://10.0.0.1/api\n")
            .expect("partial document should parse");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.api.base_url, "http://10.0.0.1/api");
        // unspecified sections keep their defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.currency.symbol, "$");
    }

    #[test]
    fn test_parse_default_template() {
        let config = Config::parse(Config::generate_default()).expect("template should parse");
        assert_eq!(config.server.port, 8029);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = Config::parse("server:\n  port: 0\n").unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidValue);

        let err = Config::parse("api:\n  base_url: ftp://nope\n").unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidValue);

        let err = Config::parse("refresh:\n  interval_secs: 0\n").unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidValue);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Config::parse("server: [not a mapping").unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidYaml);
    }

    #[test]
    fn test_currency_format() {
        let currency = CurrencyConfig::default();
        assert_eq!(currency.format(500.0), "$ 500,00");
        assert_eq!(currency.format(0.0), "$ 0,00");
        assert_eq!(currency.format(1234567.5), "$ 1.234.567,50");
        assert_eq!(currency.format(-200.0), "$ -200,00");
    }

    #[test]
    fn test_currency_format_symbol_after() {
        let currency = CurrencyConfig {
            symbol: "COP".to_string(),
            symbol_position: SymbolPosition::After,
            ..CurrencyConfig::default()
        };
        assert_eq!(currency.format(1000.0), "1.000,00 COP");
    }
}
