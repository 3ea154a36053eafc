//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
///
/// Every section has defaults, so loading succeeds with no files present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency-style display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Currency-style display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Symbol printed before the amount.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Number of fraction digits shown.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Separator inserted between groups of three integer digits.
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_group_separator() -> String {
    ",".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimal_places: default_decimal_places(),
            group_separator: default_group_separator(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "tally=debug".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
