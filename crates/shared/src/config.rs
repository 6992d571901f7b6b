//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Accounting API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Boundary validation configuration.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Accounting API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the accounting API, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Boundary validation configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ValidationConfig {
    /// Reject payloads with missing numeric fields instead of coercing to zero.
    #[serde(default)]
    pub strict: bool,
}

/// Display configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DisplayConfig {
    /// Currency used when rendering amounts.
    #[serde(default)]
    pub currency: Currency,
    /// Number of recent transactions shown on the dashboard.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Days before expiry at which a limit is flagged as expiring soon.
    #[serde(default = "default_expiry_warning_days")]
    pub expiry_warning_days: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            recent_limit: default_recent_limit(),
            expiry_warning_days: default_expiry_warning_days(),
        }
    }
}

fn default_recent_limit() -> usize {
    5
}

fn default_expiry_warning_days() -> i64 {
    30
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
            .add_source(config::Environment::with_prefix("LEDGERDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
