//! Configuration types for bybit-relay

use rust_decimal::Decimal;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub sizing: SizingConfig,
    pub telemetry: TelemetryConfig,
}

/// Webhook server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the webhook listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Exchange endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    /// Base URL for the private REST API
    pub base_url: String,

    /// Quote currency used for equity lookups
    #[serde(default = "default_quote_currency")]
    pub quote_currency: String,

    /// Per-call request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_quote_currency() -> String {
    "USDT".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

/// Position sizing configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SizingConfig {
    /// Minimum quantity increment enforced by the instrument.
    /// Computed quantities are truncated down to a multiple of this step.
    /// Omitted = no quantization.
    #[serde(default)]
    pub qty_step: Option<Decimal>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub metrics_port: u16,
    pub log_level: String,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
