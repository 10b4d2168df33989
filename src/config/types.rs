use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all endpoints are joined onto (e.g., "http://localhost:8000/api/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Authorization keyword: "token" or "bearer".
    #[serde(rename = "auth_scheme", default = "default_auth_scheme")]
    pub auth_scheme_str: String,
}

/// Where the login token is kept between runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Override for the token file (default: `<data dir>/vehicle-console/token`).
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

/// Presentation-only settings. Nothing here is ever sent to the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Multiplier from source-currency prices to displayed prices.
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Suffix printed after converted prices (e.g. "[M]" for millions).
    #[serde(default = "default_price_unit")]
    pub price_unit: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_auth_scheme() -> String {
    "token".to_string()
}

fn default_exchange_rate() -> f64 {
    142.28
}

fn default_currency_symbol() -> String {
    "¥".to_string()
}

fn default_price_unit() -> String {
    "[M]".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            auth_scheme_str: default_auth_scheme(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            exchange_rate: default_exchange_rate(),
            currency_symbol: default_currency_symbol(),
            price_unit: default_price_unit(),
        }
    }
}

impl DisplayConfig {
    /// Converted price with symbol and unit, e.g. "¥56929.07[M]".
    pub fn format_price(&self, price: f64) -> String {
        format!(
            "{}{:.2}{}",
            self.currency_symbol,
            price * self.exchange_rate,
            self.price_unit
        )
    }
}
