//! Runtime configuration read from the environment (and `.env` via dotenvy).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::logging::LogFormat;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MARKET_DATA_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_SYMBOL: &str = "SPY";
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub market_data_base_url: String,
    pub request_timeout: Duration,
    pub max_retries: usize,
    pub default_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            port: DEFAULT_PORT,
            market_data_base_url: DEFAULT_MARKET_DATA_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            max_retries: 2,
            default_symbol: DEFAULT_SYMBOL.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            environment: text("ENVIRONMENT")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.environment),
            port: parse_or(text("PORT"), defaults.port),
            market_data_base_url: text("MARKET_DATA_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.market_data_base_url),
            request_timeout: Duration::from_secs(parse_or(
                text("MARKET_DATA_TIMEOUT_SECS"),
                defaults.request_timeout.as_secs(),
            )),
            max_retries: parse_or(text("MARKET_DATA_MAX_RETRIES"), defaults.max_retries),
            default_symbol: text("DEFAULT_SYMBOL")
                .map(|v| v.to_uppercase())
                .unwrap_or(defaults.default_symbol),
        }
    }

    pub fn is_production(&self) -> bool {
        self.log_format() == LogFormat::Json
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::for_environment(&self.environment)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
