//! Market data collaborators: daily price history and company reference data.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::price::{PriceSeries, SeriesError};
use crate::models::report::CompanyProfile;

/// Errors raised by a market data or fundamentals provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("rate limited by market data provider")]
    RateLimited,

    #[error("upstream returned status {0}")]
    Upstream(u16),

    #[error("symbol not found: {0}")]
    NotFound(String),

    #[error("provider error: {0}")]
    Api(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("invalid price series: {0}")]
    InvalidSeries(#[from] SeriesError),

    #[error("invalid provider url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ProviderError {
    /// Worth retrying: network trouble, throttling or a 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Request(e) => e.is_timeout() || e.is_connect(),
            ProviderError::RateLimited | ProviderError::Upstream(_) => true,
            _ => false,
        }
    }
}

/// How far back to request daily bars. Scoring always uses one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookback {
    #[default]
    OneYear,
}

impl Lookback {
    pub fn as_range(&self) -> &'static str {
        match self {
            Lookback::OneYear => "1y",
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars for `symbol`, oldest first. An unknown symbol may come back
    /// as `NotFound` or as an empty series.
    async fn fetch_daily_history(
        &self,
        symbol: &str,
        lookback: Lookback,
    ) -> Result<PriceSeries, ProviderError>;
}

#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, ProviderError>;
}

/// In-memory provider serving fixed series and profiles.
///
/// Symbols without a series resolve to an empty history; symbols without a
/// profile resolve to an empty profile.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketData {
    series: HashMap<String, PriceSeries>,
    profiles: HashMap<String, CompanyProfile>,
}

impl StaticMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, series: PriceSeries) -> Self {
        self.series.insert(symbol.to_uppercase(), series);
        self
    }

    pub fn with_profile(mut self, symbol: &str, profile: CompanyProfile) -> Self {
        self.profiles.insert(symbol.to_uppercase(), profile);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketData {
    async fn fetch_daily_history(
        &self,
        symbol: &str,
        _lookback: Lookback,
    ) -> Result<PriceSeries, ProviderError> {
        Ok(self
            .series
            .get(&symbol.to_uppercase())
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl FundamentalsProvider for StaticMarketData {
    async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, ProviderError> {
        Ok(self
            .profiles
            .get(&symbol.to_uppercase())
            .cloned()
            .unwrap_or_default())
    }
}
