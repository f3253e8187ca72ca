//! Ticker analysis: fetch one year of bars, score them, attach company data.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::indicators::engine::IndicatorEngine;
use crate::indicators::error::IndicatorError;
use crate::models::report::{AlphaReport, CompanyProfile};
use crate::services::market_data::{
    FundamentalsProvider, Lookback, MarketDataProvider, ProviderError,
};
use crate::signals::engine::AlphaEngine;

const MAX_SYMBOL_LEN: usize = 15;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid ticker symbol {0:?}")]
    InvalidSymbol(String),

    #[error("no usable price history for {symbol}")]
    NoData { symbol: String },

    #[error("market data unavailable for {symbol}: {source}")]
    Provider {
        symbol: String,
        #[source]
        source: ProviderError,
    },
}

impl AnalysisError {
    /// Whether the caller should see "no score available" for this failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, AnalysisError::NoData { .. } | AnalysisError::Provider { .. })
    }

    pub fn symbol(&self) -> &str {
        match self {
            AnalysisError::InvalidSymbol(symbol) => symbol,
            AnalysisError::NoData { symbol } | AnalysisError::Provider { symbol, .. } => symbol,
        }
    }
}

/// Trim and upper-case a ticker, rejecting anything that is not ticker-shaped.
///
/// Allows letters, digits and `.`, `-`, `^`, `=` (e.g. `BRK-B`, `^GSPC`, `EURUSD=X`).
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim().to_uppercase();
    let valid = !symbol.is_empty()
        && symbol.len() <= MAX_SYMBOL_LEN
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));

    valid.then_some(symbol)
}

pub struct AlphaService {
    market_data: Arc<dyn MarketDataProvider>,
    fundamentals: Arc<dyn FundamentalsProvider>,
    engine: IndicatorEngine,
    lookback: Lookback,
}

impl AlphaService {
    pub fn new(
        market_data: Arc<dyn MarketDataProvider>,
        fundamentals: Arc<dyn FundamentalsProvider>,
    ) -> Self {
        Self {
            market_data,
            fundamentals,
            engine: IndicatorEngine::new(),
            lookback: Lookback::OneYear,
        }
    }

    /// Use one provider for both price history and company data.
    pub fn from_provider<P>(provider: Arc<P>) -> Self
    where
        P: MarketDataProvider + FundamentalsProvider + 'static,
    {
        Self::new(provider.clone(), provider)
    }

    pub fn with_engine(mut self, engine: IndicatorEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Run the full pipeline for one ticker.
    pub async fn analyze(&self, raw_symbol: &str) -> Result<AlphaReport, AnalysisError> {
        let symbol = normalize_symbol(raw_symbol)
            .ok_or_else(|| AnalysisError::InvalidSymbol(raw_symbol.trim().to_string()))?;

        let series = self
            .market_data
            .fetch_daily_history(&symbol, self.lookback)
            .await
            .map_err(|source| {
                warn!(symbol = %symbol, error = %source, "Price history fetch failed");
                AnalysisError::Provider {
                    symbol: symbol.clone(),
                    source,
                }
            })?;

        let (result, snapshot) =
            AlphaEngine::evaluate_using(&self.engine, &series).map_err(|e| match e {
                IndicatorError::NoData => {
                    warn!(symbol = %symbol, bars = series.len(), "No usable price history");
                    AnalysisError::NoData {
                        symbol: symbol.clone(),
                    }
                }
            })?;

        let profile = self.profile_or_placeholder(&symbol).await;
        let report = AlphaReport::build(&symbol, &snapshot, result, profile);

        info!(
            symbol = %report.symbol,
            bars = series.len(),
            score = report.score,
            verdict = %report.verdict,
            "Alpha score computed"
        );

        Ok(report)
    }

    async fn profile_or_placeholder(&self, symbol: &str) -> CompanyProfile {
        match self.fundamentals.fetch_profile(symbol).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Company profile unavailable, using placeholders");
                CompanyProfile::default()
            }
        }
    }
}
