//! Indicator engine: a price series in, the last-bar snapshot out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::calculate_atr;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::price::PriceSeries;

/// Window lengths for every indicator the engine derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub sma_fast: u32,
    pub sma_slow: u32,
    pub rsi_period: u32,
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,
    pub atr_period: u32,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_fast: 50,
            sma_slow: 200,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            atr_period: 14,
        }
    }
}

/// Stateless; every call is a pure function of the series.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorEngine {
    params: IndicatorParams,
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: IndicatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Compute every indicator over the whole series and keep the final readings.
    pub fn snapshot(&self, series: &PriceSeries) -> Result<IndicatorSnapshot, IndicatorError> {
        let last = series.last().ok_or(IndicatorError::NoData)?;
        if !last.close.is_finite() || last.close <= 0.0 {
            return Err(IndicatorError::NoData);
        }

        let bars = series.bars();
        let p = &self.params;

        let snapshot = IndicatorSnapshot::new(last.date, last.close)
            .with_smas(
                calculate_sma(bars, p.sma_fast).map(|s| s.value),
                calculate_sma(bars, p.sma_slow).map(|s| s.value),
            )
            .with_rsi(calculate_rsi(bars, p.rsi_period).map(|r| r.value))
            .with_macd(calculate_macd(bars, p.macd_fast, p.macd_slow, p.macd_signal))
            .with_atr(calculate_atr(bars, p.atr_period).map(|a| a.value));

        debug!(
            bars = bars.len(),
            date = %snapshot.date,
            sma_50 = ?snapshot.sma_50,
            sma_200 = ?snapshot.sma_200,
            rsi = ?snapshot.rsi_14,
            macd = ?snapshot.macd,
            atr = ?snapshot.atr_14,
            "Indicator snapshot computed"
        );

        Ok(snapshot)
    }
}
