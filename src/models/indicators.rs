use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub period: (u32, u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: u32,
}

/// Indicator readings aligned to the last bar of a price series.
///
/// A `None` field means the series was too short for that indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_14: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr_14: Option<f64>,
}

impl IndicatorSnapshot {
    /// Snapshot with only the close known.
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            close,
            sma_50: None,
            sma_200: None,
            rsi_14: None,
            macd: None,
            macd_signal: None,
            atr_14: None,
        }
    }

    pub fn with_smas(mut self, sma_50: Option<f64>, sma_200: Option<f64>) -> Self {
        self.sma_50 = sma_50;
        self.sma_200 = sma_200;
        self
    }

    pub fn with_rsi(mut self, rsi: Option<f64>) -> Self {
        self.rsi_14 = rsi;
        self
    }

    pub fn with_macd(mut self, macd: Option<MacdIndicator>) -> Self {
        self.macd = macd.map(|m| m.macd);
        self.macd_signal = macd.map(|m| m.signal);
        self
    }

    pub fn with_atr(mut self, atr: Option<f64>) -> Self {
        self.atr_14 = atr;
        self
    }

    /// ATR relative to the close, e.g. `0.02` for 2%.
    pub fn volatility_ratio(&self) -> Option<f64> {
        let atr = self.atr_14?;
        if self.close > 0.0 && self.close.is_finite() {
            Some(atr / self.close)
        } else {
            None
        }
    }
}
