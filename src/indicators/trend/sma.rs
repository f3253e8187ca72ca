//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::indicators::SmaIndicator;
use crate::models::price::PriceBar;

/// Calculate the SMA of closes ending at the last bar
pub fn calculate_sma(bars: &[PriceBar], period: u32) -> Option<SmaIndicator> {
    if period == 0 || bars.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let value = math::latest_value(&math::sma_series(&closes, period as usize))?;

    Some(SmaIndicator { value, period })
}

/// Calculate multiple SMAs at once
pub fn calculate_smas(bars: &[PriceBar], periods: &[u32]) -> Vec<SmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_sma(bars, period))
        .collect()
}
