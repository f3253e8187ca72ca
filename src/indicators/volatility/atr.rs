//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::indicators::AtrIndicator;
use crate::models::price::PriceBar;

/// True range per bar. The first bar has no previous close, so it is `high - low`.
pub fn true_range_series(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let prev_close = i.checked_sub(1).map(|p| bars[p].close);
            math::true_range(bar.high, bar.low, prev_close)
        })
        .collect()
}

/// ATR as a simple rolling mean of true range, aligned with `bars`.
pub fn atr_series(bars: &[PriceBar], period: u32) -> Vec<Option<f64>> {
    math::sma_series(&true_range_series(bars), period as usize)
}

/// Calculate ATR (Average True Range)
///
/// Needs `period` bars of true range; the first bar counts.
pub fn calculate_atr(bars: &[PriceBar], period: u32) -> Option<AtrIndicator> {
    let value = math::latest_value(&atr_series(bars, period))?;

    Some(AtrIndicator { value, period })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(bars: &[PriceBar]) -> Option<AtrIndicator> {
    calculate_atr(bars, 14)
}
