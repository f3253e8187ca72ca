//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdIndicator;
use crate::models::price::PriceBar;

/// MACD and signal lines aligned with `closes`.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
///
/// All EMAs use `alpha = 2 / (span + 1)` seeded at the first value, so both
/// lines exist from the first bar. Callers decide when they are warm enough.
pub fn macd_series(
    closes: &[f64],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> (Vec<f64>, Vec<f64>) {
    let fast = math::ema_series_span(closes, fast_period as usize);
    let slow = math::ema_series_span(closes, slow_period as usize);

    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = math::ema_series_span(&macd_line, signal_period as usize);

    (macd_line, signal_line)
}

/// Latest MACD reading. `None` until the series covers the slow EMA span.
pub fn calculate_macd(
    bars: &[PriceBar],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    if bars.is_empty() || bars.len() < slow_period as usize {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let (macd_line, signal_line) = macd_series(&closes, fast_period, slow_period, signal_period);

    let macd = *macd_line.last()?;
    let signal = *signal_line.last()?;
    if !macd.is_finite() || !signal.is_finite() {
        return None;
    }

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
        period: (fast_period, slow_period, signal_period),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(bars: &[PriceBar]) -> Option<MacdIndicator> {
    calculate_macd(bars, 12, 26, 9)
}
