//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::RsiIndicator;
use crate::models::price::PriceBar;

/// RSI series aligned with `closes`.
///
/// Gains and losses are smoothed with `alpha = 1 / period`, both seeded at zero on
/// the first bar (which has no change). RSI is defined from the second bar on.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
pub fn rsi_series(closes: &[f64], period: u32) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if closes.len() < 2 || period == 0 {
        return out;
    }

    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    gains.push(0.0);
    losses.push(0.0);

    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let alpha = 1.0 / period as f64;
    let avg_gains = math::ema_series(&gains, alpha);
    let avg_losses = math::ema_series(&losses, alpha);

    for (i, (gain, loss)) in avg_gains.iter().zip(&avg_losses).enumerate().skip(1) {
        out[i] = Some(rsi_from_averages(*gain, *loss));
    }
    out
}

/// RSI from smoothed averages.
///
/// With no losses the reading is 100, unless there were no gains either
/// (a flat series), which reads as neutral 50.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Latest RSI reading for a bar sequence.
pub fn calculate_rsi(bars: &[PriceBar], period: u32) -> Option<RsiIndicator> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let value = math::latest_value(&rsi_series(&closes, period))?;

    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[PriceBar]) -> Option<RsiIndicator> {
    calculate_rsi(bars, 14)
}
