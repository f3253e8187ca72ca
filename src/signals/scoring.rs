//! Additive rule set turning an indicator snapshot into a bounded score
//!
//! Every rule is evaluated independently. A rule whose inputs are unavailable
//! does not fire; it is never treated as a penalty.

use crate::indicators::error::IndicatorError;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::score::{ScoreReason, ScoreResult};
use crate::signals::categories::{RuleCategory, RulePoints, RuleThresholds};

pub struct Scorer;

impl Scorer {
    /// Score a snapshot.
    ///
    /// Fails with `NoData` only when the close itself is unusable.
    pub fn score(snapshot: &IndicatorSnapshot) -> Result<ScoreResult, IndicatorError> {
        let close = snapshot.close;
        if !close.is_finite() || close <= 0.0 {
            return Err(IndicatorError::NoData);
        }

        let mut reasons = Vec::new();
        let mut score = RulePoints::BASELINE;

        let mut fire = |category: RuleCategory, points: i32, description: String| {
            score += points;
            reasons.push(ScoreReason {
                description: format!("{}: {}", category.name(), description),
                points,
            });
        };

        let sma_fast = finite(snapshot.sma_50);
        let sma_slow = finite(snapshot.sma_200);

        if let Some(sma) = sma_fast {
            if close > sma {
                fire(
                    RuleCategory::Trend,
                    RulePoints::CLOSE_ABOVE_SMA_FAST,
                    format!("close {:.2} above SMA-50 {:.2}", close, sma),
                );
            }
        }

        if let (Some(fast), Some(slow)) = (sma_fast, sma_slow) {
            if fast > slow {
                fire(
                    RuleCategory::Trend,
                    RulePoints::SMA_FAST_ABOVE_SLOW,
                    format!("SMA-50 {:.2} above SMA-200 {:.2}", fast, slow),
                );
            }
        }

        if let Some(rsi) = finite(snapshot.rsi_14) {
            if rsi > RuleThresholds::RSI_HEALTHY_LOW && rsi < RuleThresholds::RSI_HEALTHY_HIGH {
                fire(
                    RuleCategory::Momentum,
                    RulePoints::RSI_HEALTHY,
                    format!("RSI {:.2} in healthy range", rsi),
                );
            }
            if rsi < RuleThresholds::RSI_OVERSOLD {
                fire(
                    RuleCategory::Momentum,
                    RulePoints::RSI_OVERSOLD,
                    format!("RSI {:.2} oversold", rsi),
                );
            }
        }

        if let Some(macd) = finite(snapshot.macd) {
            if macd > 0.0 {
                fire(
                    RuleCategory::Momentum,
                    RulePoints::MACD_POSITIVE,
                    format!("MACD {:.4} positive", macd),
                );
            }
        }

        if let Some(ratio) = snapshot.volatility_ratio().filter(|r| r.is_finite()) {
            if ratio > RuleThresholds::MAX_VOLATILITY_RATIO {
                fire(
                    RuleCategory::Risk,
                    RulePoints::HIGH_VOLATILITY,
                    format!("ATR is {:.2}% of price", ratio * 100.0),
                );
            }
        }

        Ok(ScoreResult::new(clamp_score(score), reasons))
    }
}

/// Clamp a raw additive score into `0..=100`.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(RulePoints::MIN_SCORE, RulePoints::MAX_SCORE) as u8
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
