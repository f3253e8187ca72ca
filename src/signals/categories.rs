//! Rule categories, point values and thresholds for the alpha score

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    Trend,
    Momentum,
    Risk,
}

impl RuleCategory {
    pub fn name(&self) -> &'static str {
        match self {
            RuleCategory::Trend => "Trend",
            RuleCategory::Momentum => "Momentum",
            RuleCategory::Risk => "Risk",
        }
    }
}

/// Point values of each scoring rule
pub struct RulePoints;

impl RulePoints {
    pub const BASELINE: i32 = 50;

    pub const CLOSE_ABOVE_SMA_FAST: i32 = 15;
    pub const SMA_FAST_ABOVE_SLOW: i32 = 15;

    pub const RSI_HEALTHY: i32 = 10;
    pub const RSI_OVERSOLD: i32 = 20;
    pub const MACD_POSITIVE: i32 = 10;

    pub const HIGH_VOLATILITY: i32 = -10;

    pub const MIN_SCORE: i32 = 0;
    pub const MAX_SCORE: i32 = 100;

    /// Most a category can add (or remove, for risk)
    pub fn category_cap(category: RuleCategory) -> i32 {
        match category {
            RuleCategory::Trend => Self::CLOSE_ABOVE_SMA_FAST + Self::SMA_FAST_ABOVE_SLOW,
            RuleCategory::Momentum => Self::RSI_HEALTHY + Self::RSI_OVERSOLD + Self::MACD_POSITIVE,
            RuleCategory::Risk => Self::HIGH_VOLATILITY,
        }
    }
}

/// Thresholds the rules compare against
pub struct RuleThresholds;

impl RuleThresholds {
    /// Exclusive bounds of the "healthy momentum" RSI band
    pub const RSI_HEALTHY_LOW: f64 = 40.0;
    pub const RSI_HEALTHY_HIGH: f64 = 70.0;
    pub const RSI_OVERSOLD: f64 = 30.0;

    /// ATR / close above this is penalized
    pub const MAX_VOLATILITY_RATIO: f64 = 0.05;
}
