use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading verdict derived from a clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Verdict {
    /// Map a clamped score to a verdict.
    ///
    /// Branch order is part of the contract: the buy thresholds are checked first,
    /// then `<= 20` before `<= 40`. Everything in 41..=59 falls through to HOLD.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Verdict::StrongBuy
        } else if score >= 60 {
            Verdict::Buy
        } else if score <= 20 {
            Verdict::StrongSell
        } else if score <= 40 {
            Verdict::Sell
        } else {
            Verdict::Hold
        }
    }

    /// Machine-readable name, matching the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::StrongBuy => "STRONG_BUY",
            Verdict::Buy => "BUY",
            Verdict::Hold => "HOLD",
            Verdict::Sell => "SELL",
            Verdict::StrongSell => "STRONG_SELL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::StrongBuy => "STRONG BUY",
            Verdict::Buy => "BUY",
            Verdict::Hold => "HOLD",
            Verdict::Sell => "SELL",
            Verdict::StrongSell => "STRONG SELL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scoring rule that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReason {
    pub description: String,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<ScoreReason>,
}

impl ScoreResult {
    pub fn new(score: u8, reasons: Vec<ScoreReason>) -> Self {
        Self {
            score,
            verdict: Verdict::from_score(score),
            reasons,
        }
    }
}
