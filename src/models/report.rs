//! Outbound record handed to the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::common::math::round_to;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::score::{ScoreReason, ScoreResult, Verdict};

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Reference data for a ticker. Any field may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub market_cap: Option<f64>,
    pub beta: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlphaReport {
    pub symbol: String,
    pub company_name: String,
    pub sector: String,
    pub price: f64,
    pub score: u8,
    pub verdict: Verdict,
    pub rsi: Option<f64>,
    pub volatility_pct: Option<f64>,
    #[serde(serialize_with = "figure_or_placeholder")]
    pub market_cap: Option<f64>,
    #[serde(serialize_with = "figure_or_placeholder")]
    pub beta: Option<f64>,
    pub as_of: NaiveDate,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<ScoreReason>,
}

impl AlphaReport {
    /// Assemble the report, substituting placeholders for missing profile fields.
    pub fn build(
        symbol: &str,
        snapshot: &IndicatorSnapshot,
        result: ScoreResult,
        profile: CompanyProfile,
    ) -> Self {
        let symbol = symbol.to_uppercase();
        Self {
            company_name: profile
                .company_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| symbol.clone()),
            sector: profile
                .sector
                .filter(|sector| !sector.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_SECTOR.to_string()),
            price: round_to(snapshot.close, 2),
            score: result.score,
            verdict: result.verdict,
            rsi: snapshot.rsi_14.map(|rsi| round_to(rsi, 2)),
            volatility_pct: snapshot
                .volatility_ratio()
                .map(|ratio| round_to(ratio * 100.0, 2)),
            market_cap: profile.market_cap.filter(|v| v.is_finite()),
            beta: profile.beta.filter(|v| v.is_finite()),
            as_of: snapshot.date,
            reasons: result.reasons,
            symbol,
        }
    }
}

fn figure_or_placeholder<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}
