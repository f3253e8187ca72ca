//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod price;
pub mod report;
pub mod score;

pub use indicators::{AtrIndicator, IndicatorSnapshot, MacdIndicator, RsiIndicator, SmaIndicator};
pub use price::{PriceBar, PriceSeries, SeriesError};
pub use report::{AlphaReport, CompanyProfile};
pub use score::{ScoreReason, ScoreResult, Verdict};
