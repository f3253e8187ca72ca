//! Full scoring pipeline over a price series: indicators, then rules.

use crate::indicators::engine::IndicatorEngine;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::price::PriceSeries;
use crate::models::score::ScoreResult;
use crate::signals::scoring::Scorer;

pub struct AlphaEngine;

impl AlphaEngine {
    /// Score a series with the default indicator windows.
    pub fn evaluate(series: &PriceSeries) -> Result<ScoreResult, IndicatorError> {
        Self::evaluate_with_indicators(series).map(|(result, _)| result)
    }

    /// Score a series and return the snapshot the score was derived from.
    pub fn evaluate_with_indicators(
        series: &PriceSeries,
    ) -> Result<(ScoreResult, IndicatorSnapshot), IndicatorError> {
        Self::evaluate_using(&IndicatorEngine::new(), series)
    }

    pub fn evaluate_using(
        engine: &IndicatorEngine,
        series: &PriceSeries,
    ) -> Result<(ScoreResult, IndicatorSnapshot), IndicatorError> {
        let snapshot = engine.snapshot(series)?;
        let result = Scorer::score(&snapshot)?;
        Ok((result, snapshot))
    }
}
