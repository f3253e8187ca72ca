use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// Nothing to compute from: the series is empty or its last close is unusable.
    #[error("no usable price data")]
    NoData,
}
