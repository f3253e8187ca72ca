//! External collaborators and the orchestration built on them.

pub mod analysis;
pub mod market_data;
pub mod yahoo;

pub use analysis::{normalize_symbol, AlphaService, AnalysisError};
pub use market_data::{
    FundamentalsProvider, Lookback, MarketDataProvider, ProviderError, StaticMarketData,
};
pub use yahoo::YahooFinanceProvider;
