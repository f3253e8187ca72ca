//! Alpha score evaluation.

pub mod categories;
pub mod engine;
pub mod scoring;

pub use categories::*;
pub use engine::AlphaEngine;
pub use scoring::*;
