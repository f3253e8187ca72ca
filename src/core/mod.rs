//! Serving harness around the scoring library

pub mod http;

pub use http::*;
