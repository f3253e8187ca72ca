//! Kvant: alpha score engine for daily equity price history.
//!
//! Price series flow one way through the crate:
//! `services` (market data) -> `indicators` (snapshot) -> `signals` (score, verdict).

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
