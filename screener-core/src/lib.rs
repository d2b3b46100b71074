//! screener-core
//!
//! Core types, traits, and utilities shared across the screener workspace.
//!
//! - `types`: re-exported DTOs, reports, configuration, and errors.
//! - `connector`: the `ScreenerConnector` trait and capability provider traits.
//! - `filter`: threshold screening over quote records.
//! - `timeseries`: helpers to pick the latest entry of a dated series.
//!
//! Connector traits are `async` (via `async-trait`) and runtime-agnostic; the
//! orchestrator and connector crates run them on Tokio.
#![warn(missing_docs)]

/// Connector capability traits and the primary `ScreenerConnector` interface.
pub mod connector;
/// Threshold screening over quote records.
pub mod filter;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Helpers for provider time series keyed by trading date.
pub mod timeseries;
pub mod types;

pub use connector::ScreenerConnector;
pub use filter::filter_quotes;
pub use middleware::Middleware;
pub use timeseries::latest_entry;
pub use types::*;
