//! Screener looks up stock symbols, fetches their latest daily quote, and
//! screens quotes against price and volume thresholds.
//!
//! Overview
//! - Talks to a single connector implementing the `screener_core` contracts
//!   (for example `screener-alphavantage`, optionally wrapped in the caching
//!   middleware).
//! - Converts provider-reported failures (non-200 status, rate-limit notices,
//!   provider error messages) into report warnings next to an empty result;
//!   transport and data errors are returned as `Err`.
//! - Applies an optional per-request deadline.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use screener::{FilterCriteria, Screener};
//!
//! let av = screener_alphavantage::AvConnector::cached(api_key, &Default::default())?;
//! let screener = Screener::builder().with_connector(av).build()?;
//!
//! let found = screener.search("appl").await?;
//! for m in &found.matches {
//!     println!("{m}");
//! }
//!
//! let report = screener.screen("ABC", &FilterCriteria::default()).await?;
//! if report.passed() {
//!     println!("ABC meets the criteria");
//! }
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Screener, ScreenerBuilder};
pub use router::util::into_warning;

pub use screener_middleware::{CacheMiddleware, CachingConnector, ConnectorBuilder};

// Re-export core types for convenience
pub use screener_core::{
    CacheConfig, Capability, FilterCriteria, QuoteRecord, QuoteReport, ScreenReport,
    ScreenerConfig, ScreenerConnector, ScreenerError, SearchReport, SymbolMatch, filter_quotes,
};
