//! Screener-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod market;
mod reports;

pub use capability::Capability;
pub use config::{CacheConfig, ScreenerConfig};
pub use connector::ConnectorKey;
pub use error::ScreenerError;
pub use market::{FilterCriteria, QuoteRecord, SymbolMatch};
pub use reports::{QuoteReport, ScreenReport, SearchReport};
