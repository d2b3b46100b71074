//! Re-export of foundational types from `screener-types`.
// Consolidated re-exports so downstream crates can depend on `screener-core` only

pub use screener_types::{Capability, ConnectorKey, ScreenerError};

pub use screener_types::{CacheConfig, ScreenerConfig};

pub use screener_types::{FilterCriteria, QuoteRecord, SymbolMatch};

pub use screener_types::{QuoteReport, ScreenReport, SearchReport};
