
pub use mock_connector::MockConnector;

use screener::{FilterCriteria, QuoteRecord, SymbolMatch};

/// Common symbol constants used across tests.
pub const AAPL: &str = "AAPL";
pub const ABC: &str = "ABC";
#[allow(dead_code)]
pub const MSFT: &str = "MSFT";

/// Build a match without the `to_string` noise.
#[allow(dead_code)]
pub fn m(symbol: &str, name: &str) -> SymbolMatch {
    SymbolMatch::new(symbol, name)
}

/// Build a quote record.
#[allow(dead_code)]
pub fn q(symbol: &str, price: f64, volume: i64) -> QuoteRecord {
    QuoteRecord::new(symbol, price, volume)
}

/// Criteria used by the interactive screen: 100..=150 and at least 50k shares.
#[allow(dead_code)]
pub const fn default_criteria() -> FilterCriteria {
    FilterCriteria::new(100.0, 150.0, 50_000)
}
