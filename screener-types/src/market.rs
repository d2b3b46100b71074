//! Market data records exchanged between connectors and the host.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScreenerError;

/// One row of a symbol search response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolMatch {
    /// Ticker symbol as reported by the provider (e.g. "AAPL").
    pub symbol: String,
    /// Instrument name (e.g. "Apple Inc.").
    pub name: String,
}

impl SymbolMatch {
    /// Build a match from a symbol and a name.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// Renders as `SYMBOL - Name`, the label hosts show in a symbol picker.
impl fmt::Display for SymbolMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.symbol, self.name)
    }
}

/// Latest trading day snapshot for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Symbol the quote was fetched for.
    pub symbol: String,
    /// Closing price of the latest trading day.
    pub price: f64,
    /// Traded volume of the latest trading day.
    pub volume: i64,
    /// Market capitalization. No connector reports it yet, so it is always `None`.
    pub market_cap: Option<f64>,
}

impl QuoteRecord {
    /// Build a record without market capitalization.
    pub fn new(symbol: impl Into<String>, price: f64, volume: i64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            volume,
            market_cap: None,
        }
    }
}

/// Inclusive price band and volume floor used to screen quotes.
///
/// `min_price <= max_price` is expected but not enforced by [`FilterCriteria::new`];
/// use [`FilterCriteria::try_new`] when the bounds come from free-form input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Lowest accepted closing price (inclusive).
    pub min_price: f64,
    /// Highest accepted closing price (inclusive).
    pub max_price: f64,
    /// Lowest accepted volume (inclusive).
    pub min_volume: i64,
}

impl FilterCriteria {
    /// Build criteria without validating the bounds.
    #[must_use]
    pub const fn new(min_price: f64, max_price: f64, min_volume: i64) -> Self {
        Self {
            min_price,
            max_price,
            min_volume,
        }
    }

    /// Build criteria, rejecting NaN bounds, an inverted price band, and a negative volume floor.
    ///
    /// # Errors
    /// Returns `ScreenerError::InvalidArg` describing the first violated bound.
    pub fn try_new(min_price: f64, max_price: f64, min_volume: i64) -> Result<Self, ScreenerError> {
        if min_price.is_nan() || max_price.is_nan() {
            return Err(ScreenerError::InvalidArg(
                "price bounds must be numbers".to_string(),
            ));
        }
        if min_price > max_price {
            return Err(ScreenerError::InvalidArg(format!(
                "min_price {min_price} exceeds max_price {max_price}"
            )));
        }
        if min_volume < 0 {
            return Err(ScreenerError::InvalidArg(format!(
                "min_volume must not be negative, got {min_volume}"
            )));
        }
        Ok(Self::new(min_price, max_price, min_volume))
    }

    /// Whether `quote` lies inside the price band and meets the volume floor.
    #[must_use]
    pub fn matches(&self, quote: &QuoteRecord) -> bool {
        self.min_price <= quote.price
            && quote.price <= self.max_price
            && quote.volume >= self.min_volume
    }
}

/// Initial thresholds of the screening form: 100..=150 and at least 50 000 shares.
impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(100.0, 150.0, 50_000)
    }
}
