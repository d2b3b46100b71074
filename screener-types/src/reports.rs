//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::ScreenerError;
use crate::market::{QuoteRecord, SymbolMatch};

/// Summary of a symbol search operation.
///
/// Contains the matches in provider order and any user-facing `warnings`
/// (for example a non-success HTTP status, in which case `matches` is empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchReport {
    /// Matches in the order the provider returned them.
    pub matches: Vec<SymbolMatch>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<ScreenerError>,
}

/// Summary of a latest-quote fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReport {
    /// Requested symbol.
    pub symbol: String,
    /// Latest quote, absent when the provider had no daily data or reported a failure.
    pub quote: Option<QuoteRecord>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<ScreenerError>,
}

/// Outcome of screening one symbol against a set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenReport {
    /// Screened symbol.
    pub symbol: String,
    /// Quote that was evaluated, if one could be fetched.
    pub quote: Option<QuoteRecord>,
    /// Quotes that satisfied the criteria (empty or the single evaluated quote).
    pub matches: Vec<QuoteRecord>,
    /// Non-fatal issues encountered while fetching the quote.
    pub warnings: Vec<ScreenerError>,
}

impl ScreenReport {
    /// Whether at least one quote passed the criteria.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.matches.is_empty()
    }
}
