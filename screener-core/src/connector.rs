use async_trait::async_trait;

use crate::ScreenerError;
pub use screener_types::ConnectorKey;
use screener_types::{QuoteRecord, SymbolMatch};

/// Focused role trait for connectors that can search symbols by keyword.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search the provider for symbols matching `keyword`.
    ///
    /// Implementations return an empty list without calling out when the
    /// keyword is blank, and preserve the provider's result order.
    async fn search(&self, keyword: &str) -> Result<Vec<SymbolMatch>, ScreenerError>;
}

/// Focused role trait for connectors that provide the latest daily quote.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the most recent trading day's close and volume for `symbol`.
    ///
    /// Returns `Ok(None)` when the provider answered successfully but had no
    /// daily data for the symbol.
    async fn daily_quote(&self, symbol: &str) -> Result<Option<QuoteRecord>, ScreenerError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait ScreenerConnector: Send + Sync {
    /// A stable identifier for logs and errors (e.g., "screener-alphavantage").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise search capability by returning a usable trait object reference when supported.
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        None
    }

    /// Advertise quote capability by returning a usable trait object reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }
}

/// Generate `as_*_provider` accessors for a wrapper that implements
/// `ScreenerConnector` by delegating to an inner field.
#[macro_export]
macro_rules! screener_connector_accessors {
    ($inner:ident) => {
        fn as_search_provider(&self) -> Option<&dyn $crate::connector::SearchProvider> {
            if self.$inner.as_search_provider().is_some() {
                Some(self as &dyn $crate::connector::SearchProvider)
            } else {
                None
            }
        }
        fn as_quote_provider(&self) -> Option<&dyn $crate::connector::QuoteProvider> {
            if self.$inner.as_quote_provider().is_some() {
                Some(self as &dyn $crate::connector::QuoteProvider)
            } else {
                None
            }
        }
    };
}
