use std::time::Duration;

use async_trait::async_trait;
use screener_core::connector::{QuoteProvider, ScreenerConnector, SearchProvider};
use screener_core::{Capability, QuoteRecord, ScreenerError, SymbolMatch};

mod fixtures;

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_delay(input: &str, capability: Capability) -> Result<(), ScreenerError> {
        let upper = input.to_ascii_uppercase();
        if upper.contains("FAIL") {
            return Err(ScreenerError::http(capability.as_str(), 500));
        }
        if upper.contains("LIMIT") {
            return Err(ScreenerError::RateLimited {
                message: "mock rate limit: 25 requests per day".to_string(),
            });
        }
        if upper == "SLOW" {
            // Keep short to avoid slowing tests excessively
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        Ok(())
    }
}

#[async_trait]
impl ScreenerConnector for MockConnector {
    fn name(&self) -> &'static str {
        "screener-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl SearchProvider for MockConnector {
    async fn search(&self, keyword: &str) -> Result<Vec<SymbolMatch>, ScreenerError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }
        Self::maybe_fail_or_delay(keyword, Capability::Search).await?;
        Ok(fixtures::search::by_keyword(keyword))
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn daily_quote(&self, symbol: &str) -> Result<Option<QuoteRecord>, ScreenerError> {
        Self::maybe_fail_or_delay(symbol, Capability::Quote).await?;
        match symbol {
            "EMPTY" => Ok(None),
            "BROKEN" => Err(ScreenerError::Data(
                "daily bar field '4. close' is not numeric: \"n/a\"".to_string(),
            )),
            s => fixtures::quotes::by_symbol(s).map(Some).ok_or_else(|| {
                ScreenerError::Provider {
                    message: format!("Invalid API call for symbol {s}"),
                }
            }),
        }
    }
}
