#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use screener_core::connector::{QuoteProvider, ScreenerConnector, SearchProvider};
use screener_core::{QuoteRecord, ScreenerError, SymbolMatch};

/// Wraps a connector and counts calls that reach it.
pub struct CountingConnector {
    inner: Arc<dyn ScreenerConnector>,
    pub searches: Arc<AtomicUsize>,
    pub quotes: Arc<AtomicUsize>,
}

impl CountingConnector {
    pub fn new(inner: Arc<dyn ScreenerConnector>) -> Self {
        Self {
            inner,
            searches: Arc::new(AtomicUsize::new(0)),
            quotes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn search_calls(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn quote_calls(&self) -> usize {
        self.quotes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ScreenerConnector for CountingConnector {
    fn name(&self) -> &'static str {
        "counting"
    }
    fn vendor(&self) -> &'static str {
        "test"
    }
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait::async_trait]
impl SearchProvider for CountingConnector {
    async fn search(&self, keyword: &str) -> Result<Vec<SymbolMatch>, ScreenerError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner.as_search_provider().unwrap().search(keyword).await
    }
}

#[async_trait::async_trait]
impl QuoteProvider for CountingConnector {
    async fn daily_quote(&self, symbol: &str) -> Result<Option<QuoteRecord>, ScreenerError> {
        self.quotes.fetch_add(1, Ordering::SeqCst);
        self.inner
            .as_quote_provider()
            .unwrap()
            .daily_quote(symbol)
            .await
    }
}

pub fn counting_mock() -> Arc<CountingConnector> {
    Arc::new(CountingConnector::new(Arc::new(
        screener_mock::MockConnector::new(),
    )))
}
