use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use screener_core::connector::{QuoteProvider, ScreenerConnector, SearchProvider};
use screener_core::{CacheConfig, Capability, QuoteRecord, ScreenerError, SymbolMatch};

/// Longest time-to-live a cache layer accepts (100 years).
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn build_store<V>(cfg: &CacheConfig, capability: Capability) -> Option<Cache<String, V>>
where
    V: Clone + Send + Sync + 'static,
{
    // moka panics on TTLs beyond 1000 years; ConnectorBuilder rejects these first.
    let ttl: Duration = cfg.ttl_for(capability)?.min(MAX_CACHE_TTL);
    Some(
        Cache::builder()
            .name(capability.as_str())
            .max_capacity(cfg.max_entries.max(1))
            .time_to_live(ttl)
            .build(),
    )
}

/// Connector wrapper that memoizes successful responses per call argument.
///
/// Each capability owns an independent cache bounded by `max_entries` whose
/// entries expire after the capability's TTL. Errors pass through and are
/// never stored, so a failed lookup is retried on the next call. Empty
/// results (no matches, no daily data) are successful and are cached.
pub struct CachingConnector {
    inner: Arc<dyn ScreenerConnector>,
    search: Option<Cache<String, Vec<SymbolMatch>>>,
    quote: Option<Cache<String, Option<QuoteRecord>>>,
}

impl CachingConnector {
    /// Wrap `inner` with caches sized and aged according to `cfg`.
    ///
    /// TTLs above [`MAX_CACHE_TTL`] are clamped to it.
    #[must_use]
    pub fn new(inner: Arc<dyn ScreenerConnector>, cfg: &CacheConfig) -> Self {
        Self {
            inner,
            search: build_store(cfg, Capability::Search),
            quote: build_store(cfg, Capability::Quote),
        }
    }

    /// Access the inner connector.
    pub fn inner(&self) -> &Arc<dyn ScreenerConnector> {
        &self.inner
    }

    /// Drop every cached entry of every capability.
    pub fn invalidate_all(&self) {
        if let Some(c) = &self.search {
            c.invalidate_all();
        }
        if let Some(c) = &self.quote {
            c.invalidate_all();
        }
    }

    /// Number of live entries across all capabilities.
    ///
    /// Flushes pending maintenance first so the count reflects recent inserts,
    /// invalidations, and expirations.
    pub async fn entry_count(&self) -> u64 {
        let mut total = 0;
        if let Some(c) = &self.search {
            c.run_pending_tasks().await;
            total += c.entry_count();
        }
        if let Some(c) = &self.quote {
            c.run_pending_tasks().await;
            total += c.entry_count();
        }
        total
    }
}

#[async_trait]
impl ScreenerConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    screener_core::screener_connector_accessors!(inner);
}

#[async_trait]
impl SearchProvider for CachingConnector {
    async fn search(&self, keyword: &str) -> Result<Vec<SymbolMatch>, ScreenerError> {
        let inner = self
            .inner
            .as_search_provider()
            .ok_or_else(|| ScreenerError::unsupported(Capability::Search.as_str()))?;
        let Some(cache) = &self.search else {
            return inner.search(keyword).await;
        };

        let key = keyword.to_string();
        if let Some(hit) = cache.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "screener_middleware::cache", capability = "search", key = %key, "cache hit");
            return Ok(hit);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "screener_middleware::cache", capability = "search", key = %key, "cache miss");

        let value = inner.search(keyword).await?;
        cache.insert(key, value.clone()).await;
        Ok(value)
    }
}

#[async_trait]
impl QuoteProvider for CachingConnector {
    async fn daily_quote(&self, symbol: &str) -> Result<Option<QuoteRecord>, ScreenerError> {
        let inner = self
            .inner
            .as_quote_provider()
            .ok_or_else(|| ScreenerError::unsupported(Capability::Quote.as_str()))?;
        let Some(cache) = &self.quote else {
            return inner.daily_quote(symbol).await;
        };

        let key = symbol.to_string();
        if let Some(hit) = cache.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "screener_middleware::cache", capability = "quote", key = %key, "cache hit");
            return Ok(hit);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "screener_middleware::cache", capability = "quote", key = %key, "cache miss");

        let value = inner.daily_quote(symbol).await?;
        cache.insert(key, value.clone()).await;
        Ok(value)
    }
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl screener_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn ScreenerConnector>) -> Arc<dyn ScreenerConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingConnector"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_entries": self.cfg.max_entries,
            "default_ttl_ms": self.cfg.default_ttl_ms,
            "per_capability_ttl_ms": self.cfg.per_capability_ttl_ms,
        })
    }
}
