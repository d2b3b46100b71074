//! Builder for composing connectors with middleware layers.
//!
//! # Middleware Ordering Convention
//!
//! Middleware layers form an "onion" around the raw connector:
//!
//! ```text
//! User Request
//!     ↓
//! Outermost Middleware (checks first, handles errors last)
//!     ↓
//! Raw Connector (e.g., Alpha Vantage - makes actual API calls)
//! ```
//!
//! The `layers` vector stores middleware in **outermost-first** order, and they
//! are **applied in reverse** during `build()` to construct the proper nesting.

use std::sync::Arc;

use screener_core::Middleware;
use screener_core::connector::ScreenerConnector;
use screener_core::{CacheConfig, Capability, ScreenerError};

use crate::cache::{CacheMiddleware, MAX_CACHE_TTL};

const CACHE_LAYER: &str = "CachingConnector";

/// Generic middleware builder for composing a connector with layered wrappers.
///
/// See [module-level documentation](self) for details on middleware ordering.
pub struct ConnectorBuilder {
    raw: Arc<dyn ScreenerConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
    cache_cfg: Option<CacheConfig>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn ScreenerConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
            cache_cfg: None,
        }
    }

    /// Add or replace the caching layer.
    ///
    /// The cache sits outermost so hits never reach the raw connector.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self.layers
            .insert(0, Box::new(CacheMiddleware::new(cfg.clone())));
        self.cache_cfg = Some(cfg.clone());
        self
    }

    /// Remove the caching layer if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self.cache_cfg = None;
        self
    }

    /// Names of configured layers, outermost first.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|m| m.name()).collect()
    }

    /// Apply the configured layers and return the composed connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when a cache layer is configured with `max_entries == 0`
    /// or with a TTL longer than [`MAX_CACHE_TTL`].
    pub fn build(self) -> Result<Arc<dyn ScreenerConnector>, ScreenerError> {
        if let Some(cfg) = &self.cache_cfg {
            validate_cache(cfg)?;
        }

        let mut wrapped = self.raw;
        for layer in self.layers.into_iter().rev() {
            wrapped = layer.apply(wrapped);
        }
        Ok(wrapped)
    }
}

fn validate_cache(cfg: &CacheConfig) -> Result<(), ScreenerError> {
    if cfg.max_entries == 0 {
        return Err(ScreenerError::InvalidArg(
            "cache max_entries must be at least 1".to_string(),
        ));
    }
    for capability in [Capability::Search, Capability::Quote] {
        if let Some(ttl) = cfg.ttl_for(capability)
            && ttl > MAX_CACHE_TTL
        {
            return Err(ScreenerError::InvalidArg(format!(
                "cache ttl for {capability} is {}ms, above the {}ms maximum",
                ttl.as_millis(),
                MAX_CACHE_TTL.as_millis()
            )));
        }
    }
    Ok(())
}
