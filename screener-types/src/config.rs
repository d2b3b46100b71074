//! Configuration types shared across the orchestrator and middleware.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capability::Capability;

/// Global configuration for the `Screener` orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Optional deadline applied to each provider call.
    ///
    /// `None` leaves timing entirely to the connector's HTTP client.
    pub request_timeout: Option<Duration>,
}

/// Cache sizing and staleness policy for the caching middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries kept per capability before eviction.
    pub max_entries: u64,
    /// Time-to-live applied to capabilities without an explicit override.
    pub default_ttl_ms: u64,
    /// Per-capability TTL overrides keyed by capability label ("search", "quote").
    ///
    /// A TTL of `0` disables caching for that capability.
    pub per_capability_ttl_ms: HashMap<String, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1024,
            default_ttl_ms: 300_000,
            per_capability_ttl_ms: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Override the TTL for a single capability.
    #[must_use]
    pub fn with_ttl(mut self, capability: Capability, ttl: Duration) -> Self {
        let ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self.per_capability_ttl_ms
            .insert(capability.as_str().to_string(), ms);
        self
    }

    /// Effective TTL for `capability`, or `None` when caching is disabled for it.
    #[must_use]
    pub fn ttl_for(&self, capability: Capability) -> Option<Duration> {
        let ms = self
            .per_capability_ttl_ms
            .get(capability.as_str())
            .copied()
            .unwrap_or(self.default_ttl_ms);
        (ms > 0).then(|| Duration::from_millis(ms))
    }
}
