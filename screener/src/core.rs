use std::sync::Arc;
use std::time::Duration;

use screener_core::{Capability, ScreenerConfig, ScreenerConnector, ScreenerError};

/// Orchestrator that answers search, quote, and screen requests through one connector.
pub struct Screener {
    pub(crate) connector: Arc<dyn ScreenerConnector>,
    pub(crate) cfg: ScreenerConfig,
}

/// Builder for constructing a `Screener` with custom configuration.
pub struct ScreenerBuilder {
    connector: Option<Arc<dyn ScreenerConnector>>,
    cfg: ScreenerConfig,
}

impl Default for ScreenerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenerBuilder {
    /// Create a new builder with defaults: no connector and no request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: ScreenerConfig::default(),
        }
    }

    /// Register the provider connector. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn ScreenerConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Bound every provider call with a deadline.
    ///
    /// When exceeded, the operation fails with `RequestTimeout` for the capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: ScreenerConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Screener`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered via [`with_connector`](Self::with_connector)
    /// or the configured request timeout is zero.
    pub fn build(self) -> Result<Screener, ScreenerError> {
        let Some(connector) = self.connector else {
            return Err(ScreenerError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            ));
        };
        if self.cfg.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ScreenerError::InvalidArg(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Screener {
            connector,
            cfg: self.cfg,
        })
    }
}

/// Apply an optional deadline to a provider future.
///
/// On timeout, returns `ScreenerError::RequestTimeout` labelled with `capability`.
pub(crate) async fn with_request_deadline<T, Fut>(
    capability: Capability,
    deadline: Option<Duration>,
    fut: Fut,
) -> Result<T, ScreenerError>
where
    Fut: core::future::Future<Output = Result<T, ScreenerError>>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .unwrap_or_else(|_| Err(ScreenerError::request_timeout(capability.as_str()))),
        None => fut.await,
    }
}

impl Screener {
    /// Start building a new `Screener` instance.
    ///
    /// ```rust,ignore
    /// let screener = screener::Screener::builder()
    ///     .with_connector(connector)
    ///     .request_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> ScreenerBuilder {
        ScreenerBuilder::new()
    }

    /// The connector requests are routed to.
    #[must_use]
    pub fn connector(&self) -> &Arc<dyn ScreenerConnector> {
        &self.connector
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &ScreenerConfig {
        &self.cfg
    }

    /// Run a provider call under the configured deadline.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "screener::core::provider_call",
            skip(self, fut),
            fields(
                connector = self.connector.name(),
                capability = %capability,
            ),
        )
    )]
    pub(crate) async fn provider_call<T, Fut>(
        &self,
        capability: Capability,
        fut: Fut,
    ) -> Result<T, ScreenerError>
    where
        Fut: core::future::Future<Output = Result<T, ScreenerError>>,
    {
        with_request_deadline(capability, self.cfg.request_timeout, fut).await
    }
}
