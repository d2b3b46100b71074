use std::sync::Arc;
use std::time::Duration;

use screener_core::connector::ScreenerConnector;
use screener_core::{CacheConfig, ScreenerError};
use screener_middleware::ConnectorBuilder;
use url::Url;

use crate::{AvConnector, DEFAULT_BASE_URL};

/// Builder for [`AvConnector`].
///
/// Defaults: production base URL, a fresh `reqwest::Client` without an explicit
/// request timeout.
pub struct AvConnectorBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl AvConnectorBuilder {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
            http: None,
        }
    }

    /// Point the connector at another API root (e.g. a local mock server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Bound every request with a client-side timeout.
    ///
    /// Ignored when a custom client is supplied via [`http_client`](Self::http_client).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reuse an existing `reqwest::Client`.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the API key is blank or the base URL is not an
    /// absolute `http(s)` URL, and `Transport` if the HTTP client cannot be built.
    pub fn build(self) -> Result<AvConnector, ScreenerError> {
        let api_key = self.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ScreenerError::InvalidArg(
                "Alpha Vantage API key must not be empty".to_string(),
            ));
        }

        let endpoint = endpoint_from(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut b = reqwest::Client::builder();
                if let Some(t) = self.timeout {
                    b = b.timeout(t);
                }
                b.build().map_err(ScreenerError::transport)?
            }
        };

        Ok(AvConnector {
            http,
            endpoint,
            api_key,
        })
    }
}

fn endpoint_from(base: &str) -> Result<Url, ScreenerError> {
    let mut url = Url::parse(base)
        .map_err(|e| ScreenerError::InvalidArg(format!("invalid base url '{base}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScreenerError::InvalidArg(format!(
            "base url must use http or https, got '{}'",
            url.scheme()
        )));
    }
    // Join relative to the last path segment, so a missing trailing slash would drop it.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.join("query")
        .map_err(|e| ScreenerError::InvalidArg(format!("invalid base url '{base}': {e}")))
}

impl AvConnector {
    /// Returns a connector wrapped in the caching middleware.
    ///
    /// # Errors
    /// Propagates builder validation errors (see [`AvConnectorBuilder::build`]).
    pub fn cached(
        api_key: impl Into<String>,
        cache: &CacheConfig,
    ) -> Result<Arc<dyn ScreenerConnector>, ScreenerError> {
        let raw: Arc<dyn ScreenerConnector> = Arc::new(Self::builder(api_key).build()?);
        ConnectorBuilder::new(raw).with_cache(cache).build()
    }
}
