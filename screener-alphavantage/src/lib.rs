//! screener-alphavantage
//!
//! Public connector that implements `ScreenerConnector` on top of the Alpha
//! Vantage query API. Exposes keyword search (`SYMBOL_SEARCH`) and the latest
//! daily quote (`TIME_SERIES_DAILY`).
#![warn(missing_docs)]

/// Builder and middleware presets for [`AvConnector`].
pub mod builder;
mod payload;

use async_trait::async_trait;
use screener_core::{
    Capability, QuoteRecord, ScreenerError, SymbolMatch,
    connector::{ConnectorKey, QuoteProvider, ScreenerConnector, SearchProvider},
};
use serde_json::Value;
use url::Url;

pub use builder::AvConnectorBuilder;

/// Production endpoint root of the Alpha Vantage API.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/";

/// Public connector type. Construct with [`AvConnector::builder`].
pub struct AvConnector {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl AvConnector {
    /// Static connector key used in logs and errors.
    pub const KEY: ConnectorKey = ConnectorKey::new("screener-alphavantage");

    /// Start building a connector authenticated with `api_key`.
    pub fn builder(api_key: impl Into<String>) -> AvConnectorBuilder {
        AvConnectorBuilder::new(api_key)
    }

    /// Full URL of the query endpoint this connector calls.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue one GET against the query endpoint and decode the JSON body.
    ///
    /// Only HTTP 200 counts as success; any other status is reported as
    /// `ScreenerError::Http` without reading the body.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "screener_alphavantage",
            skip(self, params),
            fields(capability = %capability, function = function),
        )
    )]
    async fn query(
        &self,
        capability: Capability,
        function: &'static str,
        params: &[(&str, &str)],
    ) -> Result<Value, ScreenerError> {
        let resp = self
            .http
            .get(self.endpoint.clone())
            .query(&[("function", function)])
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ScreenerError::transport(e.without_url()))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "screener_alphavantage",
                status = status.as_u16(),
                "provider returned non-success status"
            );
            return Err(ScreenerError::http(capability.as_str(), status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ScreenerError::transport(e.without_url()))?;
        serde_json::from_slice(&body)
            .map_err(|e| ScreenerError::Data(format!("malformed {capability} response: {e}")))
    }
}

#[async_trait]
impl SearchProvider for AvConnector {
    async fn search(&self, keyword: &str) -> Result<Vec<SymbolMatch>, ScreenerError> {
        // Only a blank keyword is special; any other keyword goes out verbatim.
        if keyword.trim().is_empty() {
            return Ok(Vec::new());
        }
        let body = self
            .query(Capability::Search, "SYMBOL_SEARCH", &[("keywords", keyword)])
            .await?;
        payload::parse_search(&body)
    }
}

#[async_trait]
impl QuoteProvider for AvConnector {
    async fn daily_quote(&self, symbol: &str) -> Result<Option<QuoteRecord>, ScreenerError> {
        let body = self
            .query(Capability::Quote, "TIME_SERIES_DAILY", &[("symbol", symbol)])
            .await?;
        payload::parse_daily(symbol, &body)
    }
}

#[async_trait]
impl ScreenerConnector for AvConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Alpha Vantage"
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}
