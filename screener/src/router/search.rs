use screener_core::{Capability, ScreenerError, SearchReport};

use crate::Screener;
use crate::router::util::into_warning;

impl Screener {
    /// Search for symbols matching a free-text keyword.
    ///
    /// Behavior:
    /// - A blank keyword returns an empty report without calling the provider;
    ///   any other keyword is forwarded unchanged.
    /// - Matches keep the provider's order.
    /// - A non-success HTTP status, rate-limit notice, or provider error message
    ///   yields an empty report carrying that failure as a warning.
    ///
    /// # Errors
    /// `Unsupported` when the connector cannot search; transport, data, and
    /// timeout failures are returned as-is.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "screener::router",
            name = "screener::router::search",
            skip(self),
        )
    )]
    pub async fn search(&self, keyword: &str) -> Result<SearchReport, ScreenerError> {
        let provider = self
            .connector
            .as_search_provider()
            .ok_or_else(|| ScreenerError::unsupported(Capability::Search.as_str()))?;

        if keyword.trim().is_empty() {
            return Ok(SearchReport::default());
        }

        let res = self
            .provider_call(Capability::Search, provider.search(keyword))
            .await;
        let (matches, warnings) = into_warning(res)?;
        Ok(SearchReport { matches, warnings })
    }
}
