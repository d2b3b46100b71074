use screener_core::{Capability, QuoteReport, ScreenerError};

use crate::Screener;
use crate::router::util::into_warning;

impl Screener {
    /// Fetch the latest trading day's close and volume for a symbol.
    ///
    /// Behavior:
    /// - The symbol is trimmed before the request.
    /// - A provider answer without daily data yields `quote: None` and no warning.
    /// - Provider-reported failures yield `quote: None` plus a warning.
    ///
    /// # Errors
    /// `InvalidArg` for a blank symbol, `Unsupported` when the connector has no
    /// quote capability; transport, data, and timeout failures are returned as-is.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "screener::router",
            name = "screener::router::quote",
            skip(self),
        )
    )]
    pub async fn quote(&self, symbol: &str) -> Result<QuoteReport, ScreenerError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ScreenerError::InvalidArg(
                "symbol must not be empty".to_string(),
            ));
        }
        let provider = self
            .connector
            .as_quote_provider()
            .ok_or_else(|| ScreenerError::unsupported(Capability::Quote.as_str()))?;

        let res = self
            .provider_call(Capability::Quote, provider.daily_quote(symbol))
            .await;
        let (quote, warnings) = into_warning(res)?;

        #[cfg(feature = "tracing")]
        if quote.is_none() && warnings.is_empty() {
            tracing::debug!(target: "screener::router", symbol, "no daily data for symbol");
        }

        Ok(QuoteReport {
            symbol: symbol.to_string(),
            quote,
            warnings,
        })
    }
}
