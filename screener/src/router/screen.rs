use screener_core::{FilterCriteria, ScreenReport, ScreenerError, filter_quotes};

use crate::Screener;

impl Screener {
    /// Fetch a symbol's latest quote and test it against `criteria`.
    ///
    /// `matches` holds the quote when it lies inside the price band and meets
    /// the volume floor, and is empty otherwise (including when no quote could
    /// be fetched). Warnings from the quote fetch are carried over.
    ///
    /// Criteria are applied as given: an inverted band simply matches nothing.
    /// Hosts that want bounds checked build them with [`FilterCriteria::try_new`].
    ///
    /// # Errors
    /// As [`Screener::quote`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "screener::router",
            name = "screener::router::screen",
            skip(self, criteria),
            fields(
                min_price = criteria.min_price,
                max_price = criteria.max_price,
                min_volume = criteria.min_volume,
            ),
        )
    )]
    pub async fn screen(
        &self,
        symbol: &str,
        criteria: &FilterCriteria,
    ) -> Result<ScreenReport, ScreenerError> {
        let report = self.quote(symbol).await?;
        let matches = filter_quotes([report.quote.clone()], criteria);
        Ok(ScreenReport {
            symbol: report.symbol,
            quote: report.quote,
            matches,
            warnings: report.warnings,
        })
    }
}
