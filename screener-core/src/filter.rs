use crate::{FilterCriteria, QuoteRecord};

/// Screen quote records against price and volume thresholds.
///
/// Absent records (`None`) are dropped; a record is kept iff
/// `min_price <= price <= max_price` and `volume >= min_volume`.
/// Relative order is preserved, so filtering an already-filtered list with the
/// same criteria returns it unchanged.
pub fn filter_quotes<I>(records: I, criteria: &FilterCriteria) -> Vec<QuoteRecord>
where
    I: IntoIterator<Item = Option<QuoteRecord>>,
{
    records
        .into_iter()
        .flatten()
        .filter(|q| criteria.matches(q))
        .collect()
}
