use chrono::NaiveDate;

/// Key format of daily series entries (`2024-01-05`).
pub const DAILY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Pick the entry with the latest trading date from a series keyed by date strings.
///
/// Keys are parsed with [`DAILY_KEY_FORMAT`]; entries whose key does not parse
/// are skipped. Iteration order of `entries` is irrelevant. On duplicate dates
/// the first occurrence wins.
///
/// Returns `None` when no key parses as a date.
pub fn latest_entry<'a, V, I>(entries: I) -> Option<(NaiveDate, V)>
where
    I: IntoIterator<Item = (&'a str, V)>,
{
    let mut latest: Option<(NaiveDate, V)> = None;
    for (key, value) in entries {
        let Ok(date) = NaiveDate::parse_from_str(key.trim(), DAILY_KEY_FORMAT) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "screener_core::timeseries",
                key,
                "skipping series key that is not a date"
            );
            continue;
        };
        if latest.as_ref().is_none_or(|(best, _)| date > *best) {
            latest = Some((date, value));
        }
    }
    latest
}
