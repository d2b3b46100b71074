//! Decoding of Alpha Vantage JSON bodies into screener records.

use screener_core::{QuoteRecord, ScreenerError, SymbolMatch, latest_entry};
use serde_json::{Map, Value};

pub(crate) const BEST_MATCHES: &str = "bestMatches";
pub(crate) const DAILY_SERIES: &str = "Time Series (Daily)";

const MATCH_SYMBOL: &str = "1. symbol";
const MATCH_NAME: &str = "2. name";
const DAILY_CLOSE: &str = "4. close";
const DAILY_VOLUME: &str = "5. volume";

/// Map the provider's informational bodies to errors.
///
/// Alpha Vantage answers throttled or rejected calls with HTTP 200 and one of
/// `Note`, `Information` or `Error Message` in place of the payload.
pub(crate) fn provider_notice(body: &Value) -> Option<ScreenerError> {
    if let Some(msg) = body.get("Error Message").and_then(Value::as_str) {
        return Some(ScreenerError::Provider {
            message: msg.to_string(),
        });
    }
    ["Note", "Information"]
        .iter()
        .find_map(|k| body.get(*k).and_then(Value::as_str))
        .map(|msg| ScreenerError::RateLimited {
            message: msg.to_string(),
        })
}

/// Decode a `SYMBOL_SEARCH` body.
pub(crate) fn parse_search(body: &Value) -> Result<Vec<SymbolMatch>, ScreenerError> {
    expect_object(body, "search")?;
    let Some(matches) = body.get(BEST_MATCHES) else {
        return provider_notice(body).map_or_else(|| Ok(Vec::new()), Err);
    };
    let rows = matches
        .as_array()
        .ok_or_else(|| ScreenerError::Data(format!("{BEST_MATCHES} is not an array")))?;
    rows.iter()
        .map(|row| {
            Ok(SymbolMatch::new(
                str_field(row, MATCH_SYMBOL)?,
                str_field(row, MATCH_NAME)?,
            ))
        })
        .collect()
}

/// Decode a `TIME_SERIES_DAILY` body into the latest trading day's quote.
pub(crate) fn parse_daily(symbol: &str, body: &Value) -> Result<Option<QuoteRecord>, ScreenerError> {
    expect_object(body, "quote")?;
    let series = match body.get(DAILY_SERIES) {
        Some(Value::Object(series)) => series,
        Some(Value::Null) | None => {
            return provider_notice(body).map_or(Ok(None), Err);
        }
        Some(_) => {
            return Err(ScreenerError::Data(format!(
                "{DAILY_SERIES} is not an object"
            )));
        }
    };
    if series.is_empty() {
        return Ok(None);
    }

    let (date, bar) = latest_entry(series.iter().map(|(k, v)| (k.as_str(), v)))
        .ok_or_else(|| ScreenerError::Data(format!("no dated entries in {DAILY_SERIES}")))?;
    let bar = bar
        .as_object()
        .ok_or_else(|| ScreenerError::Data(format!("daily bar for {date} is not an object")))?;

    Ok(Some(QuoteRecord::new(
        symbol,
        number_field(bar, DAILY_CLOSE, |s| s.parse::<f64>().ok(), Value::as_f64)?,
        number_field(bar, DAILY_VOLUME, |s| s.parse::<i64>().ok(), Value::as_i64)?,
    )))
}

fn expect_object(body: &Value, what: &str) -> Result<(), ScreenerError> {
    if body.is_object() {
        Ok(())
    } else {
        Err(ScreenerError::Data(format!(
            "{what} response is not a JSON object: {body}"
        )))
    }
}

fn str_field(row: &Value, key: &str) -> Result<String, ScreenerError> {
    row.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ScreenerError::Data(format!("search match missing '{key}'")))
}

// Values arrive as strings ("189.2500"); plain JSON numbers are accepted as well.
fn number_field<T>(
    bar: &Map<String, Value>,
    key: &str,
    from_str: impl Fn(&str) -> Option<T>,
    from_num: impl Fn(&Value) -> Option<T>,
) -> Result<T, ScreenerError> {
    let raw = bar
        .get(key)
        .ok_or_else(|| ScreenerError::Data(format!("daily bar missing '{key}'")))?;
    let parsed = match raw {
        Value::String(s) => from_str(s.trim()),
        Value::Number(_) => from_num(raw),
        _ => None,
    };
    parsed.ok_or_else(|| ScreenerError::Data(format!("daily bar field '{key}' is not numeric: {raw}")))
}
