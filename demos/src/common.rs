use std::sync::Arc;

use screener::{CacheConfig, ScreenerConnector, ScreenerError, SymbolMatch};

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_VAR: &str = "ALPHAVANTAGE_API_KEY";

/// Return a connector for demos.
///
/// Uses the fixture connector when `SCREENER_DEMOS_USE_MOCK` is set, otherwise
/// a cached Alpha Vantage connector authenticated with `ALPHAVANTAGE_API_KEY`.
///
/// # Errors
/// Returns `InvalidArg` when the API key variable is missing or blank.
pub fn get_connector() -> Result<Arc<dyn ScreenerConnector>, ScreenerError> {
    if std::env::var("SCREENER_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Ok(Arc::new(screener_mock::MockConnector::new()));
    }
    let api_key = std::env::var(API_KEY_VAR)
        .map_err(|_| ScreenerError::InvalidArg(format!("set {API_KEY_VAR} to run the demos")))?;
    screener_alphavantage::AvConnector::cached(api_key, &CacheConfig::default())
}

/// First command-line argument, or `default` when none was given.
#[must_use]
pub fn arg_or(default: &str) -> String {
    std::env::args()
        .nth(1)
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Render a search match the way the symbol picker shows it.
#[must_use]
pub fn option_label(m: &SymbolMatch) -> String {
    m.to_string()
}
