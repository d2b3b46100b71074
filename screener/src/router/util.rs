use screener_core::ScreenerError;

/// Split a provider outcome into a value and report warnings.
///
/// Rules:
/// - `Ok(v)` → `(v, [])`.
/// - Soft error (`Http`, `RateLimited`, `Provider`) → `(empty, [err])`.
/// - Anything else → `Err(err)`.
///
/// # Errors
/// Returns the original error when it is not soft.
pub fn into_warning<T: Default>(
    res: Result<T, ScreenerError>,
) -> Result<(T, Vec<ScreenerError>), ScreenerError> {
    match res {
        Ok(v) => Ok((v, Vec::new())),
        Err(e) if e.is_soft() => {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "screener::router", error = %e, "provider failure reported as warning");
            Ok((T::default(), vec![e]))
        }
        Err(e) => Err(e),
    }
}
