use screener::{FilterCriteria, Screener, ScreenerError};

use crate::helpers::{ABC, MockConnector, default_criteria, q};

fn screener_with(price: f64, volume: i64) -> Screener {
    let c = MockConnector::builder()
        .with_quote_fn(move |s| Ok(Some(q(s, price, volume))))
        .build();
    Screener::builder().with_connector(c).build().unwrap()
}

#[tokio::test]
async fn quote_inside_band_passes() {
    let screener = screener_with(120.0, 60_000);
    let report = screener.screen(ABC, &default_criteria()).await.unwrap();
    assert!(report.passed());
    assert_eq!(report.matches, vec![q(ABC, 120.0, 60_000)]);
    assert_eq!(report.quote, Some(q(ABC, 120.0, 60_000)));
}

#[tokio::test]
async fn volume_below_floor_fails() {
    let screener = screener_with(120.0, 60_000);
    let report = screener
        .screen(ABC, &FilterCriteria::new(100.0, 150.0, 70_000))
        .await
        .unwrap();
    assert!(!report.passed());
    assert!(report.matches.is_empty());
    assert_eq!(report.quote, Some(q(ABC, 120.0, 60_000)));
}

#[tokio::test]
async fn bounds_are_inclusive() {
    let criteria = default_criteria();
    for (price, volume, expected) in [
        (99.99, 60_000, false),
        (100.0, 60_000, true),
        (150.0, 60_000, true),
        (150.01, 60_000, false),
        (120.0, 50_000, true),
        (120.0, 49_999, false),
    ] {
        let report = screener_with(price, volume)
            .screen(ABC, &criteria)
            .await
            .unwrap();
        assert_eq!(report.passed(), expected, "price={price} volume={volume}");
    }
}

#[tokio::test]
async fn absent_quote_has_no_matches() {
    let c = MockConnector::builder().returns_quote_ok(None).build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let report = screener.screen(ABC, &default_criteria()).await.unwrap();
    assert_eq!(report.quote, None);
    assert!(report.matches.is_empty());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn provider_failure_carries_warning() {
    let c = MockConnector::builder()
        .with_quote_fn(|_| Err(ScreenerError::http("quote", 500)))
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let report = screener.screen(ABC, &default_criteria()).await.unwrap();
    assert!(!report.passed());
    assert_eq!(report.warnings, vec![ScreenerError::http("quote", 500)]);
}

#[tokio::test]
async fn inverted_band_matches_nothing() {
    let screener = screener_with(120.0, 60_000);
    let report = screener
        .screen(ABC, &FilterCriteria::new(150.0, 100.0, 0))
        .await
        .unwrap();
    assert!(report.matches.is_empty());
    assert_eq!(report.quote, Some(q(ABC, 120.0, 60_000)));
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn unchecked_criteria_agree_with_filter_quotes() {
    let criteria = FilterCriteria::new(100.0, 150.0, -1);
    let screener = screener_with(120.0, 60_000);
    let report = screener.screen(ABC, &criteria).await.unwrap();

    let direct = screener::filter_quotes([Some(q(ABC, 120.0, 60_000))], &criteria);
    assert_eq!(report.matches, direct);
    assert!(report.passed());
}
