use std::time::Duration;

use screener::{Screener, ScreenerError};

use crate::helpers::{AAPL, MockConnector, q};

#[tokio::test(start_paused = true)]
async fn slow_quote_exceeds_request_deadline() {
    let c = MockConnector::builder()
        .delay(Duration::from_secs(5))
        .returns_quote_ok(Some(q(AAPL, 189.95, 52_164_500)))
        .build();
    let screener = Screener::builder()
        .with_connector(c)
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = screener.quote(AAPL).await.unwrap_err();
    match err {
        ScreenerError::RequestTimeout { capability } => assert_eq!(capability, "quote"),
        other => panic!("expected RequestTimeout, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn slow_search_exceeds_request_deadline() {
    let c = MockConnector::builder()
        .delay(Duration::from_secs(5))
        .returns_search_ok(vec![])
        .build();
    let screener = Screener::builder()
        .with_connector(c)
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = screener.search("appl").await.unwrap_err();
    assert_eq!(err, ScreenerError::request_timeout("search"));
}

#[tokio::test(start_paused = true)]
async fn call_within_deadline_succeeds() {
    let c = MockConnector::builder()
        .delay(Duration::from_millis(50))
        .returns_quote_ok(Some(q(AAPL, 189.95, 52_164_500)))
        .build();
    let screener = Screener::builder()
        .with_connector(c)
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let report = screener.quote(AAPL).await.unwrap();
    assert_eq!(report.quote, Some(q(AAPL, 189.95, 52_164_500)));
}

#[tokio::test(start_paused = true)]
async fn no_deadline_waits_for_provider() {
    let c = MockConnector::builder()
        .delay(Duration::from_secs(30))
        .returns_quote_ok(None)
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let report = screener.quote(AAPL).await.unwrap();
    assert_eq!(report.quote, None);
}
