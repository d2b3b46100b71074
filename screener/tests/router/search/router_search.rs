use screener::{Screener, ScreenerError};

use crate::helpers::{MockConnector, m};

#[tokio::test]
async fn search_keeps_provider_order() {
    let c = MockConnector::builder()
        .returns_search_ok(vec![
            m("AAPL", "Apple Inc."),
            m("APLE", "Apple Hospitality REIT Inc."),
        ])
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let report = screener.search("appl").await.unwrap();
    assert_eq!(
        report.matches,
        vec![
            m("AAPL", "Apple Inc."),
            m("APLE", "Apple Hospitality REIT Inc.")
        ]
    );
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn non_success_status_is_empty_report_with_warning() {
    let c = MockConnector::builder()
        .with_search_fn(|_| Err(ScreenerError::http("search", 503)))
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let report = screener.search("appl").await.unwrap();
    assert!(report.matches.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].status(), Some(503));
    assert!(report.warnings[0].to_string().contains("503"));
}

#[tokio::test]
async fn rate_limit_notice_is_warning() {
    let c = MockConnector::builder()
        .with_search_fn(|_| {
            Err(ScreenerError::RateLimited {
                message: "Thank you for using Alpha Vantage!".into(),
            })
        })
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let report = screener.search("appl").await.unwrap();
    assert!(report.matches.is_empty());
    assert!(matches!(
        report.warnings.as_slice(),
        [ScreenerError::RateLimited { .. }]
    ));
}

#[tokio::test]
async fn data_error_propagates() {
    let c = MockConnector::builder()
        .with_search_fn(|_| Err(ScreenerError::Data("bestMatches is not an array".into())))
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let err = screener.search("appl").await.unwrap_err();
    assert!(matches!(err, ScreenerError::Data(_)));
}

#[tokio::test]
async fn blank_keyword_skips_provider() {
    let c = MockConnector::builder()
        .returns_search_ok(vec![m("AAPL", "Apple Inc.")])
        .build();
    let screener = Screener::builder()
        .with_connector(c.clone())
        .build()
        .unwrap();

    let report = screener.search("   ").await.unwrap();
    assert!(report.matches.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(c.calls(), 0);
}

#[tokio::test]
async fn keyword_is_forwarded_unchanged() {
    let c = MockConnector::builder()
        .with_search_fn(|kw| {
            assert_eq!(kw, "  micro ");
            Ok(vec![m("MSFT", "Microsoft Corporation")])
        })
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let report = screener.search("  micro ").await.unwrap();
    assert_eq!(report.matches.len(), 1);
}
