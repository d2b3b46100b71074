use screener::{Screener, ScreenerError};

use crate::helpers::{MockConnector, q};

#[tokio::test]
async fn search_returns_unsupported_when_connector_cannot_search() {
    let c = MockConnector::builder()
        .name("quotes-only")
        .returns_quote_ok(Some(q("AAPL", 1.0, 1)))
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let err = screener.search("appl").await.unwrap_err();
    match err {
        ScreenerError::Unsupported { capability } => assert_eq!(capability, "search"),
        other => panic!("expected Unsupported error, got {other:?}"),
    }
}

#[tokio::test]
async fn quote_returns_unsupported_when_connector_cannot_quote() {
    let c = MockConnector::builder()
        .name("search-only")
        .returns_search_ok(vec![])
        .build();
    let screener = Screener::builder().with_connector(c).build().unwrap();

    let err = screener.quote("AAPL").await.unwrap_err();
    assert_eq!(err, ScreenerError::unsupported("quote"));
}
