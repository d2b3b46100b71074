use std::time::Duration;

use screener::{Screener, ScreenerConfig, ScreenerError};

use crate::helpers::MockConnector;

#[test]
fn build_without_connector_is_invalid_arg() {
    match Screener::builder().build() {
        Err(ScreenerError::InvalidArg(msg)) => assert!(msg.contains("with_connector")),
        Err(other) => panic!("expected InvalidArg, got {other:?}"),
        Ok(_) => panic!("expected InvalidArg, got a screener"),
    }
}

#[test]
fn zero_request_timeout_is_rejected() {
    let c = MockConnector::builder().returns_quote_ok(None).build();
    let res = Screener::builder()
        .with_connector(c)
        .request_timeout(Duration::ZERO)
        .build();
    assert!(matches!(res, Err(ScreenerError::InvalidArg(_))));
}

#[test]
fn later_connector_replaces_earlier_one() {
    let first = MockConnector::builder().name("first").build();
    let second = MockConnector::builder().name("second").build();
    let screener = Screener::builder()
        .with_connector(first)
        .with_connector(second)
        .build()
        .unwrap();
    assert_eq!(screener.connector().name(), "second");
}

#[test]
fn config_defaults_to_no_deadline() {
    let c = MockConnector::builder().build();
    let screener = Screener::builder().with_connector(c).build().unwrap();
    assert_eq!(screener.config().request_timeout, None);

    let c = MockConnector::builder().build();
    let screener = Screener::builder()
        .with_connector(c)
        .config(ScreenerConfig {
            request_timeout: Some(Duration::from_secs(3)),
        })
        .build()
        .unwrap();
    assert_eq!(
        screener.config().request_timeout,
        Some(Duration::from_secs(3))
    );
}
