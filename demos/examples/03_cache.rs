use std::sync::Arc;
use std::time::Duration;

use screener::{CacheConfig, CachingConnector, Capability, Screener, ScreenerConnector};
use screener_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Wrap the connector explicitly so the cache can be inspected between calls.
    let cfg = CacheConfig::default().with_ttl(Capability::Quote, Duration::from_secs(60));
    let cache = Arc::new(CachingConnector::new(get_connector()?, &cfg));
    let screener = Screener::builder()
        .with_connector(cache.clone() as Arc<dyn ScreenerConnector>)
        .build()?;

    for _ in 0..2 {
        let report = screener.quote("MSFT").await?;
        println!(
            "MSFT -> {:?} (cached entries: {})",
            report.quote.map(|q| q.price),
            cache.entry_count().await
        );
    }

    cache.invalidate_all();
    println!("after invalidate_all: {} entries", cache.entry_count().await);
    Ok(())
}
