use screener::{FilterCriteria, Screener};
use screener_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,screener=trace,screener_alphavantage=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let connector = get_connector()?;
    let screener = Screener::builder().with_connector(connector).build()?;

    let _ = screener.search("appl").await?;
    let _ = screener.quote("AAPL").await?;
    let _ = screener.screen("ABC", &FilterCriteria::default()).await?;

    tracing::info!("done");
    Ok(())
}
