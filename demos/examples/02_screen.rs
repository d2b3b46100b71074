use screener::{FilterCriteria, Screener};
use screener_demos::common::{arg_or, get_connector, option_label};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector()?;
    let screener = Screener::builder().with_connector(connector).build()?;

    // Search, pick the first match, then screen it like the interactive flow does.
    let keyword = arg_or("abc");
    let found = screener.search(&keyword).await?;
    for w in &found.warnings {
        eprintln!("Failed to search symbols: {w}");
    }
    let Some(selected) = found.matches.first() else {
        println!("No symbols found for '{keyword}'.");
        return Ok(());
    };
    println!("Screening data for {}", option_label(selected));

    let criteria = FilterCriteria::default();
    println!(
        "Criteria: price {}..={}, volume >= {}",
        criteria.min_price, criteria.max_price, criteria.min_volume
    );
    let report = screener.screen(&selected.symbol, &criteria).await?;

    for w in &report.warnings {
        eprintln!("Failed to retrieve data for symbol {}: {w}", report.symbol);
    }
    if report.passed() {
        for q in &report.matches {
            println!(
                "  {}: close {:.2}, volume {}",
                q.symbol, q.price, q.volume
            );
        }
    } else {
        println!("No stock data meets the criteria.");
    }
    Ok(())
}
