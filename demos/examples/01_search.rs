use screener::Screener;
use screener_demos::common::{arg_or, get_connector, option_label};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector()?;
    let screener = Screener::builder().with_connector(connector).build()?;

    let keyword = arg_or("appl");
    println!("Searching symbols for '{keyword}'...");
    let report = screener.search(&keyword).await?;

    for w in &report.warnings {
        eprintln!("Failed to search symbols: {w}");
    }
    if report.matches.is_empty() {
        println!("No symbols found.");
        return Ok(());
    }
    for m in &report.matches {
        println!("  {}", option_label(m));
    }
    Ok(())
}
