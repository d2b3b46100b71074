use screener_core::QuoteRecord;

pub fn by_symbol(symbol: &str) -> Option<QuoteRecord> {
    let (price, volume) = match symbol {
        "AAPL" => (189.95, 52_164_500),
        "ABC" | "SLOW" => (120.0, 60_000),
        "MSFT" => (410.54, 21_878_300),
        "TSLA" => (175.22, 98_110_000),
        _ => return None,
    };
    Some(QuoteRecord::new(symbol, price, volume))
}
