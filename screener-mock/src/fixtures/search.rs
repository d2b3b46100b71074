use screener_core::SymbolMatch;

pub fn by_keyword(keyword: &str) -> Vec<SymbolMatch> {
    let q = keyword.to_ascii_lowercase();
    let mut results = Vec::new();
    if q.contains("appl") {
        results.push(SymbolMatch::new("AAPL", "Apple Inc."));
        results.push(SymbolMatch::new("APLE", "Apple Hospitality REIT Inc"));
    }
    if q.contains("micro") {
        results.push(SymbolMatch::new("MSFT", "Microsoft Corporation"));
    }
    if q.contains("abc") {
        results.push(SymbolMatch::new("ABC", "ABC Holdings"));
    }
    if q.contains("tesla") {
        results.push(SymbolMatch::new("TSLA", "Tesla Inc"));
    }
    results
}
