/// One PubMed ID per line; blank lines and surrounding whitespace are dropped.
pub fn parse_identifiers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-separated search words; empty entries are dropped.
pub fn parse_terms(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}
