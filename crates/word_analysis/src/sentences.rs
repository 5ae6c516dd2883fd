use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence break pattern is valid"));

/// Splits after `.`, `!` or `?` when followed by whitespace, keeping the
/// punctuation on the left. Abbreviations and decimals are not special-cased.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for found in SENTENCE_BREAK.find_iter(text) {
        // punctuation is a single byte
        sentences.push(&text[start..found.start() + 1]);
        start = found.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
