pub mod models;
pub mod sentences;

pub use models::{AnalysisEntry, WordAnalysis};
pub use sentences::split_sentences;

/// Counts each term in the abstract and collects the sentences that mention it.
///
/// Matching is case-insensitive plain substring search, so `"cell"` also
/// counts inside `"cells"`. Returns `None` when there is no abstract text.
pub fn analyze<S: AsRef<str>>(abstract_text: Option<&str>, terms: &[S]) -> Option<WordAnalysis> {
    let abstract_text = abstract_text.filter(|text| !text.is_empty())?;

    let lowered = abstract_text.to_lowercase();
    let sentences: Vec<(&str, String)> = split_sentences(abstract_text)
        .into_iter()
        .map(|sentence| (sentence, sentence.to_lowercase()))
        .collect();

    let entries = terms
        .iter()
        .map(|term| {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                return AnalysisEntry {
                    term,
                    count: 0,
                    matching_sentences: Vec::new(),
                };
            }

            let count = lowered.matches(term.as_str()).count();
            let matching_sentences = sentences
                .iter()
                .filter(|(_, lowered_sentence)| lowered_sentence.contains(term.as_str()))
                .map(|(sentence, _)| sentence.to_string())
                .collect();

            AnalysisEntry {
                term,
                count,
                matching_sentences,
            }
        })
        .collect();

    Some(WordAnalysis { entries })
}
