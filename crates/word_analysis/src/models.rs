use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisEntry {
    pub term: String,
    pub count: usize,
    pub matching_sentences: Vec<String>,
}

/// One entry per requested term, in request order. Repeated terms keep every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordAnalysis {
    pub entries: Vec<AnalysisEntry>,
}

impl WordAnalysis {
    pub fn get(&self, term: &str) -> Option<&AnalysisEntry> {
        let term = term.trim().to_lowercase();
        self.entries.iter().rev().find(|entry| entry.term == term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keyed view; a repeated term keeps its last entry.
    pub fn to_map(&self) -> HashMap<String, AnalysisEntry> {
        self.entries
            .iter()
            .map(|entry| (entry.term.clone(), entry.clone()))
            .collect()
    }
}
