use serde::Serialize;
use word_analysis::WordAnalysis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierReport {
    pub pubmed_id: String,
    #[serde(flatten)]
    pub outcome: ReportOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Analyzed {
        abstract_text: String,
        analysis: WordAnalysis,
    },
    Failed {
        message: Option<String>,
    },
}

impl IdentifierReport {
    pub fn is_analyzed(&self) -> bool {
        matches!(self.outcome, ReportOutcome::Analyzed { .. })
    }

    pub fn to_markdown_string(&self) -> String {
        let mut content = format!("## PubMed ID: {}\n\n", self.pubmed_id);

        match &self.outcome {
            ReportOutcome::Analyzed {
                abstract_text,
                analysis,
            } => {
                content.push_str(&format!("**Abstract**\n\n```text\n{}\n```\n", abstract_text));

                if analysis.is_empty() {
                    content.push_str("\nCould not analyze words in abstract.\n");
                }

                for entry in analysis.iter() {
                    content.push_str(&format!(
                        "\n**Word:** `{}`  \nCount: {}\n\n",
                        entry.term, entry.count
                    ));
                    if entry.matching_sentences.is_empty() {
                        content.push_str("No sentences found with this word.\n");
                    } else {
                        content.push_str("Sentences containing the word:\n\n");
                        for (i, sentence) in entry.matching_sentences.iter().enumerate() {
                            content.push_str(&format!("{}. {}\n", i + 1, sentence));
                        }
                    }
                }
            }
            ReportOutcome::Failed { message } => {
                content.push_str(&format!(
                    "**Could not find the abstract for PubMed ID {}.**\n",
                    self.pubmed_id
                ));
                if let Some(message) = message {
                    content.push_str(&format!("\n{}\n", message));
                }
            }
        }

        content
    }
}
