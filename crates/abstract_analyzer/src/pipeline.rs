use common::AnalyzerResult;
use pubmed::{AbstractFetcher, AbstractResult};
use tracing::{info, warn};

use crate::report::{IdentifierReport, ReportOutcome};
use crate::sink::ReportSink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub analyzed: usize,
    pub failed: usize,
}

pub struct AnalysisPipeline {
    fetcher: AbstractFetcher,
}

impl AnalysisPipeline {
    pub fn new(fetcher: AbstractFetcher) -> Self {
        Self { fetcher }
    }

    pub async fn analyze_identifier(&self, pubmed_id: &str, terms: &[String]) -> IdentifierReport {
        let outcome = match self.fetcher.fetch(pubmed_id).await {
            AbstractResult::Text(abstract_text) => {
                let analysis = word_analysis::analyze(Some(abstract_text.as_str()), terms);
                match analysis {
                    Some(analysis) => ReportOutcome::Analyzed {
                        abstract_text,
                        analysis,
                    },
                    None => ReportOutcome::Failed { message: None },
                }
            }
            AbstractResult::NotFound => ReportOutcome::Failed { message: None },
            AbstractResult::FetchError(message) => ReportOutcome::Failed {
                message: Some(message),
            },
        };

        IdentifierReport {
            pubmed_id: pubmed_id.to_string(),
            outcome,
        }
    }

    /// Processes IDs one at a time, in order. A failed ID never stops the run;
    /// only a sink error does.
    pub async fn run(
        &self,
        pubmed_ids: &[String],
        terms: &[String],
        sink: &mut dyn ReportSink,
    ) -> AnalyzerResult<RunSummary> {
        let mut summary = RunSummary::default();

        for pubmed_id in pubmed_ids {
            let report = self.analyze_identifier(pubmed_id, terms).await;
            if report.is_analyzed() {
                summary.analyzed += 1;
            } else {
                warn!("Could not find the abstract for PubMed ID {}", pubmed_id);
                summary.failed += 1;
            }
            sink.present(&report)?;
        }
        sink.finish()?;

        info!(
            "All PubMed IDs processed. Analyzed: {}, Failed: {}",
            summary.analyzed, summary.failed
        );
        Ok(summary)
    }
}
