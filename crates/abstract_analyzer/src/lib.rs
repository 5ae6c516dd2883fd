pub mod input;
pub mod pipeline;
pub mod report;
pub mod sink;

pub use input::{parse_identifiers, parse_terms};
pub use pipeline::{AnalysisPipeline, RunSummary};
pub use report::{IdentifierReport, ReportOutcome};
pub use sink::{JsonLinesSink, MarkdownSink, ReportSink};
