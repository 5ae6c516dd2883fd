use std::io::Write;

use common::AnalyzerResult;

use crate::report::IdentifierReport;

/// Presentation capability: receives one report per PubMed ID, in input order.
pub trait ReportSink {
    fn present(&mut self, report: &IdentifierReport) -> AnalyzerResult<()>;

    fn finish(&mut self) -> AnalyzerResult<()> {
        Ok(())
    }
}

/// Markdown blocks separated by horizontal rules.
pub struct MarkdownSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> MarkdownSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for MarkdownSink<W> {
    fn present(&mut self, report: &IdentifierReport) -> AnalyzerResult<()> {
        if self.written > 0 {
            self.writer.write_all(b"\n---\n\n")?;
        }
        self.writer.write_all(report.to_markdown_string().as_bytes())?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> AnalyzerResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonLinesSink<W> {
    fn present(&mut self, report: &IdentifierReport) -> AnalyzerResult<()> {
        serde_json::to_writer(&mut self.writer, report).map_err(std::io::Error::from)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> AnalyzerResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
