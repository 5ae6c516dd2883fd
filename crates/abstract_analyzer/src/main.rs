use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use abstract_analyzer::{
    parse_identifiers, parse_terms, AnalysisPipeline, JsonLinesSink, MarkdownSink, ReportSink,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use common::Config;
use pubmed::AbstractFetcher;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

/// Fetch PubMed abstracts and report how often each search word appears.
#[derive(Parser, Debug)]
#[command(name = "abstract-analyzer", version)]
struct Args {
    /// PubMed IDs, one per line
    #[arg(long)]
    ids: Option<String>,

    /// File with one PubMed ID per line
    #[arg(long)]
    ids_file: Option<PathBuf>,

    /// Additional PubMed IDs
    #[arg(value_name = "PUBMED_ID")]
    pubmed_ids: Vec<String>,

    /// Comma-separated words to search for
    #[arg(short, long, env = "SEARCH_WORDS", default_value = "")]
    words: String,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
}

impl Args {
    fn identifiers(&self) -> Result<Vec<String>> {
        let mut text = self.ids.clone().unwrap_or_default();

        if let Some(path) = &self.ids_file {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            text.push('\n');
            text.push_str(&contents);
        }

        for id in &self.pubmed_ids {
            text.push('\n');
            text.push_str(id);
        }

        Ok(parse_identifiers(&text))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    let _ = dotenv::dotenv();

    let args = Args::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so stdout stays clean for the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let pubmed_ids = args.identifiers()?;
    if pubmed_ids.is_empty() {
        anyhow::bail!("No PubMed IDs given; use --ids, --ids-file or positional IDs");
    }
    let terms = parse_terms(&args.words);
    info!(
        "Analyzing {} PubMed IDs for {} search words",
        pubmed_ids.len(),
        terms.len()
    );

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink: Box<dyn ReportSink> = match args.format {
        OutputFormat::Markdown => Box::new(MarkdownSink::new(writer)),
        OutputFormat::Json => Box::new(JsonLinesSink::new(writer)),
    };

    let fetcher = AbstractFetcher::from_config(&config.pubmed)?;
    let pipeline = AnalysisPipeline::new(fetcher);
    pipeline.run(&pubmed_ids, &terms, sink.as_mut()).await?;

    if let Some(path) = &args.output {
        info!("Report written to {}", path.display());
    }

    Ok(())
}
