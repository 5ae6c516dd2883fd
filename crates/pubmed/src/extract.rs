use common::{AnalyzerError, AnalyzerResult};
use scraper::{Html, Selector};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Paragraphs must be strictly longer than this (in characters) to count as an abstract.
    pub min_paragraph_length: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_paragraph_length: 100,
        }
    }
}

type Strategy = fn(&Html, &ExtractOptions) -> AnalyzerResult<Option<String>>;

/// Tried in order; the first non-empty value wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("abstract container", abstract_container),
    ("meta description", meta_description),
    ("meta citation_abstract", meta_citation_abstract),
    ("abstract paragraph", abstract_paragraph),
];

/// Pulls the abstract text out of an article page, or `None` if no strategy matched.
pub fn extract_abstract(html: &str, options: &ExtractOptions) -> AnalyzerResult<Option<String>> {
    let document = Html::parse_document(html);

    for (name, strategy) in STRATEGIES {
        if let Some(text) = strategy(&document, options)? {
            debug!("Abstract found via {} ({} chars)", name, text.chars().count());
            return Ok(Some(text));
        }
    }

    debug!("No extraction strategy matched");
    Ok(None)
}

fn selector(css: &str) -> AnalyzerResult<Selector> {
    Selector::parse(css).map_err(|e| {
        AnalyzerError::HtmlParse(format!("Failed to parse selector '{}': {}", css, e))
    })
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn abstract_container(document: &Html, _: &ExtractOptions) -> AnalyzerResult<Option<String>> {
    let div_selector = selector("div.abstract")?;
    Ok(document
        .select(&div_selector)
        .next()
        .and_then(|div| non_empty(&div.text().collect::<String>())))
}

fn meta_content(document: &Html, name: &str) -> AnalyzerResult<Option<String>> {
    let meta_selector = selector(&format!("meta[name=\"{}\"]", name))?;
    Ok(document
        .select(&meta_selector)
        .next()
        .and_then(|meta| non_empty(meta.attr("content").unwrap_or_default())))
}

fn meta_description(document: &Html, _: &ExtractOptions) -> AnalyzerResult<Option<String>> {
    meta_content(document, "description")
}

fn meta_citation_abstract(document: &Html, _: &ExtractOptions) -> AnalyzerResult<Option<String>> {
    meta_content(document, "citation_abstract")
}

fn abstract_paragraph(document: &Html, options: &ExtractOptions) -> AnalyzerResult<Option<String>> {
    let p_selector = selector("p")?;

    for p in document.select(&p_selector) {
        let text = p.text().collect::<String>();
        let text = text.trim();
        if text.chars().count() <= options.min_paragraph_length {
            continue;
        }

        let element = p.value();
        let tagged = element.classes().any(|class| class == "abstract")
            || element.id().is_some_and(|id| id.contains("abstract"));
        if tagged {
            return Ok(Some(text.to_string()));
        }
    }

    Ok(None)
}
