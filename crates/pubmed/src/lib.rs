pub mod extract;
pub mod models;

use common::{
    AnalyzerResult, ClientIdentity, HttpPageSource, PageSource, PubmedConfig, RandomUserAgent,
};
use tracing::{info, warn};

pub use extract::{extract_abstract, ExtractOptions};
pub use models::AbstractResult;

pub struct AbstractFetcher {
    source: Box<dyn PageSource>,
    identity: Box<dyn ClientIdentity>,
    base_url: String,
    options: ExtractOptions,
}

impl AbstractFetcher {
    pub fn new(
        config: &PubmedConfig,
        source: Box<dyn PageSource>,
        identity: Box<dyn ClientIdentity>,
    ) -> Self {
        Self {
            source,
            identity,
            base_url: config.normalized_base_url(),
            options: ExtractOptions {
                min_paragraph_length: config.min_paragraph_length,
            },
        }
    }

    /// Real HTTP transport with a random browser User-Agent per request.
    pub fn from_config(config: &PubmedConfig) -> AnalyzerResult<Self> {
        let source = HttpPageSource::new(config)?;
        Ok(Self::new(
            config,
            Box::new(source),
            Box::new(RandomUserAgent::default()),
        ))
    }

    pub fn article_url(&self, pubmed_id: &str) -> String {
        format!("{}{}/", self.base_url, pubmed_id)
    }

    pub async fn fetch_html(&self, pubmed_id: &str) -> AnalyzerResult<String> {
        let url = self.article_url(pubmed_id);
        let user_agent = self.identity.next_identity();
        info!("Fetching PubMed article: {}", url);
        self.source.fetch_page(&url, &user_agent).await
    }

    pub async fn fetch_abstract_text(&self, pubmed_id: &str) -> AnalyzerResult<Option<String>> {
        let html = self.fetch_html(pubmed_id).await?;
        extract_abstract(&html, &self.options)
    }

    /// Never fails: transport and parse errors come back as `FetchError`.
    pub async fn fetch(&self, pubmed_id: &str) -> AbstractResult {
        match self.fetch_abstract_text(pubmed_id).await {
            Ok(Some(text)) => AbstractResult::Text(text),
            Ok(None) => {
                warn!("No abstract found for PubMed ID {}", pubmed_id);
                AbstractResult::NotFound
            }
            Err(e) => {
                warn!("Failed to fetch PubMed ID {}: {}", pubmed_id, e);
                AbstractResult::FetchError(format!("Error fetching PubMed article: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use common::{AnalyzerError, FixedUserAgents};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    enum Canned {
        Page(&'static str),
        Status(u16),
    }

    #[derive(Clone, Default)]
    struct StubSource {
        pages: Arc<HashMap<String, Canned>>,
        requests: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl StubSource {
        fn new(pages: Vec<(&str, Canned)>) -> Self {
            Self {
                pages: Arc::new(
                    pages
                        .into_iter()
                        .map(|(url, canned)| (url.to_string(), canned))
                        .collect(),
                ),
                requests: Arc::default(),
            }
        }

        fn requests(&self) -> Vec<(String, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for StubSource {
        async fn fetch_page(&self, url: &str, user_agent: &str) -> AnalyzerResult<String> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), user_agent.to_string()));
            match self.pages.get(url) {
                Some(Canned::Page(html)) => Ok(html.to_string()),
                Some(Canned::Status(code)) => Err(AnalyzerError::HttpStatus {
                    status: reqwest::StatusCode::from_u16(*code).unwrap(),
                    url: url.to_string(),
                }),
                None => Err(AnalyzerError::HtmlParse(format!("no stub for {}", url))),
            }
        }
    }

    fn fetcher(source: &StubSource) -> AbstractFetcher {
        AbstractFetcher::new(
            &PubmedConfig::default(),
            Box::new(source.clone()),
            Box::new(FixedUserAgents::new(["agent-1", "agent-2"])),
        )
    }

    const ARTICLE: &str = r#"
        <html><head>
            <meta name="description" content="Meta description text.">
            <meta name="citation_abstract" content="Citation abstract text.">
        </head><body>
            <div class="abstract" id="abstract">
                <div class="abstract-content selected" id="eng-abstract">
                    <p>CANCER is studied. Results were great.</p>
                </div>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_article_url() {
        let source = StubSource::default();
        assert_eq!(
            fetcher(&source).article_url("12345678"),
            "https://pubmed.ncbi.nlm.nih.gov/12345678/"
        );

        let config = PubmedConfig {
            base_url: "http://localhost:9000".to_string(),
            ..PubmedConfig::default()
        };
        let local = AbstractFetcher::new(
            &config,
            Box::new(source),
            Box::new(FixedUserAgents::new(["a"])),
        );
        assert_eq!(local.article_url("42"), "http://localhost:9000/42/");
    }

    #[tokio::test]
    async fn test_fetch_returns_abstract_text() {
        let source = StubSource::new(vec![(
            "https://pubmed.ncbi.nlm.nih.gov/111/",
            Canned::Page(ARTICLE),
        )]);

        let result = fetcher(&source).fetch("111").await;

        assert_eq!(
            result,
            AbstractResult::Text("CANCER is studied. Results were great.".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_http_error_becomes_fetch_error() {
        let source = StubSource::new(vec![(
            "https://pubmed.ncbi.nlm.nih.gov/404/",
            Canned::Status(404),
        )]);

        let result = fetcher(&source).fetch("404").await;

        let message = result.error_message().unwrap();
        assert!(message.starts_with("Error fetching PubMed article: "));
        assert!(message.contains("404 Not Found"));
        assert!(result.text().is_none());
    }

    #[tokio::test]
    async fn test_fetch_without_abstract_is_not_found() {
        let source = StubSource::new(vec![(
            "https://pubmed.ncbi.nlm.nih.gov/222/",
            Canned::Page("<html><body><p>Nothing here.</p></body></html>"),
        )]);

        assert_eq!(fetcher(&source).fetch("222").await, AbstractResult::NotFound);
    }

    #[tokio::test]
    async fn test_each_request_draws_a_fresh_identity() {
        let source = StubSource::new(vec![
            ("https://pubmed.ncbi.nlm.nih.gov/1/", Canned::Page(ARTICLE)),
            ("https://pubmed.ncbi.nlm.nih.gov/2/", Canned::Status(500)),
            ("https://pubmed.ncbi.nlm.nih.gov/3/", Canned::Page(ARTICLE)),
        ]);
        let fetcher = fetcher(&source);

        for id in ["1", "2", "3"] {
            fetcher.fetch(id).await;
        }

        assert_eq!(
            source.requests(),
            vec![
                ("https://pubmed.ncbi.nlm.nih.gov/1/".to_string(), "agent-1".to_string()),
                ("https://pubmed.ncbi.nlm.nih.gov/2/".to_string(), "agent-2".to_string()),
                ("https://pubmed.ncbi.nlm.nih.gov/3/".to_string(), "agent-1".to_string()),
            ]
        );
    }
}
