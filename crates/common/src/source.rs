use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use crate::config::PubmedConfig;
use crate::error::{AnalyzerError, AnalyzerResult};

/// Transport capability: GET a page and return its body.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &str, user_agent: &str) -> AnalyzerResult<String>;
}

#[derive(Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(config: &PubmedConfig) -> AnalyzerResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str, user_agent: &str) -> AnalyzerResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzerError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
