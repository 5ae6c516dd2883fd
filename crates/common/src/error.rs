use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("{status} returned for url: {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("HTML parsing failed: {0}")]
    HtmlParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
