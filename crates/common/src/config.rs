use std::env;
use std::time::Duration;
use anyhow::{Result, Context};

pub const DEFAULT_PUBMED_BASE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/";

#[derive(Debug, Clone)]
pub struct PubmedConfig {
    pub base_url: String,
    pub min_paragraph_length: usize,
    pub request_timeout: Option<Duration>,
}

impl Default for PubmedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PUBMED_BASE_URL.to_string(),
            min_paragraph_length: 100,
            request_timeout: None,
        }
    }
}

impl PubmedConfig {
    /// Base URL with exactly one trailing slash, ready for `<base><id>/`.
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub pubmed: PubmedConfig,
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pubmed: PubmedConfig::default(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = PubmedConfig::default();

        let base_url = env::var("PUBMED_BASE_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.base_url);

        let pubmed = PubmedConfig {
            base_url,
            min_paragraph_length: env::var("PUBMED_MIN_PARAGRAPH_LENGTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_paragraph_length),
            request_timeout: env::var("PUBMED_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs),
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(level) => level
                .trim()
                .parse::<tracing::Level>()
                .ok()
                .with_context(|| format!("LOG_LEVEL has an unknown value: {}", level))?,
            Err(_) => tracing::Level::INFO,
        };

        Ok(Config { pubmed, log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_base_url_adds_single_slash() {
        let mut config = PubmedConfig::default();
        assert_eq!(config.normalized_base_url(), "https://pubmed.ncbi.nlm.nih.gov/");

        config.base_url = "http://localhost:8080".to_string();
        assert_eq!(config.normalized_base_url(), "http://localhost:8080/");

        config.base_url = "http://localhost:8080//".to_string();
        assert_eq!(config.normalized_base_url(), "http://localhost:8080/");
    }

    #[test]
    fn test_from_env() {
        let vars = [
            "PUBMED_BASE_URL",
            "PUBMED_MIN_PARAGRAPH_LENGTH",
            "PUBMED_REQUEST_TIMEOUT_SECS",
            "LOG_LEVEL",
        ];
        let clear = || {
            for var in vars {
                env::remove_var(var);
            }
        };
        clear();

        env::set_var("PUBMED_BASE_URL", "  http://localhost:9000/  ");
        env::set_var("PUBMED_MIN_PARAGRAPH_LENGTH", "abc");
        env::set_var("PUBMED_REQUEST_TIMEOUT_SECS", "5");
        env::set_var("LOG_LEVEL", "debug");
        let config = Config::from_env().unwrap();
        assert_eq!(config.pubmed.base_url, "http://localhost:9000/");
        assert_eq!(config.pubmed.min_paragraph_length, 100);
        assert_eq!(config.pubmed.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.log_level, tracing::Level::DEBUG);

        env::set_var("PUBMED_BASE_URL", "   ");
        env::set_var("PUBMED_MIN_PARAGRAPH_LENGTH", "250");
        env::set_var("PUBMED_REQUEST_TIMEOUT_SECS", "0");
        env::remove_var("LOG_LEVEL");
        let config = Config::from_env().unwrap();
        assert_eq!(config.pubmed.base_url, DEFAULT_PUBMED_BASE_URL);
        assert_eq!(config.pubmed.min_paragraph_length, 250);
        assert!(config.pubmed.request_timeout.is_none());
        assert_eq!(config.log_level, tracing::Level::INFO);

        env::set_var("LOG_LEVEL", "bogus");
        assert!(Config::from_env().is_err());

        clear();
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.pubmed.min_paragraph_length, 100);
        assert!(config.pubmed.request_timeout.is_none());
        assert_eq!(config.log_level, tracing::Level::INFO);
    }
}
