pub mod config;
pub mod error;
pub mod source;
pub mod user_agent;

pub use config::{Config, PubmedConfig};
pub use error::{AnalyzerError, AnalyzerResult};
pub use source::{HttpPageSource, PageSource};
pub use user_agent::{ClientIdentity, FixedUserAgents, RandomUserAgent};
