/// Outcome of looking up one PubMed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbstractResult {
    Text(String),
    /// The page was fetched but no extraction strategy found any text.
    NotFound,
    FetchError(String),
}

impl AbstractResult {
    pub fn text(&self) -> Option<&str> {
        match self {
            AbstractResult::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AbstractResult::FetchError(message) => Some(message),
            _ => None,
        }
    }
}
