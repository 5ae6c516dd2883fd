use std::sync::atomic::{AtomicUsize, Ordering};

use rand::seq::SliceRandom;

const BROWSER_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Safari/605.1.15",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0",
];

/// Supplies the `User-Agent` value for the next outbound request.
pub trait ClientIdentity: Send + Sync {
    fn next_identity(&self) -> String;
}

/// Picks a browser User-Agent at random on every call.
pub struct RandomUserAgent {
    agents: Vec<String>,
}

impl RandomUserAgent {
    pub fn new(agents: Vec<String>) -> Self {
        Self { agents }
    }
}

impl Default for RandomUserAgent {
    fn default() -> Self {
        Self::new(BROWSER_USER_AGENTS.iter().map(|s| s.to_string()).collect())
    }
}

impl ClientIdentity for RandomUserAgent {
    fn next_identity(&self) -> String {
        self.agents
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| BROWSER_USER_AGENTS[0].to_string())
    }
}

/// Hands out the given identities in order, wrapping around at the end.
pub struct FixedUserAgents {
    agents: Vec<String>,
    next: AtomicUsize,
}

impl FixedUserAgents {
    pub fn new<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agents: agents.into_iter().map(Into::into).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl ClientIdentity for FixedUserAgents {
    fn next_identity(&self) -> String {
        if self.agents.is_empty() {
            return String::new();
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.agents.len();
        self.agents[index].clone()
    }
}
