// src/net.rs
//
// Fetching is one blocking GET per page. Everything above this layer
// talks to the `Fetch` trait, so tests swap in an in-memory fetcher.

use log::debug;

use crate::config::USER_AGENT;
use crate::dom::Document;
use crate::error::{Error, Result};

/// Fetch-and-parse capability. No retries, no caching; a transport fault
/// on page `k` of a scan aborts the whole scan.
pub trait Fetch {
    fn fetch_document(&self, url: &str) -> Result<Document>;
}

/// Production fetcher over a plain blocking HTTP agent.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { agent: ureq::AgentBuilder::new().build() }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch_document(&self, url: &str) -> Result<Document> {
        debug!("GET {url}");
        let body = self
            .agent
            .get(url)
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| Error::Transport(e.to_string()))?
            .into_string()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Document::parse(&body))
    }
}
