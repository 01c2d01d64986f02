// src/cache.rs
//
// Single-slot document cache. Each per-entity client owns exactly one of
// these; a request for a different URL evicts and replaces the entry
// wholesale, derived data included. Deliberately not an LRU: methods that
// read derived collections rely on the slot holding the *current*
// entity's document, never a stale one.

use log::trace;

use crate::dom::Document;
use crate::error::Result;
use crate::net::Fetch;

/// The one resident entry: canonical URL, parsed document, and whatever
/// was eagerly derived from it at fetch time.
pub struct Entry<T> {
    pub url: String,
    pub doc: Document,
    pub derived: T,
}

pub struct DocSlot<T> {
    entry: Option<Entry<T>>,
}

impl<T> DocSlot<T> {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Return the resident entry if it is keyed by `url`, otherwise fetch,
    /// derive and replace. Fetch or derive failure leaves the slot empty
    /// rather than half-populated.
    pub fn get_or_fetch(
        &mut self,
        url: &str,
        fetch: &dyn Fetch,
        derive: impl FnOnce(&Document) -> T,
    ) -> Result<&Entry<T>> {
        let entry = match self.entry.take() {
            Some(e) if e.url == url => e,
            _ => {
                trace!("cache miss, fetching {url}");
                let doc = fetch.fetch_document(url)?;
                let derived = derive(&doc);
                Entry { url: url.to_string(), doc, derived }
            }
        };
        Ok(self.entry.insert(entry))
    }
}

impl<T> Default for DocSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
