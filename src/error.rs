// src/error.rs
//
// One enum for every way a scrape can go wrong. Low-level faults bubble up
// with `?` everywhere; only the page-scan JSON entry points in
// scrape::albums catch them and hand back an ErrorResponse record instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Network or HTTP failure while fetching a page.
    #[error("transport error: {0}")]
    Transport(String),

    /// Page index past the hard scrape limit (config::PAGE_LIMIT).
    #[error("page {0} out of range")]
    PageOutOfRange(u32),

    /// A listing block is missing one of its fixed sub-fields.
    /// Means the site markup changed; never silently dropped.
    #[error("malformed listing block: missing {0}")]
    MalformedBlock(&'static str),

    /// A field locator matched nothing and the call site declared no default.
    #[error("no element matched locator {0:?}")]
    NotFound(String),

    /// Month outside 1..=12.
    #[error("invalid month number: {0}")]
    InvalidMonth(u32),

    /// Score text that should have been an integer.
    #[error("not an integer score: {0:?}")]
    InvalidNumeral(String),

    /// Discography scan produced no section with this heading.
    #[error("discography category not found: {0:?}")]
    MissingCategory(String),
}
