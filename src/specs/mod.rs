// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications: each spec encodes *where the
//! ground truth lives in the HTML* for one kind of page, as a table of
//! [`Locator`]s plus the heading names the classifier depends on.
//!
//! ## What lives here
//! - **Locator tables** — exact class-name / attribute selectors per page.
//!   Site markup drift means editing a table entry, not scraping code.
//! - **Required heading names** for the artist discography scan.
//!
//! ## What does **not** live here
//! - Networking (`net`), caching (`cache`), record shaping (`scrape::*`).
//!
//! ## Conventions & invariants
//! - First-match semantics everywhere; `find_all` only where the page is a
//!   listing (release blocks, distribution rows, table rows).
//! - Selectors are plain CSS and must stay valid; an invalid selector
//!   behaves as "matches nothing".

pub mod album;
pub mod artist;
pub mod user;

use std::borrow::Cow;

use scraper::Selector;

/// An opaque pointer into a page: a CSS selector by class name, attribute
/// or tag. Tables below use `new` (const, borrowed); per-user href
/// locators are built at runtime with `owned`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locator {
    css: Cow<'static, str>,
}

impl Locator {
    pub const fn new(css: &'static str) -> Self {
        Self { css: Cow::Borrowed(css) }
    }

    pub fn owned(css: String) -> Self {
        Self { css: Cow::Owned(css) }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub(crate) fn selector(&self) -> Option<Selector> {
        crate::dom::compile(&self.css)
    }
}
