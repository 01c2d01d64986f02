// src/dom.rs
//
// Thin wrappers around `scraper` so the rest of the crate talks about
// documents, elements and locators instead of CSS machinery. First-match
// queries mirror the site scraping we do everywhere: grab one element,
// read its text, trim at the call site that cares.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::specs::Locator;

/// One fully parsed page, queryable by locator.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    /// First element matching the locator, in document order.
    pub fn find(&self, loc: &Locator) -> Option<Element<'_>> {
        let sel = loc.selector()?;
        self.html.select(&sel).next().map(Element::from)
    }

    /// All matching elements, in document order.
    pub fn find_all(&self, loc: &Locator) -> Vec<Element<'_>> {
        match loc.selector() {
            Some(sel) => self.html.select(&sel).map(Element::from).collect(),
            None => Vec::new(),
        }
    }
}

/// One element inside a parsed page.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    el: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Element<'a> {
    fn from(el: ElementRef<'a>) -> Self {
        Self { el }
    }
}

impl<'a> Element<'a> {
    /// Tag name, e.g. "h2" or "div".
    pub fn tag(&self) -> &'a str {
        self.el.value().name()
    }

    /// Visible text content, untrimmed.
    pub fn text(&self) -> String {
        self.el.text().collect()
    }

    /// Text with every segment trimmed before concatenation. Matches how
    /// the site fuses heading text ("Singles" + "View All" → "SinglesView All").
    pub fn stripped_text(&self) -> String {
        self.el.text().map(str::trim).collect()
    }

    /// First matching descendant. The element itself never matches.
    pub fn find(&self, loc: &Locator) -> Option<Element<'a>> {
        let sel = loc.selector()?;
        self.el
            .select(&sel)
            .find(|e| e.id() != self.el.id())
            .map(Element::from)
    }
}

/// Field Extractor: single element lookup, trimmed text, `NotFound` when
/// nothing matches. Call sites with an empty-result policy use
/// [`class_text_or_empty`] instead.
pub fn class_text(doc: &Document, loc: &Locator) -> Result<String> {
    doc.find(loc)
        .map(|el| el.text().trim().to_string())
        .ok_or_else(|| Error::NotFound(loc.css().to_string()))
}

/// Same lookup with `NotFound → ""`.
pub fn class_text_or_empty(doc: &Document, loc: &Locator) -> String {
    doc.find(loc)
        .map(|el| el.text().trim().to_string())
        .unwrap_or_default()
}

pub(crate) fn compile(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}
