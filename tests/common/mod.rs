// tests/common/mod.rs
//
// Shared in-memory fetcher and page fixtures for the integration tests.
// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use aoty_scrape::dom::Document;
use aoty_scrape::{Error, Fetch, Result};

pub type HitLog = Rc<RefCell<Vec<String>>>;

pub struct MapFetch {
    pages: HashMap<String, String>,
    hits: HitLog,
}

impl MapFetch {
    pub fn new(pages: HashMap<String, String>) -> (Box<dyn Fetch>, HitLog) {
        let hits: HitLog = Rc::new(RefCell::new(Vec::new()));
        let fetch = MapFetch { pages, hits: Rc::clone(&hits) };
        (Box::new(fetch), hits)
    }
}

impl Fetch for MapFetch {
    fn fetch_document(&self, url: &str) -> Result<Document> {
        self.hits.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .map(|html| Document::parse(html))
            .ok_or_else(|| Error::Transport(format!("no page at {url}")))
    }
}

/// A complete artist page: top box, all five required discography
/// sections and a top-songs table.
pub fn artist_html(name: &str) -> String {
    format!(
        r#"
        <div class="artistHeadline">{name}</div>
        <div class="artistCriticScore">85</div>
        <div class="artistUserScore">75</div>
        <div class="followCount">1,234</div>
        <div class="artistTopBox info">Formed in 1990</div>
        <h2>Albums</h2>
        <div class="albumRow"><div class="albumTitle">{name} LP1</div></div>
        <div class="albumRow"><div class="albumTitle">{name} LP2</div></div>
        <h2>Mixtapes</h2>
        <div class="albumRow"><div class="albumTitle">{name} Tape</div></div>
        <h2>EPs</h2>
        <div class="albumRow"><div class="albumTitle">{name} EP</div></div>
        <h2>Singles <a>View All</a></h2>
        <div class="albumRow"><div class="albumTitle">{name} Single</div></div>
        <h2>Similar Artists</h2>
        <div class="artistBlock"><div class="name">Friend of {name}</div></div>
        <table><tr><td class="songAlbum"><a>Hit by {name}</a></td></tr></table>
        "#
    )
}

/// One release block on an upcoming listing page.
pub fn release_block(artist: &str, title: &str, date: &str) -> String {
    format!(
        r#"<div class="albumBlock five small">
             <div class="artistTitle">{artist}</div>
             <div class="albumTitle">{title}</div>
             <div class="type">{date}</div>
           </div>"#
    )
}
