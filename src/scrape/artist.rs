// src/scrape/artist.rs
//
// Artist pages. The discography is classified in one linear scan over the
// page's heading and block elements: an <h2> opens a category, blocks
// fall under whichever category is currently open. Heading text is the
// site's verbatim (fused) text, so the singles section is literally
// "SinglesView All". Unrecognized categories are retained but never read.

use std::collections::BTreeMap;

use log::debug;

use crate::cache::{DocSlot, Entry};
use crate::config;
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::net::{Fetch, HttpFetcher};
use crate::specs::artist as spec;
use crate::specs::Locator;

/// Everything derived eagerly from one artist document at fetch time.
pub struct ArtistIndex {
    pub discography: BTreeMap<String, Vec<String>>,
    pub top_songs: Vec<String>,
}

impl ArtistIndex {
    pub fn scan(doc: &Document) -> Self {
        let index = Self { discography: classify(doc), top_songs: top_songs(doc) };
        debug!(
            "artist scan: {} categories, {} top songs",
            index.discography.len(),
            index.top_songs.len()
        );
        index
    }
}

/// Partition the page into named categories. Blocks with neither
/// recognized shape are skipped silently, as are blocks before the first
/// heading (no category is open yet).
pub fn classify(doc: &Document) -> BTreeMap<String, Vec<String>> {
    let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for el in doc.find_all(&spec::HEADING_OR_BLOCK) {
        if el.tag() == "h2" {
            let name = el.stripped_text();
            categories.entry(name.clone()).or_default();
            current = Some(name);
        } else if let Some(cat) = &current {
            let shape: &Locator = if cat.as_str() == spec::CAT_SIMILAR {
                &spec::SIMILAR_NAME
            } else {
                &spec::ALBUM_TITLE
            };
            if let Some(field) = el.find(shape) {
                if let Some(items) = categories.get_mut(cat) {
                    items.push(field.text().trim().to_string());
                }
            }
        }
    }
    categories
}

/// Titles from the community "top songs" table: every row holding a song
/// cell with a link. Rows without that shape are skipped.
pub fn top_songs(doc: &Document) -> Vec<String> {
    doc.find_all(&spec::SONG_ROW)
        .iter()
        .filter_map(|row| {
            row.find(&spec::SONG_CELL)
                .and_then(|cell| cell.find(&spec::SONG_LINK))
                .map(|link| link.text().trim().to_string())
        })
        .collect()
}

/// Client for artist pages. One cached document at a time; switching
/// artists replaces the document and its derived index wholesale.
pub struct ArtistClient {
    fetcher: Box<dyn Fetch>,
    slot: DocSlot<ArtistIndex>,
}

impl ArtistClient {
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(fetcher: Box<dyn Fetch>) -> Self {
        Self { fetcher, slot: DocSlot::new() }
    }

    fn page(&mut self, artist: &str) -> Result<&Entry<ArtistIndex>> {
        let url = config::artist_url(artist);
        self.slot
            .get_or_fetch(&url, self.fetcher.as_ref(), ArtistIndex::scan)
    }

    fn field(&mut self, artist: &str, loc: &Locator) -> Result<String> {
        let entry = self.page(artist)?;
        dom::class_text(&entry.doc, loc)
    }

    /// Titles under the given section heading. `MissingCategory` when the
    /// scan produced no such heading; exact text match, nothing inferred.
    fn category(&mut self, artist: &str, name: &str) -> Result<Vec<String>> {
        let entry = self.page(artist)?;
        entry
            .derived
            .discography
            .get(name)
            .cloned()
            .ok_or_else(|| Error::MissingCategory(name.to_string()))
    }

    pub fn albums(&mut self, artist: &str) -> Result<Vec<String>> {
        self.category(artist, spec::CAT_ALBUMS)
    }

    pub fn mixtapes(&mut self, artist: &str) -> Result<Vec<String>> {
        self.category(artist, spec::CAT_MIXTAPES)
    }

    pub fn eps(&mut self, artist: &str) -> Result<Vec<String>> {
        self.category(artist, spec::CAT_EPS)
    }

    pub fn singles(&mut self, artist: &str) -> Result<Vec<String>> {
        self.category(artist, spec::CAT_SINGLES)
    }

    pub fn similar_artists(&mut self, artist: &str) -> Result<Vec<String>> {
        self.category(artist, spec::CAT_SIMILAR)
    }

    pub fn top_songs(&mut self, artist: &str) -> Result<Vec<String>> {
        Ok(self.page(artist)?.derived.top_songs.clone())
    }

    pub fn name(&mut self, artist: &str) -> Result<String> {
        self.field(artist, &spec::HEADLINE)
    }

    pub fn critic_score(&mut self, artist: &str) -> Result<String> {
        self.field(artist, &spec::CRITIC_SCORE)
    }

    pub fn user_score(&mut self, artist: &str) -> Result<String> {
        self.field(artist, &spec::USER_SCORE)
    }

    /// Mean of critic and user score, e.g. (85 + 75) / 2 = 80.0.
    pub fn total_score(&mut self, artist: &str) -> Result<f64> {
        let critic = parse_score(&self.critic_score(artist)?)?;
        let user = parse_score(&self.user_score(artist)?)?;
        Ok((critic + user) as f64 / 2.0)
    }

    pub fn follower_count(&mut self, artist: &str) -> Result<String> {
        self.field(artist, &spec::FOLLOW_COUNT)
    }

    pub fn details(&mut self, artist: &str) -> Result<String> {
        self.field(artist, &spec::DETAILS)
    }

    // JSON twins. Faults propagate; only the album page scans have a
    // catch-all boundary.

    pub fn albums_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "albums": self.albums(artist)? }).to_string())
    }

    pub fn mixtapes_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "mixtapes": self.mixtapes(artist)? }).to_string())
    }

    pub fn eps_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "eps": self.eps(artist)? }).to_string())
    }

    pub fn singles_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "singles": self.singles(artist)? }).to_string())
    }

    pub fn similar_artists_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "similar artists": self.similar_artists(artist)? }).to_string())
    }

    pub fn top_songs_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "top songs": self.top_songs(artist)? }).to_string())
    }

    pub fn name_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "name": self.name(artist)? }).to_string())
    }

    pub fn critic_score_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "critic score": self.critic_score(artist)? }).to_string())
    }

    pub fn user_score_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "user score": self.user_score(artist)? }).to_string())
    }

    pub fn total_score_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "total score": self.total_score(artist)? }).to_string())
    }

    pub fn follower_count_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "follower count": self.follower_count(artist)? }).to_string())
    }

    pub fn details_json(&mut self, artist: &str) -> Result<String> {
        Ok(serde_json::json!({ "artist details": self.details(artist)? }).to_string())
    }
}

impl Default for ArtistClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_score(text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidNumeral(text.to_string()))
}
