// src/scrape/user.rs
//
// User profile pages. The four counters hang off per-user section links,
// so each lookup is href-anchor first, stat inside it second. A user's
// profile, perfect-scores and liked-albums pages are distinct URLs and
// therefore distinct cache keys; hopping between them refetches.

use crate::cache::{DocSlot, Entry};
use crate::config;
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::net::{Fetch, HttpFetcher};
use crate::specs::user as spec;

/// Score buckets of the rating distribution chart, top to bottom.
pub const DIST_BUCKETS: [&str; 11] = [
    "100", "90-99", "80-89", "70-79", "60-69", "50-59",
    "40-49", "30-39", "20-29", "10-19", "0-9",
];

pub struct UserClient {
    fetcher: Box<dyn Fetch>,
    slot: DocSlot<()>,
}

impl UserClient {
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(fetcher: Box<dyn Fetch>) -> Self {
        Self { fetcher, slot: DocSlot::new() }
    }

    fn page(&mut self, url: &str) -> Result<&Entry<()>> {
        self.slot.get_or_fetch(url, self.fetcher.as_ref(), |_| ())
    }

    fn profile_page(&mut self, user: &str) -> Result<&Document> {
        let url = config::user_url(user);
        Ok(&self.page(&url)?.doc)
    }

    /// Counter for one profile section: the anchor linking to the section
    /// holds the stat. Both lookups propagate `NotFound`.
    fn profile_stat(&mut self, user: &str, section: &str) -> Result<String> {
        let link_loc = spec::section_link(user, section);
        let doc = self.profile_page(user)?;
        let link = doc
            .find(&link_loc)
            .ok_or_else(|| Error::NotFound(link_loc.css().to_string()))?;
        let stat = link
            .find(&spec::PROFILE_STAT)
            .ok_or_else(|| Error::NotFound(spec::PROFILE_STAT.css().to_string()))?;
        Ok(stat.text().trim().to_string())
    }

    pub fn rating_count(&mut self, user: &str) -> Result<String> {
        self.profile_stat(user, "ratings")
    }

    pub fn review_count(&mut self, user: &str) -> Result<String> {
        self.profile_stat(user, "reviews")
    }

    pub fn list_count(&mut self, user: &str) -> Result<String> {
        self.profile_stat(user, "lists")
    }

    pub fn follower_count(&mut self, user: &str) -> Result<String> {
        self.profile_stat(user, "followers")
    }

    /// "About me" text; most profiles have none, which is an empty string
    /// rather than an error.
    pub fn about(&mut self, user: &str) -> Result<String> {
        let doc = self.profile_page(user)?;
        Ok(dom::class_text_or_empty(doc, &spec::ABOUT))
    }

    /// Counts per score bucket, top bucket first. Blank chart rows read
    /// as "0"; fewer than eleven rows means the chart is missing.
    pub fn rating_distribution(&mut self, user: &str) -> Result<Vec<String>> {
        let doc = self.profile_page(user)?;
        let rows = doc.find_all(&spec::DIST_ROW);
        let mut out = Vec::with_capacity(DIST_BUCKETS.len());
        for i in 0..DIST_BUCKETS.len() {
            let row = rows
                .get(i)
                .ok_or_else(|| Error::NotFound(spec::DIST_ROW.css().to_string()))?;
            let text = row.text();
            let count = text.split_whitespace().last().unwrap_or("0");
            out.push(count.to_string());
        }
        Ok(out)
    }

    /// Text of the most recent rating block; empty when the user has none.
    pub fn ratings(&mut self, user: &str) -> Result<String> {
        let doc = self.profile_page(user)?;
        Ok(dom::class_text_or_empty(doc, &spec::ALBUM_BLOCK))
    }

    /// Text of the first perfect-score block; empty when there is none.
    pub fn perfect_scores(&mut self, user: &str) -> Result<String> {
        let url = config::user_sub_url(user, spec::PERFECT_SCORES_PATH);
        let doc = &self.page(&url)?.doc;
        Ok(dom::class_text_or_empty(doc, &spec::ALBUM_BLOCK))
    }

    /// Liked albums as "Artist: Album" strings. Album-only entries keep
    /// the bare title; entries without a title are skipped.
    pub fn liked_music(&mut self, user: &str) -> Result<Vec<String>> {
        let url = config::user_sub_url(user, spec::LIKED_ALBUMS_PATH);
        let doc = &self.page(&url)?.doc;
        let mut out = Vec::new();
        for entry in doc.find_all(&spec::ALBUM_BLOCK) {
            let artist = entry
                .find(&spec::BLOCK_ARTIST)
                .map(|el| el.text().trim().to_string())
                .unwrap_or_default();
            let album = entry
                .find(&spec::BLOCK_TITLE)
                .map(|el| el.text().trim().to_string())
                .unwrap_or_default();
            if album.is_empty() {
                continue;
            }
            if artist.is_empty() {
                out.push(album);
            } else {
                out.push(format!("{artist}: {album}"));
            }
        }
        Ok(out)
    }

    // JSON twins.

    pub fn rating_count_json(&mut self, user: &str) -> Result<String> {
        Ok(serde_json::json!({ "ratings": self.rating_count(user)? }).to_string())
    }

    pub fn review_count_json(&mut self, user: &str) -> Result<String> {
        Ok(serde_json::json!({ "reviews": self.review_count(user)? }).to_string())
    }

    pub fn list_count_json(&mut self, user: &str) -> Result<String> {
        Ok(serde_json::json!({ "lists": self.list_count(user)? }).to_string())
    }

    pub fn follower_count_json(&mut self, user: &str) -> Result<String> {
        Ok(serde_json::json!({ "followers": self.follower_count(user)? }).to_string())
    }

    pub fn about_json(&mut self, user: &str) -> Result<String> {
        Ok(serde_json::json!({ "about_user": self.about(user)? }).to_string())
    }

    pub fn rating_distribution_json(&mut self, user: &str) -> Result<String> {
        let counts = self.rating_distribution(user)?;
        let map: serde_json::Map<String, serde_json::Value> = DIST_BUCKETS
            .iter()
            .zip(counts)
            .map(|(bucket, count)| (bucket.to_string(), count.into()))
            .collect();
        Ok(serde_json::Value::Object(map).to_string())
    }

    pub fn ratings_json(&mut self, user: &str) -> Result<String> {
        Ok(serde_json::json!({ "ratings": self.ratings(user)? }).to_string())
    }

    pub fn perfect_scores_json(&mut self, user: &str) -> Result<String> {
        Ok(serde_json::json!({ "perfect scores": self.perfect_scores(user)? }).to_string())
    }

    pub fn liked_music_json(&mut self, user: &str) -> Result<String> {
        Ok(serde_json::json!({ "liked music": self.liked_music(user)? }).to_string())
    }
}

impl Default for UserClient {
    fn default() -> Self {
        Self::new()
    }
}
