// src/specs/user.rs
//! Locator table for user profile pages (`/user/<name>` and sub-pages).
//!
//! The four profile counters hang off per-user links, so their locators
//! are built per request: find the anchor by href, then the stat inside it.

use super::Locator;

/// Counter value inside a profile section link.
pub const PROFILE_STAT: Locator = Locator::new(".profileStat");

/// "About me" free text. Absent on most profiles; empty-string default.
pub const ABOUT: Locator = Locator::new(".aboutUser");

/// One row of the 11-bucket rating distribution chart.
pub const DIST_ROW: Locator = Locator::new(".distRow");

/// Album entries on ratings / liked pages.
pub const ALBUM_BLOCK: Locator = Locator::new(".albumBlock");
pub const BLOCK_ARTIST: Locator = Locator::new(".artistTitle");
pub const BLOCK_TITLE: Locator = Locator::new(".albumTitle");

// Profile sub-paths that are their own pages (distinct cache keys).
pub const PERFECT_SCORES_PATH: &str = "/ratings/perfect/";
pub const LIKED_ALBUMS_PATH: &str = "/liked/albums/";

/// Anchor for one profile section, e.g. `section_link("bob", "ratings")`
/// → the link wrapping the ratings counter.
pub fn section_link(user: &str, section: &str) -> Locator {
    Locator::owned(format!(r#"[href="/user/{user}/{section}/"]"#))
}
