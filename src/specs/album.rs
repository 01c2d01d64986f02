// src/specs/album.rs
//! Locator table for the upcoming-releases listing pages (`/upcoming/<n>/`).
//!
//! One page is a flat run of release blocks; every block must carry all
//! three sub-fields or the parse aborts (see `scrape::albums::parse_releases`).

use super::Locator;

/// One release entry on a listing page.
pub const RELEASE_BLOCK: Locator = Locator::new("div.albumBlock.five.small");

// Sub-fields inside a release block.
pub const BLOCK_ARTIST: Locator = Locator::new("div.artistTitle");
pub const BLOCK_TITLE: Locator = Locator::new("div.albumTitle");
pub const BLOCK_DATE: Locator = Locator::new("div.type");
