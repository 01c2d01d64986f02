// src/specs/artist.rs
//! Locator table for artist pages (`/artist/<name>/`).
//!
//! The discography is not a table: it's a run of `<h2>` section headings
//! with release blocks in between, walked in document order by
//! `scrape::artist`. Heading text is matched verbatim, including the
//! site's fused "SinglesView All" (heading + inline "View All" link).

use super::Locator;

// Scalar fields on the top box.
pub const HEADLINE: Locator = Locator::new(".artistHeadline");
pub const CRITIC_SCORE: Locator = Locator::new(".artistCriticScore");
pub const USER_SCORE: Locator = Locator::new(".artistUserScore");
pub const FOLLOW_COUNT: Locator = Locator::new(".followCount");
pub const DETAILS: Locator = Locator::new(".artistTopBox.info");

// Discography scan: every heading or block element, in document order.
pub const HEADING_OR_BLOCK: Locator = Locator::new("h2, div");
/// "Similar artist" block shape.
pub const SIMILAR_NAME: Locator = Locator::new("div.name");
/// Release block shape (albums, mixtapes, EPs, singles).
pub const ALBUM_TITLE: Locator = Locator::new("div.albumTitle");

// Top songs: table rows with a song cell holding a link.
pub const SONG_ROW: Locator = Locator::new("tr");
pub const SONG_CELL: Locator = Locator::new("td.songAlbum");
pub const SONG_LINK: Locator = Locator::new("a");

// Section headings the accessors depend on. Exact text, not inferred.
pub const CAT_ALBUMS: &str = "Albums";
pub const CAT_MIXTAPES: &str = "Mixtapes";
pub const CAT_EPS: &str = "EPs";
pub const CAT_SINGLES: &str = "SinglesView All";
pub const CAT_SIMILAR: &str = "Similar Artists";
