// src/scrape/albums.rs
//
// Upcoming-release listing pages: record parsing plus the two page walks
// (count-bounded and date-bounded). The date walk compares the page's
// display labels as plain strings; there is no calendar arithmetic, so
// "Jan 31" has a next-day label of "Jan 32" which no page ever shows.
// The walk is bounded by PAGE_LIMIT instead of running forever.

use log::debug;

use crate::cache::DocSlot;
use crate::config::{self, PAGE_LIMIT, RELEASES_PER_PAGE};
use crate::dom::Element;
use crate::error::{Error, Result};
use crate::net::{Fetch, HttpFetcher};
use crate::records::{ErrorResponse, Release};
use crate::specs::album as spec;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Canonical display label for a month number, e.g. `1 → "Jan"`.
pub fn month_label(month: u32) -> Result<&'static str> {
    MONTH_LABELS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .ok_or(Error::InvalidMonth(month))
}

/// Map raw listing blocks to releases. Every block must carry all three
/// sub-fields; a missing one means the site markup changed and the whole
/// parse aborts rather than emitting a partial record.
pub fn parse_releases(blocks: &[Element<'_>]) -> Result<Vec<Release>> {
    blocks.iter().map(release_from_block).collect()
}

fn release_from_block(block: &Element<'_>) -> Result<Release> {
    let field = |loc, name| {
        block
            .find(loc)
            .map(|el| el.text().trim().to_string())
            .ok_or(Error::MalformedBlock(name))
    };
    Ok(Release {
        title: field(&spec::BLOCK_TITLE, "albumTitle")?,
        artist: field(&spec::BLOCK_ARTIST, "artistTitle")?,
        release_date: field(&spec::BLOCK_DATE, "type")?,
    })
}

/// Client for the upcoming-releases listing. Holds the page slot so a
/// repeated request for the same page is served without a refetch.
pub struct AlbumClient {
    fetcher: Box<dyn Fetch>,
    slot: DocSlot<()>,
}

impl AlbumClient {
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(fetcher: Box<dyn Fetch>) -> Self {
        Self { fetcher, slot: DocSlot::new() }
    }

    /// One listing page as releases. Pages past PAGE_LIMIT are not served
    /// by the site; the bound is checked before any fetch.
    pub fn upcoming_by_page(&mut self, page: u32) -> Result<Vec<Release>> {
        if page > PAGE_LIMIT {
            return Err(Error::PageOutOfRange(page));
        }
        let url = config::upcoming_url(page);
        let entry = self.slot.get_or_fetch(&url, self.fetcher.as_ref(), |_| ())?;
        let blocks = entry.doc.find_all(&spec::RELEASE_BLOCK);
        parse_releases(&blocks)
    }

    /// The first `total` upcoming releases, walking ceil(total / page size)
    /// pages and truncating the last one. A short page upstream simply
    /// yields fewer records.
    pub fn upcoming_by_count(&mut self, total: usize) -> Result<Vec<Release>> {
        let pages = total.div_ceil(RELEASES_PER_PAGE) as u32;
        debug!("upcoming_by_count({total}): walking {pages} pages");
        let mut out = Vec::with_capacity(total);
        for page in 1..=pages {
            let mut releases = self.upcoming_by_page(page)?;
            let remaining = total - out.len();
            if releases.len() > remaining {
                releases.truncate(remaining);
            }
            out.append(&mut releases);
        }
        Ok(out)
    }

    /// Every release whose date label equals `"<Month> <day>"`. Scans
    /// pages from 1 until a page contains a next-day label; that whole
    /// page is still scanned, since ordering within a page is not
    /// monotonic by date. Stops with `PageOutOfRange` if the next-day
    /// label never shows up within the page limit.
    pub fn upcoming_by_date(&mut self, month: u32, day: u32) -> Result<Vec<Release>> {
        let label = month_label(month)?;
        let target = format!("{label} {day}");
        let next = format!("{label} {}", day + 1);
        let mut out = Vec::new();
        let mut page = 1;
        loop {
            let releases = self.upcoming_by_page(page)?;
            let mut saw_next = false;
            for rel in releases {
                if rel.release_date == target {
                    out.push(rel);
                } else if rel.release_date == next {
                    saw_next = true;
                }
            }
            if saw_next {
                debug!("upcoming_by_date: boundary {next:?} on page {page}");
                return Ok(out);
            }
            page += 1;
        }
    }

    // JSON boundary: page scans never raise past here. Faults become an
    // ErrorResponse record instead of a partial list.

    pub fn upcoming_by_page_json(&mut self, page: u32) -> String {
        match self.upcoming_by_page(page) {
            Ok(albums) => albums_json(&albums),
            Err(_) => error_json(
                "Page Limit Error",
                "The page number requested is out of range.",
            ),
        }
    }

    pub fn upcoming_by_count_json(&mut self, total: usize) -> String {
        match self.upcoming_by_count(total) {
            Ok(albums) => albums_json(&albums),
            Err(e) => error_json("Page Limit Error", &e.to_string()),
        }
    }

    pub fn upcoming_by_date_json(&mut self, month: u32, day: u32) -> String {
        match self.upcoming_by_date(month, day) {
            Ok(albums) => albums_json(&albums),
            Err(e) => error_json("Releases by date Error", &e.to_string()),
        }
    }
}

impl Default for AlbumClient {
    fn default() -> Self {
        Self::new()
    }
}

fn albums_json(albums: &[Release]) -> String {
    serde_json::json!({ "albums": albums }).to_string()
}

fn error_json(error: &str, message: &str) -> String {
    serde_json::json!(ErrorResponse::new(error, message)).to_string()
}
