// src/config.rs

// Net config
pub const BASE_URL: &str = "https://www.albumoftheyear.org";
pub const USER_AGENT: &str = "Mozilla/6.0";

// Scrape
pub const RELEASES_PER_PAGE: usize = 60;
/// Pages beyond this index are not served; requesting one is an error,
/// and the date scan uses the same bound to stay finite.
pub const PAGE_LIMIT: u32 = 21;

pub fn upcoming_url(page: u32) -> String {
    if page > 1 {
        format!("{BASE_URL}/upcoming/{page}/")
    } else {
        format!("{BASE_URL}/upcoming/")
    }
}

pub fn artist_url(artist: &str) -> String {
    format!("{BASE_URL}/artist/{artist}/")
}

pub fn user_url(user: &str) -> String {
    format!("{BASE_URL}/user/{user}")
}

pub fn user_sub_url(user: &str, sub_path: &str) -> String {
    format!("{BASE_URL}/user/{user}{sub_path}")
}
