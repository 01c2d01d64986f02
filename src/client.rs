// src/client.rs
//
// One facade over the three per-entity clients. Plain composition: each
// collaborator owns its fetcher and its single cache slot, and the
// facade only delegates. Construct it once and reuse it; a fresh facade
// means a cold cache.

use crate::error::Result;
use crate::records::Release;
use crate::scrape::{AlbumClient, ArtistClient, UserClient};

pub struct Aoty {
    pub albums: AlbumClient,
    pub artists: ArtistClient,
    pub users: UserClient,
}

impl Aoty {
    pub fn new() -> Self {
        Self {
            albums: AlbumClient::new(),
            artists: ArtistClient::new(),
            users: UserClient::new(),
        }
    }

    // --- upcoming releases ---

    pub fn upcoming_releases_by_page(&mut self, page: u32) -> Result<Vec<Release>> {
        self.albums.upcoming_by_page(page)
    }

    pub fn upcoming_releases_by_count(&mut self, total: usize) -> Result<Vec<Release>> {
        self.albums.upcoming_by_count(total)
    }

    pub fn upcoming_releases_by_date(&mut self, month: u32, day: u32) -> Result<Vec<Release>> {
        self.albums.upcoming_by_date(month, day)
    }

    pub fn upcoming_releases_by_page_json(&mut self, page: u32) -> String {
        self.albums.upcoming_by_page_json(page)
    }

    pub fn upcoming_releases_by_count_json(&mut self, total: usize) -> String {
        self.albums.upcoming_by_count_json(total)
    }

    pub fn upcoming_releases_by_date_json(&mut self, month: u32, day: u32) -> String {
        self.albums.upcoming_by_date_json(month, day)
    }

    // --- artists ---

    pub fn artist_albums(&mut self, artist: &str) -> Result<Vec<String>> {
        self.artists.albums(artist)
    }

    pub fn artist_mixtapes(&mut self, artist: &str) -> Result<Vec<String>> {
        self.artists.mixtapes(artist)
    }

    pub fn artist_eps(&mut self, artist: &str) -> Result<Vec<String>> {
        self.artists.eps(artist)
    }

    pub fn artist_singles(&mut self, artist: &str) -> Result<Vec<String>> {
        self.artists.singles(artist)
    }

    pub fn similar_artists(&mut self, artist: &str) -> Result<Vec<String>> {
        self.artists.similar_artists(artist)
    }

    pub fn artist_top_songs(&mut self, artist: &str) -> Result<Vec<String>> {
        self.artists.top_songs(artist)
    }

    pub fn artist_name(&mut self, artist: &str) -> Result<String> {
        self.artists.name(artist)
    }

    pub fn artist_critic_score(&mut self, artist: &str) -> Result<String> {
        self.artists.critic_score(artist)
    }

    pub fn artist_user_score(&mut self, artist: &str) -> Result<String> {
        self.artists.user_score(artist)
    }

    pub fn artist_total_score(&mut self, artist: &str) -> Result<f64> {
        self.artists.total_score(artist)
    }

    pub fn artist_follower_count(&mut self, artist: &str) -> Result<String> {
        self.artists.follower_count(artist)
    }

    pub fn artist_details(&mut self, artist: &str) -> Result<String> {
        self.artists.details(artist)
    }

    pub fn artist_albums_json(&mut self, artist: &str) -> Result<String> {
        self.artists.albums_json(artist)
    }

    pub fn artist_mixtapes_json(&mut self, artist: &str) -> Result<String> {
        self.artists.mixtapes_json(artist)
    }

    pub fn artist_eps_json(&mut self, artist: &str) -> Result<String> {
        self.artists.eps_json(artist)
    }

    pub fn artist_singles_json(&mut self, artist: &str) -> Result<String> {
        self.artists.singles_json(artist)
    }

    pub fn similar_artists_json(&mut self, artist: &str) -> Result<String> {
        self.artists.similar_artists_json(artist)
    }

    pub fn artist_top_songs_json(&mut self, artist: &str) -> Result<String> {
        self.artists.top_songs_json(artist)
    }

    pub fn artist_name_json(&mut self, artist: &str) -> Result<String> {
        self.artists.name_json(artist)
    }

    pub fn artist_critic_score_json(&mut self, artist: &str) -> Result<String> {
        self.artists.critic_score_json(artist)
    }

    pub fn artist_user_score_json(&mut self, artist: &str) -> Result<String> {
        self.artists.user_score_json(artist)
    }

    pub fn artist_total_score_json(&mut self, artist: &str) -> Result<String> {
        self.artists.total_score_json(artist)
    }

    pub fn artist_follower_count_json(&mut self, artist: &str) -> Result<String> {
        self.artists.follower_count_json(artist)
    }

    pub fn artist_details_json(&mut self, artist: &str) -> Result<String> {
        self.artists.details_json(artist)
    }

    // --- users ---

    pub fn user_rating_count(&mut self, user: &str) -> Result<String> {
        self.users.rating_count(user)
    }

    pub fn user_review_count(&mut self, user: &str) -> Result<String> {
        self.users.review_count(user)
    }

    pub fn user_list_count(&mut self, user: &str) -> Result<String> {
        self.users.list_count(user)
    }

    pub fn user_follower_count(&mut self, user: &str) -> Result<String> {
        self.users.follower_count(user)
    }

    pub fn user_about(&mut self, user: &str) -> Result<String> {
        self.users.about(user)
    }

    pub fn user_rating_distribution(&mut self, user: &str) -> Result<Vec<String>> {
        self.users.rating_distribution(user)
    }

    pub fn user_ratings(&mut self, user: &str) -> Result<String> {
        self.users.ratings(user)
    }

    pub fn user_perfect_scores(&mut self, user: &str) -> Result<String> {
        self.users.perfect_scores(user)
    }

    pub fn user_liked_music(&mut self, user: &str) -> Result<Vec<String>> {
        self.users.liked_music(user)
    }

    pub fn user_rating_count_json(&mut self, user: &str) -> Result<String> {
        self.users.rating_count_json(user)
    }

    pub fn user_review_count_json(&mut self, user: &str) -> Result<String> {
        self.users.review_count_json(user)
    }

    pub fn user_list_count_json(&mut self, user: &str) -> Result<String> {
        self.users.list_count_json(user)
    }

    pub fn user_follower_count_json(&mut self, user: &str) -> Result<String> {
        self.users.follower_count_json(user)
    }

    pub fn user_about_json(&mut self, user: &str) -> Result<String> {
        self.users.about_json(user)
    }

    pub fn user_rating_distribution_json(&mut self, user: &str) -> Result<String> {
        self.users.rating_distribution_json(user)
    }

    pub fn user_ratings_json(&mut self, user: &str) -> Result<String> {
        self.users.ratings_json(user)
    }

    pub fn user_perfect_scores_json(&mut self, user: &str) -> Result<String> {
        self.users.perfect_scores_json(user)
    }

    pub fn user_liked_music_json(&mut self, user: &str) -> Result<String> {
        self.users.liked_music_json(user)
    }
}

impl Default for Aoty {
    fn default() -> Self {
        Self::new()
    }
}
