// src/scrape/mod.rs
pub mod albums;
pub mod artist;
pub mod user;

pub use albums::{month_label, parse_releases, AlbumClient};
pub use artist::{classify, top_songs, ArtistClient, ArtistIndex};
pub use user::UserClient;
