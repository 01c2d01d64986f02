// src/lib.rs
//
// Scraping client for albumoftheyear.org. Blocking, synchronous, one
// in-flight page at a time; see `client::Aoty` for the method surface.

pub mod cache;
pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod net;
pub mod records;
pub mod scrape;
pub mod specs;

pub use client::Aoty;
pub use error::{Error, Result};
pub use net::{Fetch, HttpFetcher};
pub use records::{ErrorResponse, Release};
