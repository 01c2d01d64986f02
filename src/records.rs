// src/records.rs
//
// Plain records the scrapers produce. Field order is the JSON key order.

use serde::{Deserialize, Serialize};

/// One upcoming release as listed on the site.
///
/// `release_date` is the page's display label ("Jan 1"), not a calendar
/// date. The date scan compares these labels as plain strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub title: String,
    pub artist: String,
    pub release_date: String,
}

/// Structured failure returned (not raised) from the page-scan JSON
/// entry points, so batch operations never panic past their boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self { error: error.into(), message: message.into() }
    }
}
