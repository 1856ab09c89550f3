//! Data models for the URL shortener application
//!
//! This module defines all the data structures used throughout the application,
//! including the registry record, the derived statistics snapshot, and the
//! request/response models used by the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single shortening record owned by the registry
///
/// Every field except `clicks` is fixed at creation time. `clicks` only ever
/// grows, and only the redirect path bumps it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShortUrl {
    /// Strictly increasing numeric identifier, assigned from the registry counter
    pub id: u64,

    /// Unique short code derived from `id` (e.g., `"abc7"` for id 7)
    ///
    /// This is the key the registry indexes by.
    pub short_code: String,

    /// The original long URL this record redirects to
    pub original_url: String,

    /// Timestamp when this record was created
    pub created_at: DateTime<Utc>,

    /// Number of times this short URL has been followed
    #[serde(default)]
    pub clicks: u64,
}

/// Aggregate statistics, recomputed from the live records on every request
///
/// This is a snapshot, not a stored entity: nothing in the registry caches
/// these numbers, so they can never drift from the records they summarize.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stats {
    /// Count of all records in the registry
    pub total_urls: u64,

    /// Sum of `clicks` across all records
    pub total_clicks: u64,

    /// `total_clicks / total_urls`, or 0 when the registry is empty
    pub average_clicks: f64,
}

/// Request payload for creating a short URL via the JSON API
///
/// # Example
/// ```json
/// {
///   "url": "https://example.com/very/long/url"
/// }
/// ```
#[derive(Deserialize)]
pub struct CreateRequest {
    /// The original URL to be shortened
    pub url: String,
}

/// Response returned after successfully creating a short URL
///
/// # Example
/// ```json
/// {
///   "id": 1,
///   "short_code": "abc1",
///   "short_url": "http://localhost:8080/abc1",
///   "original_url": "https://example.com/very/long/url",
///   "created_at": "2026-08-30T13:40:00Z"
/// }
/// ```
#[derive(Serialize)]
pub struct CreateResponse {
    /// Numeric identifier of the created record
    pub id: u64,

    /// The short code the record is stored under
    pub short_code: String,

    /// The complete shortened URL
    pub short_url: String,

    /// The original URL that was shortened
    pub original_url: String,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

/// Form payload submitted by the web UI's shorten form
#[derive(Deserialize)]
pub struct ShortenForm {
    /// The original URL to be shortened
    pub url: String,
}
