//! In-memory URL registry
//!
//! This module owns all shortened-URL records and the identifier counter.
//! It is the only stateful component in the application: handlers receive a
//! shared handle through [`AppState`] and call into it, nothing else may
//! touch the records.
//!
//! All state lives behind a single mutex, so every operation is serialized:
//! `create` can never hand out the same id twice, `increment_clicks` is an
//! in-place read-modify-write that cannot lose updates under concurrent
//! requests, and `get_all`/`stats` always observe a consistent snapshot.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use thiserror::Error;

use crate::model::{ShortUrl, Stats};

/// Fixed prefix every short code starts with; the rest is the decimal id
pub const SHORT_CODE_PREFIX: &str = "abc";

/// Errors originating in the registry
///
/// The registry has exactly one failure mode: a lookup for a short code it
/// has never issued. `create` cannot fail (input validation is the caller's
/// job) and nothing here touches I/O.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No record exists for the requested short code
    #[error("short code '{0}' not found")]
    NotFound(String),
}

/// Mutable state guarded by the registry mutex
///
/// Keeping the map and the counter under one lock is what makes
/// `create` atomic: the id is read, the record inserted, and the counter
/// bumped without any other caller interleaving.
struct RegistryInner {
    /// Sole index: short code -> record
    urls: HashMap<String, ShortUrl>,

    /// Next id to hand out, starts at 1 and is never reused
    next_id: u64,
}

/// The URL registry: records, identifier counter, and statistics
///
/// Construct one with [`UrlRegistry::new`] and share it via `Arc`. A fresh
/// registry is empty and starts counting ids from 1; there is no
/// persistence, so a restart clears everything.
pub struct UrlRegistry {
    inner: Mutex<RegistryInner>,
}

impl UrlRegistry {
    /// Creates a new, empty registry
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                urls: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        // None of the operations can panic while holding the lock,
        // so poisoning would indicate a bug elsewhere.
        self.inner.lock().expect("registry mutex poisoned")
    }

    /// Shortens a URL, returning the freshly created record
    ///
    /// Assigns the next id, derives the short code from it, and stores the
    /// record with a zero click count. Every call produces a new record:
    /// shortening the same URL twice intentionally yields two distinct
    /// codes, there is no deduplication.
    ///
    /// The caller is expected to have validated `original_url` already
    /// (non-empty, http/https prefix); the registry stores it as-is.
    pub fn create(&self, original_url: &str) -> ShortUrl {
        let mut inner = self.lock();

        let id = inner.next_id;
        let short_code = format!("{}{}", SHORT_CODE_PREFIX, id);

        let record = ShortUrl {
            id,
            short_code: short_code.clone(),
            original_url: original_url.to_string(),
            created_at: Utc::now(),
            clicks: 0,
        };

        inner.urls.insert(short_code, record.clone());
        inner.next_id += 1;

        record
    }

    /// Looks up a record by its short code
    ///
    /// Pure lookup: the click count is not touched here, recording a click
    /// is a separate explicit step ([`UrlRegistry::increment_clicks`]).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no record exists for `short_code`.
    pub fn get(&self, short_code: &str) -> Result<ShortUrl, RegistryError> {
        self.lock()
            .urls
            .get(short_code)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(short_code.to_string()))
    }

    /// Records one click against a short code
    ///
    /// Mutates the stored record in place while holding the registry lock,
    /// so N concurrent calls on the same code always end with the counter
    /// exactly N higher.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when the code does not exist;
    /// no counter is changed in that case.
    pub fn increment_clicks(&self, short_code: &str) -> Result<(), RegistryError> {
        let mut inner = self.lock();
        match inner.urls.get_mut(short_code) {
            Some(record) => {
                record.clicks += 1;
                Ok(())
            }
            None => Err(RegistryError::NotFound(short_code.to_string())),
        }
    }

    /// Returns a snapshot of every stored record
    ///
    /// Order is unspecified; callers that need a stable order sort by `id`
    /// or `created_at` themselves. The returned records are clones, later
    /// registry mutations do not show up in a snapshot already handed out.
    pub fn get_all(&self) -> Vec<ShortUrl> {
        self.lock().urls.values().cloned().collect()
    }

    /// Computes aggregate statistics by scanning all current records
    ///
    /// `average_clicks` is reported as 0 for an empty registry rather than
    /// dividing by zero.
    pub fn stats(&self) -> Stats {
        let inner = self.lock();

        let total_urls = inner.urls.len() as u64;
        let total_clicks: u64 = inner.urls.values().map(|record| record.clicks).sum();

        let average_clicks = if total_urls > 0 {
            total_clicks as f64 / total_urls as f64
        } else {
            0.0
        };

        Stats {
            total_urls,
            total_clicks,
            average_clicks,
        }
    }
}

impl Default for UrlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state shared across all request handlers
///
/// Wraps the registry in an Arc so the Axum router can hand every handler
/// a cheap clone of the same instance.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe handle to the one registry instance
    pub registry: Arc<UrlRegistry>,
}

impl AppState {
    /// Creates state around a fresh, empty registry
    pub fn new() -> Self {
        Self {
            registry: Arc::new(UrlRegistry::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
