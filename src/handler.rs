//! HTTP request handlers for the URL shortener
//!
//! This module implements the presentation layer on top of the registry:
//! - The web UI (home page, create form, confirmation and analytics pages)
//! - The redirect path that makes short links work
//! - A small JSON API mirroring the same operations
//!
//! URL validation happens here, not in the registry: by the time the
//! registry sees a URL it is assumed well-formed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};

use crate::model::{CreateRequest, CreateResponse, ShortUrl, ShortenForm};
use crate::registry::AppState;
use crate::template;

/// Builds the externally visible base URL from the environment
///
/// Uses the same `URL`/`PORT` variables the server reads at startup,
/// defaulting to `http://localhost:8080`.
fn service_base_url() -> String {
    let base_url = std::env::var("URL").unwrap_or_else(|_| "http://localhost".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    format!("{}:{}", base_url, port)
}

/// Checks the one thing the presentation layer owns: a usable URL
///
/// Returns a user-facing message when the URL is empty or lacks an
/// http/https scheme prefix. Anything beyond the prefix check is out of
/// scope, the registry stores whatever passes here.
fn validate_url(url: &str) -> Result<(), &'static str> {
    if url.is_empty() {
        return Err("URL parameter is required");
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://");
    }
    Ok(())
}

/// Serves the home page with the shorten form
///
/// # Response
///
/// - **200 OK** - HTML home page
pub async fn home() -> impl IntoResponse {
    Html(template::home_page())
}

/// Serves the standalone create form page with curl examples
///
/// # Response
///
/// - **200 OK** - HTML create page
pub async fn create_form() -> impl IntoResponse {
    Html(template::create_page(&service_base_url()))
}

/// Shortens a URL submitted through the web form
///
/// This handler:
/// 1. Parses the `url` form field
/// 2. Validates it (non-empty, http/https prefix)
/// 3. Asks the registry for a new record
/// 4. Renders the confirmation page with the short link
///
/// # Response
///
/// - **200 OK** - HTML confirmation page with the new short URL
/// - **400 Bad Request** - HTML error page when validation fails
pub async fn create_from_form(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> impl IntoResponse {
    if let Err(message) = validate_url(&form.url) {
        return (StatusCode::BAD_REQUEST, Html(template::error_page(message))).into_response();
    }

    let record = state.registry.create(&form.url);
    tracing::info!(code = %record.short_code, url = %record.original_url, "short url created");

    Html(template::success_page(&service_base_url(), &record)).into_response()
}

/// Redirects a short code to its original destination
///
/// This is the core functionality that makes the URL shortener work.
/// When a visitor hits `/{code}`, this handler:
/// 1. Resolves the code through the registry
/// 2. Records the click
/// 3. Sends a 307 Temporary Redirect to the original URL
///
/// # Response
///
/// - **307 Temporary Redirect** - Redirects to the original URL
/// - **404 Not Found** - HTML error page when the code is unknown
///
/// # Note
///
/// Uses 307 instead of 301 so browsers keep coming back through the
/// service and the click counter stays accurate.
pub async fn redirect_url(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let record = match state.registry.get(&code) {
        Ok(record) => record,
        Err(err) => {
            return (
                StatusCode::NOT_FOUND,
                Html(template::error_page(&err.to_string())),
            )
                .into_response();
        }
    };

    // Click accounting is a separate step from the lookup. Records are
    // never deleted, so a code that just resolved cannot vanish here.
    if let Err(err) = state.registry.increment_clicks(&code) {
        tracing::warn!(%code, "click not recorded: {err}");
    }

    tracing::debug!(%code, target = %record.original_url, "redirecting");
    Redirect::temporary(&record.original_url).into_response()
}

/// Serves the analytics dashboard
///
/// Pulls a snapshot of all records plus the recomputed statistics and
/// renders them as a summary and a table sorted by id (the registry itself
/// promises no ordering).
///
/// # Response
///
/// - **200 OK** - HTML dashboard, with an empty state when nothing exists yet
pub async fn analytics(State(state): State<AppState>) -> impl IntoResponse {
    let mut urls = state.registry.get_all();
    urls.sort_by_key(|record| record.id);

    let stats = state.registry.stats();

    Html(template::analytics_page(&stats, &urls))
}

/// Creates a short URL via the JSON API
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/very/long/url"
/// }
/// ```
///
/// # Response
///
/// - **201 Created** - JSON body with the new record and full short URL
/// - **400 Bad Request** - JSON error when validation fails
pub async fn create_short_url(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> impl IntoResponse {
    if let Err(message) = validate_url(&payload.url) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": message })),
        )
            .into_response();
    }

    let record = state.registry.create(&payload.url);
    tracing::info!(code = %record.short_code, url = %record.original_url, "short url created");

    let response = CreateResponse {
        id: record.id,
        short_url: format!("{}/{}", service_base_url(), record.short_code),
        short_code: record.short_code,
        original_url: record.original_url,
        created_at: record.created_at,
    };

    (StatusCode::CREATED, Json(response)).into_response()
}

/// Lists every shortened URL as JSON, sorted by id
///
/// # Response
///
/// ```json
/// {
///   "total": 2,
///   "data": [...]
/// }
/// ```
pub async fn list_urls(State(state): State<AppState>) -> impl IntoResponse {
    let mut urls: Vec<ShortUrl> = state.registry.get_all();
    urls.sort_by_key(|record| record.id);

    Json(serde_json::json!({
        "total": urls.len(),
        "data": urls
    }))
}

/// Returns the aggregate statistics snapshot as JSON
///
/// # Response
///
/// ```json
/// {
///   "total_urls": 2,
///   "total_clicks": 6,
///   "average_clicks": 3.0
/// }
/// ```
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry.stats())
}
