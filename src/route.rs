//! Route definitions for the URL shortener
//!
//! This module configures all HTTP routes and maps them to their respective
//! handlers. It creates the Axum router with the application state.

use axum::routing::get;
use axum::Router;

use crate::handler::{
    analytics, create_form, create_from_form, create_short_url, get_stats, home, list_urls,
    redirect_url,
};
use crate::registry::AppState;

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// Web UI:
/// - `GET /` - Home page with the shorten form
/// - `GET /create` - Create form page, `POST /create` - form submission
/// - `GET /analytics` - Analytics dashboard
/// - `GET /{code}` - Redirects to the original URL and records the click
///
/// JSON API:
/// - `POST /api/urls` - Creates a new short URL
/// - `GET /api/urls` - Lists all shortened URLs
/// - `GET /api/stats` - Aggregate statistics
///
/// # Arguments
///
/// * `state` - Application state holding the shared registry instance
///
/// # Example Usage
///
/// ```no_run
/// # use linklet::registry::AppState;
/// # use linklet::route::create_app;
/// let state = AppState::new();
/// let app = create_app(state);
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/urls", get(list_urls).post(create_short_url))
        .route("/stats", get(get_stats));

    Router::new()
        .route("/", get(home))
        .route("/create", get(create_form).post(create_from_form))
        .route("/analytics", get(analytics))
        // Mount API routes under /api
        .nest("/api", api_routes)
        // Public redirect endpoint - must come last so named pages win
        .route("/{code}", get(redirect_url))
        // Inject the application state into all handlers
        .with_state(state)
}
