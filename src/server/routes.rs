//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root and /slides open the first slide
        .route("/", get(handlers::index))
        .route("/slides", get(handlers::index))
        .route("/slides/:n", get(handlers::show_slide))
        // Settlement activity and report download
        .route(
            "/activity",
            get(handlers::show_activity).post(handlers::submit_activity),
        )
        .route("/activity/report", post(handlers::download_report))
        .route("/resources", get(handlers::resources))
        // JSON API
        .route("/api/map", get(handlers::api_map))
        .route("/api/resources", get(handlers::api_resources))
        // Static assets (CSS/JS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/map.js", get(handlers::serve_map_js))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
