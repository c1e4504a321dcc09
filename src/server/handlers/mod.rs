//! HTTP request handlers for the web server.

mod activity;
mod api;
mod helpers;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use activity::{download_report, show_activity, submit_activity};
pub use api::{api_map, api_resources};
pub use pages::{index, not_found, resources, show_slide};
pub use static_files::{serve_css, serve_map_js};
