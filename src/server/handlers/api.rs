//! JSON API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::content::resource_links;
use crate::map::{figure, legend};

/// Layer tables of the territory map, plus legend ids.
pub async fn api_map() -> impl IntoResponse {
    let legend: Vec<_> = legend(figure())
        .into_iter()
        .map(|entry| {
            serde_json::json!({
                "id": entry.id,
                "name": entry.name,
            })
        })
        .collect();

    Json(serde_json::json!({
        "figure": figure(),
        "legend": legend,
    }))
}

/// A link listed on the resources page.
#[derive(Debug, Serialize)]
pub struct ResourceLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Every external link on the resources page, in page order.
pub async fn api_resources() -> impl IntoResponse {
    let links: Vec<_> = resource_links()
        .into_iter()
        .map(|(label, url)| ResourceLink { label, url })
        .collect();
    Json(links)
}
