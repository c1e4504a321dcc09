//! Web server for the settlement explorer.
//!
//! Serves the lecture slides, the settlement activity with its map and plan
//! form, and the resources page. Every request is answered from static
//! content and the submitted form; nothing is stored between requests.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::map::{figure, render_svg, SvgOptions};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// The territory map, rendered once at start-up.
    pub map_svg: Arc<str>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let map_svg = render_svg(figure(), &SvgOptions::default());
        tracing::debug!("Rendered territory map ({} bytes)", map_svg.len());
        Self {
            settings: Arc::new(settings.clone()),
            map_svg: Arc::from(map_svg),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn setup_test_app() -> axum::Router {
        create_router(AppState::new(&Settings::default()))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const VALID_FORM: &str = "student_name=Jane&settlement_name=New+Hope\
        &region=Grand+River+Valley&latitude=43.0&longitude=-85.5\
        &water_access=on&fertile_soil=on&challenges=Swamps&resources=Timber\
        &vision=Mill+town&strategy=Clear+land";

    #[tokio::test]
    async fn test_root_redirects_to_first_slide() {
        let app = setup_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/slides/1"
        );
    }

    #[tokio::test]
    async fn test_slide_page() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/slides/4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("1825: Everything Changes"));
        assert!(html.contains(r#"href="/slides/3""#));
        assert!(html.contains(r#"href="/slides/5""#));
    }

    #[tokio::test]
    async fn test_first_and_last_slide_disable_navigation() {
        let app = setup_test_app();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/slides/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains(r#"<span class="btn disabled" aria-disabled="true">⬅️ Previous Slide</span>"#));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/slides/10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains(r#"<span class="btn disabled" aria-disabled="true">Next Slide ➡️</span>"#));
    }

    #[tokio::test]
    async fn test_slide_out_of_range() {
        for uri in ["/slides/0", "/slides/11", "/slides/abc"] {
            let response = setup_test_app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
            let html = body_string(response).await;
            assert!(html.contains("Not Found"));
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_activity_page_empty_form() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/activity")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<svg"));
        assert!(html.contains("Select a region..."));
        assert!(html.contains("Water access (river/lake)"));
        assert!(html.contains(r#"value="42.5""#));
        assert!(html.contains(r#"value="-84.5""#));
        assert!(!html.contains("Download Your Plan"));
        assert!(!html.contains("Please fill in your name"));
    }

    #[tokio::test]
    async fn test_activity_submit_success() {
        let response = setup_test_app()
            .oneshot(post_form("/activity", VALID_FORM))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Settlement plan submitted for New Hope!"));
        assert!(html.contains("<strong>Pioneer:</strong> Jane"));
        assert!(html.contains("<li>Water access</li>"));
        assert!(html.contains("<li>Fertile soil</li>"));
        assert!(html.contains("Download Your Plan"));
        assert!(html.contains(r#"action="/activity/report""#));
    }

    #[tokio::test]
    async fn test_activity_submit_missing_fields() {
        let response = setup_test_app()
            .oneshot(post_form(
                "/activity",
                "student_name=&settlement_name=New+Hope&region=Select+a+region...&vision=Keep+me",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Please fill in your name, settlement name, and choose a region!"));
        assert!(html.contains("Missing: your name, region"));
        assert!(!html.contains("Download Your Plan"));
        // Input is preserved
        assert!(html.contains(r#"value="New Hope""#));
        assert!(html.contains(">Keep me</textarea>"));
    }

    #[tokio::test]
    async fn test_report_download() {
        let response = setup_test_app()
            .oneshot(post_form("/activity/report", VALID_FORM))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap_or(""));
        assert_eq!(content_type, Some("text/plain; charset=utf-8"));
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment;"));
        assert!(disposition.contains(r#"filename="settlement_plan_New_Hope.txt""#));

        let body = body_string(response).await;
        assert!(body.starts_with("MICHIGAN PIONEER SETTLEMENT PLAN\n"));
        assert!(body.contains("Location: 43.0°N, -85.5°W"));
        assert!(body.contains("PRIORITIES:\n- Water access\n- Fertile soil\n"));
    }

    #[tokio::test]
    async fn test_report_download_rejected() {
        let response = setup_test_app()
            .oneshot(post_form("/activity/report", "student_name=Jane"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
        let body = body_string(response).await;
        assert!(body.starts_with("Please fill in your name, settlement name, and choose a region!"));
    }

    #[tokio::test]
    async fn test_resources_page() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/resources")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Wayne County Community College District Library"));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[tokio::test]
    async fn test_api_map() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/map")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["figure"]["settlements"].as_array().unwrap().len(), 5);
        assert_eq!(json["legend"].as_array().unwrap().len(), 8);
        assert_eq!(json["legend"][0]["id"], "layer-michigan-territory");
    }

    #[tokio::test]
    async fn test_api_resources() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/resources")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json.as_array().unwrap().len() > 40);
    }

    #[tokio::test]
    async fn test_static_css() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap_or(""));
        assert!(content_type.unwrap_or("").contains("css"));
    }

    #[tokio::test]
    async fn test_static_js() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/static/map.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
