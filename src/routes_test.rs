use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;
use yulita_client::site::{DASHBOARD_TITLE, NOT_FOUND_TITLE};

use super::*;

fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).unwrap()
}

async fn get_page(path: &str) -> (StatusCode, String) {
    let router = app(&test_config()).unwrap();
    let resp = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// The opening `<a ...>` tag that carries `href`.
fn link_tag<'a>(html: &'a str, href: &str) -> &'a str {
    let needle = format!("href=\"{href}\"");
    let at = html.find(&needle).unwrap();
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let (status, body) = get_page("/tidak-ada").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains(NOT_FOUND_TITLE));
    assert!(body.contains("not-found__code"));
}

#[tokio::test]
async fn dashboard_tab_route_renders_with_active_tab() {
    let (status, body) = get_page("/dashboard/alamat").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(DASHBOARD_TITLE));
    assert!(link_tag(&body, "/dashboard/alamat").contains("aria-current=\"page\""));
    assert!(!link_tag(&body, "/dashboard/pesanan").contains("aria-current"));
}
