use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use stamp::{BuildInfo, DEGRADED_MESSAGE, HEALTHY_MESSAGE};
use status_page::{AppState, router};
use tower::ServiceExt;

fn sample_info() -> BuildInfo {
    BuildInfo {
        commit_sha: "9a8b7c6".to_string(),
        run_number: "204".to_string(),
        build_time: "2025-07-14T09:30:00.000Z".to_string(),
        environment: "production".to_string(),
    }
}

fn make_app(base_path: &str) -> Router {
    router(Arc::new(AppState::new(sample_info())), base_path)
}

async fn get(app: &Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, String) {
    let mut req = Request::builder().method("GET").uri(uri);
    for (k, v) in headers {
        req = req.header(*k, *v);
    }
    let resp = app
        .clone()
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

const BROWSER: &[(&str, &str)] = &[
    ("user-agent", "Mozilla/5.0 (X11; Linux x86_64)"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-dest", "empty"),
];

#[tokio::test]
async fn health_is_ok_for_a_full_browser() {
    let app = make_app("");
    let (status, body) = get(&app, "/health", BROWSER).await;

    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["ok"], true);
    assert_eq!(v["message"], HEALTHY_MESSAGE);
    assert_eq!(v.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn health_is_degraded_without_fetch_metadata() {
    let app = make_app("");
    let (status, body) = get(&app, "/health", &[("user-agent", "curl/8.5.0")]).await;

    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["ok"], false);
    assert_eq!(v["message"], DEGRADED_MESSAGE);
}

#[tokio::test]
async fn health_is_degraded_with_no_capabilities() {
    let app = make_app("");
    let (status, body) = get(&app, "/health", &[]).await;

    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["ok"], false);
    assert_eq!(v["message"], DEGRADED_MESSAGE);
}

#[tokio::test]
async fn build_info_is_served_as_camel_case_json() {
    let app = make_app("");
    let (status, body) = get(&app, "/build-info", &[]).await;

    assert_eq!(status, StatusCode::OK);
    let parsed: BuildInfo = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, sample_info());
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["commitSha"], "9a8b7c6");
}

#[tokio::test]
async fn page_binds_build_info_and_health() {
    let app = make_app("");
    let (status, html) = get(&app, "/", BROWSER).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"id="commitSha">9a8b7c6<"#));
    assert!(html.contains(r#"id="runNumber">204<"#));
    assert!(html.contains(r#"id="buildTime">2025-07-14T09:30:00.000Z<"#));
    assert!(html.contains(r#"id="environment">production<"#));
    assert!(html.contains(HEALTHY_MESSAGE));
    assert!(html.contains("#156b2f"));
}

#[tokio::test]
async fn page_shows_degraded_health_for_non_browsers() {
    let app = make_app("");
    let (_, html) = get(&app, "/", &[]).await;

    assert!(html.contains(DEGRADED_MESSAGE));
    assert!(html.contains("#a21a1a"));
}

#[tokio::test]
async fn routes_live_under_base_path() {
    let app = make_app("/site");

    let (status, _) = get(&app, "/site/", BROWSER).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, "/site", BROWSER).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, "/site/health", &[]).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, "/health", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
