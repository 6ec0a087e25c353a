use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod support;

use support::{body_string, full_clock_catalog, test_app, three_oclock_catalog};

#[tokio::test]
async fn landing_page_loads_redirector() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("/static/pkg/bnuuy_time_frontend.js"));
    assert!(body.contains(r#"href="/Australia/Sydney""#));
}

#[tokio::test]
async fn time_route_renders_matching_bun() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/15:00").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Bun 3-12 says that it is"));
    assert!(body.contains("3:00 PM"));
    assert!(body.contains("/static/buns/three.jpg"));
    assert!(!body.contains("bnuuy_time_frontend.js"));
}

#[tokio::test]
async fn time_route_accepts_twelve_hour_clock() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/3:05%20AM").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("3:05 AM"));
}

#[tokio::test]
async fn time_route_rejects_unparsable_time() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/teatime").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn time_route_reports_missing_bun() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/7:40").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("No matching buns"));
}

#[tokio::test]
async fn time_zone_route_renders_current_time() {
    let app = test_app(full_clock_catalog());

    for zone in ["/Australia/Sydney", "/America/New_York", "/Asia/Kolkata"] {
        let response = app.get(zone).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", zone);
        assert!(body_string(response).await.contains("says that it is"));
    }
}

#[tokio::test]
async fn single_segment_zone_renders_current_time() {
    let app = test_app(full_clock_catalog());
    let response = app.get("/UTC").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("says that it is"));
}

#[tokio::test]
async fn time_zone_route_supports_three_segment_zones() {
    let app = test_app(full_clock_catalog());
    let response = app.get("/America/Argentina/Buenos_Aires").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn time_zone_route_ignores_trailing_slash() {
    let app = test_app(full_clock_catalog());
    let response = app.get("/America/New_York/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("says that it is"));
}

#[tokio::test]
async fn time_zone_route_rejects_unknown_zone() {
    let app = test_app(full_clock_catalog());
    let response = app.get("/Mars/Olympus_Mons").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("Unknown time zone Mars/Olympus_Mons"));
}

#[tokio::test]
async fn bun_route_renders_named_bun() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/buns/three.jpg").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Bun 3-12 says that it is"));
    assert!(body.contains("hoom on Reddit"));
}

#[tokio::test]
async fn bun_route_reports_unknown_file() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/buns/missing.jpg").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("No buns with filename missing.jpg"));
}

#[tokio::test]
async fn static_files_are_served() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/static/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "body { margin: 0; }");
}

#[tokio::test]
async fn invalid_catalog_is_an_internal_error() {
    let app = test_app(serde_json::json!([{ "filename": "x.jpg" }]));
    let response = app.get("/15:00").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = test_app(three_oclock_catalog());
    let response = app.get("/").await;

    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn responses_echo_client_request_id() {
    let app = test_app(three_oclock_catalog());
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "client-req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "client-req-123");
}
