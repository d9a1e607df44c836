//! Integration tests for the health probe and cross-cutting HTTP behaviour
//! (request IDs, CORS, unknown routes).

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

/// With a live database the probe reports `ok` and a healthy db.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_ok(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

/// Routes that don't exist fall through to 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_route_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/no/such/route").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Every response carries a UUID `x-request-id` header.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_id_header_present(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header must be set")
        .to_str()
        .unwrap();
    assert_eq!(id.len(), 36, "expected a hyphenated UUID, got: {id}");
}

/// A CORS preflight from a configured origin is allowed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cors_preflight_allows_configured_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/gifts")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("allow-origin header must be set"),
        "http://localhost:5173"
    );
    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .expect("allow-methods header must be set")
        .to_str()
        .unwrap();
    assert!(methods.contains("GET"), "got: {methods}");
}
