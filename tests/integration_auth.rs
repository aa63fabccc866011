mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use coachden::router::init_router;
use coachden::utils::jwt::verify_token;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    init_router(common::test_state())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn issued_token_round_trips_identity() {
    let response = app()
        .oneshot(post_json(
            "/api/auth/token",
            json!({ "email": "coach@example.com", "name": "Sam Coach" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let token = body["token"].as_str().expect("token field");
    let claims = verify_token(token, &common::test_jwt_config()).unwrap();
    assert_eq!(claims.sub, "coach@example.com");
    assert_eq!(claims.name.as_deref(), Some("Sam Coach"));
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn issuance_rejects_invalid_email() {
    let response = app()
        .oneshot(post_json(
            "/api/auth/token",
            json!({ "email": "not-an-email" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn issuance_rejects_missing_email() {
    let response = app()
        .oneshot(post_json("/api/auth/token", json!({ "name": "No Email" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn issued_token_passes_the_authentication_stage() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/token",
            json!({ "email": "coach@example.com" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();

    // A self-match failure (403) proves the token cleared authentication:
    // an unauthenticated request would have stopped at 401.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/selections/other@example.com")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": true, "message": "forbidden access" }));
}
