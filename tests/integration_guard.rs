mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use coachden::router::init_router;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    init_router(common::test_state())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_auth(uri: &str, auth: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .unwrap()
}

fn with_json_body(method: &str, uri: &str, auth: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn missing_header_is_rejected_with_uniform_message() {
    let response = app()
        .oneshot(get("/api/selections/coach@example.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": true, "message": "unauthorized access" }));
}

#[tokio::test]
async fn non_bearer_header_is_rejected() {
    let response = app()
        .oneshot(get_with_auth(
            "/api/selections/coach@example.com",
            "Token abc123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "unauthorized access");
}

#[tokio::test]
async fn empty_bearer_token_is_rejected() {
    let response = app()
        .oneshot(get_with_auth("/api/selections/coach@example.com", "Bearer "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let response = app()
        .oneshot(get_with_auth(
            "/api/selections/coach@example.com",
            "Bearer not.a.token",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "unauthorized access");
}

#[tokio::test]
async fn expired_token_is_rejected_like_any_invalid_token() {
    let response = app()
        .oneshot(get_with_auth(
            "/api/selections/coach@example.com",
            &common::expired_bearer_for("coach@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": true, "message": "unauthorized access" }));
}

#[tokio::test]
async fn self_match_rejects_foreign_email() {
    let response = app()
        .oneshot(get_with_auth(
            "/api/selections/other@example.com",
            &common::bearer_for("coach@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": true, "message": "forbidden access" }));
}

#[tokio::test]
async fn payment_history_is_self_scoped() {
    let response = app()
        .oneshot(get_with_auth(
            "/api/payments/history/other@example.com",
            &common::bearer_for("coach@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn user_listing_requires_own_email_in_path() {
    // Regardless of stored role, asking with someone else's email is 403.
    let response = app()
        .oneshot(get_with_auth(
            "/api/users/other@example.com",
            &common::bearer_for("coach@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], "forbidden access");
}

#[tokio::test]
async fn role_probe_for_foreign_email_answers_no_match() {
    let response = app()
        .oneshot(get_with_auth(
            "/api/users/other@example.com/role/admin",
            &common::bearer_for("coach@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "role": "admin", "matches": false }));
}

#[tokio::test]
async fn role_probe_rejects_unknown_role_name() {
    let response = app()
        .oneshot(get_with_auth(
            "/api/users/coach@example.com/role/superadmin",
            &common::bearer_for("coach@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn promotion_requires_acting_admins_own_email() {
    let response = app()
        .oneshot(with_json_body(
            "PATCH",
            "/api/users/promote/00000000-0000-0000-0000-000000000001/admin",
            &common::bearer_for("coach@example.com"),
            json!({ "email": "other@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn promotion_to_base_role_is_rejected() {
    let response = app()
        .oneshot(with_json_body(
            "PATCH",
            "/api/users/promote/00000000-0000-0000-0000-000000000001/user",
            &common::bearer_for("coach@example.com"),
            json!({ "email": "coach@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn enrollment_is_self_scoped() {
    let response = app()
        .oneshot(with_json_body(
            "PATCH",
            "/api/classes/00000000-0000-0000-0000-000000000001/enroll",
            &common::bearer_for("coach@example.com"),
            json!({ "email": "other@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn payment_record_is_self_scoped() {
    let response = app()
        .oneshot(with_json_body(
            "PUT",
            "/api/payments",
            &common::bearer_for("coach@example.com"),
            json!({
                "class_id": "00000000-0000-0000-0000-000000000001",
                "email": "other@example.com",
                "transaction_id": "tx_1",
                "amount": 49.5,
                "class_name": "Goalkeeping Basics"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn selection_cancellation_is_self_scoped() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/selections/cancel/00000000-0000-0000-0000-000000000001?email=other@example.com")
                .header(header::AUTHORIZATION, common::bearer_for("coach@example.com"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn root_banner_is_public() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
