//! Router tests for the auth routes and the bearer middleware.
//!
//! Drives the axum `Router` end-to-end against the in-memory repository.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
    middleware::from_fn_with_state,
    routing::get,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{
    AuthConfig, AuthMiddlewareState, AuthUser, InMemoryUserRepository, TokenService,
    auth_router_generic, require_auth,
};
use kernel::id::UserId;

const SECRET: &str = "router-test-secret";

fn app(repo: InMemoryUserRepository) -> Router {
    auth_router_generic(repo, AuthConfig::new(SECRET))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-auth-token", token)
        .body(Body::empty())
        .unwrap()
}

async fn register(app: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json("/api/users", json!({ "name": name, "email": email, "password": password })),
    )
    .await
}

#[tokio::test]
async fn register_then_load_current_user() {
    let app = app(InMemoryUserRepository::new());

    let (status, body) = register(&app, "A", "a@a.com", "123456").await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, user) = send(&app, get_with_token("/api/auth", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "A");
    assert_eq!(user["email"], "a@a.com");
    assert!(user["avatar"].as_str().unwrap().contains("gravatar.com/avatar/"));
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_email_is_conflict_and_creates_nothing() {
    let repo = InMemoryUserRepository::new();
    let app = app(repo.clone());

    let (status, _) = register(&app, "A", "a@a.com", "123456").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = register(&app, "B", "A@A.com", "abcdef").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "User already exists");
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn registration_reports_every_invalid_field() {
    let app = app(InMemoryUserRepository::new());

    let (status, body) = send(&app, post_json("/api/users", json!({ "email": "nope" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "password"]);
}

#[tokio::test]
async fn sign_in_returns_token() {
    let app = app(InMemoryUserRepository::new());
    register(&app, "A", "a@a.com", "123456").await;

    let (status, body) = send(
        &app,
        post_json("/api/auth", json!({ "email": "a@a.com", "password": "123456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().unwrap();
    let (status, _) = send(&app, get_with_token("/api/auth", token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let app = app(InMemoryUserRepository::new());
    register(&app, "A", "a@a.com", "123456").await;

    let (wrong_pw_status, wrong_pw) = send(
        &app,
        post_json("/api/auth", json!({ "email": "a@a.com", "password": "654321" })),
    )
    .await;
    let (unknown_status, unknown) = send(
        &app,
        post_json("/api/auth", json!({ "email": "b@b.com", "password": "123456" })),
    )
    .await;

    assert_eq!(wrong_pw_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_pw, unknown);
    assert_eq!(wrong_pw["detail"], "Invalid credentials");
}

#[tokio::test]
async fn sign_in_requires_password() {
    let app = app(InMemoryUserRepository::new());

    let (status, body) = send(&app, post_json("/api/auth", json!({ "email": "a@a.com" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "Password is required");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = app(InMemoryUserRepository::new());

    let request = Request::builder().uri("/api/auth").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "No token, authorization denied");
}

#[tokio::test]
async fn foreign_token_is_unauthorized() {
    let app = app(InMemoryUserRepository::new());
    let foreign = TokenService::new(&AuthConfig::new("someone-else"))
        .issue(&UserId::new())
        .unwrap();

    let (status, body) = send(&app, get_with_token("/api/auth", &foreign)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Token is not valid");
}

#[tokio::test]
async fn bearer_header_is_accepted() {
    let app = app(InMemoryUserRepository::new());
    let (_, body) = register(&app, "A", "a@a.com", "123456").await;
    let token = body["token"].as_str().unwrap();

    let request = Request::builder()
        .uri("/api/auth")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn valid_token_for_deleted_user_is_not_found() {
    let app = app(InMemoryUserRepository::new());
    let token = TokenService::new(&AuthConfig::new(SECRET))
        .issue(&UserId::new())
        .unwrap();

    let (status, _) = send(&app, get_with_token("/api/auth", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn middleware_never_reaches_handler_without_identity() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let config = AuthConfig::new(SECRET);
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let app = Router::new()
        .route(
            "/guarded",
            get(move |AuthUser(user_id): AuthUser| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    user_id.to_string()
                }
            }),
        )
        .layer(from_fn_with_state(AuthMiddlewareState::new(&config), require_auth));

    for token in ["", "garbage", "a.b.c"] {
        let request = Request::builder()
            .uri("/guarded")
            .header("x-auth-token", token)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    let user_id = UserId::new();
    let token = TokenService::new(&config).issue(&user_id).unwrap();
    let response = app
        .clone()
        .oneshot(get_with_token("/guarded", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, user_id.to_string().as_bytes());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
