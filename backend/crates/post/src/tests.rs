//! Router tests for `/api/posts`.
//!
//! Users are registered through the real auth router so tokens and author
//! snapshots come from the same path production uses.

use auth::{AuthConfig, AuthMiddlewareState, InMemoryUserRepository, auth_router_generic};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{InMemoryPostRepository, post_router_generic};

const SECRET: &str = "post-router-secret";

fn app() -> Router {
    let users = InMemoryUserRepository::new();
    let config = AuthConfig::new(SECRET);
    let guard = AuthMiddlewareState::new(&config);

    Router::new()
        .merge(auth_router_generic(users.clone(), config))
        .nest(
            "/api/posts",
            post_router_generic(InMemoryPostRepository::new(), users, guard),
        )
}

async fn call(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-auth-token", token);
    }
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

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

async fn sign_up(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = call(
        app,
        "POST",
        "/api/users",
        None,
        Some(json!({ "name": name, "email": email, "password": "123456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

async fn create_post(app: &Router, token: &str, text: &str) -> Value {
    let (status, body) = call(app, "POST", "/api/posts", Some(token), Some(json!({ "text": text }))).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn every_route_requires_a_token() {
    let app = app();
    let (status, _) = call(&app, "GET", "/api/posts", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app, "POST", "/api/posts", None, Some(json!({ "text": "x" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_copies_author_and_lists_newest_first() {
    let app = app();
    let token = sign_up(&app, "Alice", "alice@example.com").await;

    let first = create_post(&app, &token, "  first  ").await;
    assert_eq!(first["text"], "first");
    assert_eq!(first["name"], "Alice");
    assert!(first["avatar"].as_str().unwrap().contains("gravatar"));
    assert_eq!(first["likes"], json!([]));

    create_post(&app, &token, "second").await;

    let (status, list) = call(&app, "GET", "/api/posts", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<&str> = list.as_array().unwrap().iter().map(|p| p["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["second", "first"]);

    let id = first["_id"].as_str().unwrap();
    let (status, fetched) = call(&app, "GET", &format!("/api/posts/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["_id"], first["_id"]);
}

#[tokio::test]
async fn blank_text_is_rejected() {
    let app = app();
    let token = sign_up(&app, "Alice", "alice@example.com").await;

    let (status, body) = call(&app, "POST", "/api/posts", Some(&token), Some(json!({ "text": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "text");
    assert_eq!(body["errors"][0]["msg"], "Text is required");
}

#[tokio::test]
async fn unknown_or_malformed_id_is_not_found() {
    let app = app();
    let token = sign_up(&app, "Alice", "alice@example.com").await;

    let (status, body) = call(&app, "GET", "/api/posts/not-an-id", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "This post is not available");

    let missing = uuid::Uuid::new_v4();
    let (status, _) = call(&app, "GET", &format!("/api/posts/{missing}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn only_the_author_deletes_a_post() {
    let app = app();
    let alice = sign_up(&app, "Alice", "alice@example.com").await;
    let bob = sign_up(&app, "Bob", "bob@example.com").await;
    let post = create_post(&app, &alice, "mine").await;
    let uri = format!("/api/posts/{}", post["_id"].as_str().unwrap());

    let (status, body) = call(&app, "DELETE", &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["detail"], "User not authorized");

    let (status, _) = call(&app, "GET", &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "DELETE", &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Post removed successfully");

    let (status, _) = call(&app, "DELETE", &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn like_and_unlike() {
    let app = app();
    let alice = sign_up(&app, "Alice", "alice@example.com").await;
    let bob = sign_up(&app, "Bob", "bob@example.com").await;
    let post = create_post(&app, &alice, "likeable").await;
    let id = post["_id"].as_str().unwrap();

    let (status, likes) = call(&app, "PUT", &format!("/api/posts/like/{id}"), Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(likes.as_array().unwrap().len(), 1);

    let (status, body) = call(&app, "PUT", &format!("/api/posts/like/{id}"), Some(&bob), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Post already liked");

    let (_, fetched) = call(&app, "GET", &format!("/api/posts/{id}"), Some(&bob), None).await;
    assert_eq!(fetched["likes"].as_array().unwrap().len(), 1);

    let (status, _) = call(&app, "PUT", &format!("/api/posts/unlike/{id}"), Some(&alice), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, likes) = call(&app, "PUT", &format!("/api/posts/unlike/{id}"), Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(likes, json!([]));
}

#[tokio::test]
async fn comments_are_removed_by_id_and_only_by_their_author() {
    let app = app();
    let alice = sign_up(&app, "Alice", "alice@example.com").await;
    let bob = sign_up(&app, "Bob", "bob@example.com").await;
    let post = create_post(&app, &alice, "discuss").await;
    let id = post["_id"].as_str().unwrap();
    let comment_uri = format!("/api/posts/comment/{id}");

    let (status, _) = call(&app, "PUT", &comment_uri, Some(&bob), Some(json!({ "text": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    call(&app, "PUT", &comment_uri, Some(&bob), Some(json!({ "text": "one" }))).await;
    let (status, comments) = call(&app, "PUT", &comment_uri, Some(&bob), Some(json!({ "text": "two" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments[0]["text"], "two");
    assert_eq!(comments[0]["name"], "Bob");

    // Remove the older of two comments by the same author
    let older = comments[1]["_id"].as_str().unwrap();
    let remove_uri = format!("/api/posts/comment/{id}/{older}");

    let (status, _) = call(&app, "DELETE", &remove_uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, comments) = call(&app, "DELETE", &remove_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<&str> = comments.as_array().unwrap().iter().map(|c| c["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["two"]);

    let (status, body) = call(&app, "DELETE", &remove_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Comment does not exist");
}
