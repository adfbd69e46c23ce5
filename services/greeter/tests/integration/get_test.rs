use axum::body::Body;
use axum::http::{Method, StatusCode};

use crate::helpers::{get, post, request};

#[tokio::test]
async fn should_greet_named_caller() {
    let resp = get("/api/httpget?name=Alice").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "Hello, Alice!");
}

#[tokio::test]
async fn should_greet_any_nonempty_name() {
    for (query, expected) in [
        ("x", "Hello, x!"),
        ("Jean%20Luc", "Hello, Jean Luc!"),
        ("Zo%C3%AB", "Hello, Zoë!"),
        ("a+b", "Hello, a b!"),
        ("%F0%9F%91%8B", "Hello, 👋!"),
    ] {
        let resp = get(&format!("/api/httpget?name={query}")).await;
        assert_eq!(resp.status, StatusCode::OK, "query {query}");
        assert_eq!(resp.body, expected, "query {query}");
    }
}

#[tokio::test]
async fn should_greet_world_without_name() {
    let resp = get("/api/httpget").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "Hello, World!");
}

#[tokio::test]
async fn should_greet_world_with_empty_name() {
    let resp = get("/api/httpget?name=").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "Hello, World!");
}

#[tokio::test]
async fn should_use_first_of_repeated_names() {
    let resp = get("/api/httpget?name=Ann&name=Ben").await;
    assert_eq!(resp.body, "Hello, Ann!");
}

#[tokio::test]
async fn should_ignore_other_params() {
    let resp = get("/api/httpget?lang=fr&name=Chloe").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "Hello, Chloe!");
}

#[tokio::test]
async fn should_respond_with_plain_text() {
    let resp = get("/api/httpget?name=Alice").await;
    let content_type = resp.headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");
}

#[tokio::test]
async fn should_reject_post_with_405() {
    let resp = post("/api/httpget?name=Alice", "").await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.body, "Method not allowed");
}

#[tokio::test]
async fn should_reject_other_methods_with_405() {
    for method in [Method::HEAD, Method::PUT, Method::DELETE, Method::PATCH] {
        let resp = request(method.clone(), "/api/httpget", Body::empty()).await;
        assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED, "method {method}");
    }
}

#[tokio::test]
async fn should_attach_request_id() {
    let resp = get("/api/httpget").await;
    assert!(resp.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn should_echo_caller_request_id() {
    let request = axum::http::Request::builder()
        .uri("/api/httpget")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let resp = crate::helpers::send(request).await;
    assert_eq!(resp.headers["x-request-id"], "abc-123");
}
