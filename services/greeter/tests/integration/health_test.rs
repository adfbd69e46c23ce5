use axum::http::StatusCode;

use crate::helpers::get;

#[tokio::test]
async fn healthz_returns_200() {
    assert_eq!(get("/healthz").await.status, StatusCode::OK);
}

#[tokio::test]
async fn readyz_returns_200() {
    assert_eq!(get("/readyz").await.status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_returns_404() {
    assert_eq!(get("/api/unknown").await.status, StatusCode::NOT_FOUND);
}
