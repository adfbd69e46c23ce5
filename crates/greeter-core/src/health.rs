use axum::{Router, http::StatusCode, routing::get};

pub const LIVENESS_PATH: &str = "/healthz";
pub const READINESS_PATH: &str = "/readyz";

/// Liveness: the process is up and the router answers.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness. Greeter services hold no backing resources, so ready means
/// the listener is up.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// Probe routes to `merge` into a service router, whatever its state type.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(LIVENESS_PATH, get(healthz))
        .route(READINESS_PATH, get(readyz))
}
