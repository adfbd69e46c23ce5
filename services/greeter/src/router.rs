use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use greeter_core::health::health_routes;
use greeter_core::middleware::{http_trace_layer, propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    greeting::{http_get, http_post},
    method_not_allowed,
};

pub fn build_router() -> Router {
    Router::new()
        // Greetings
        .route("/api/httpget", get(http_get).fallback(method_not_allowed))
        // The whole body is read, whatever its size.
        .route(
            "/api/httppost",
            post(http_post)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .merge(health_routes())
        // Layers run bottom-up: request id is set before tracing sees the request.
        .layer(propagate_request_id_layer())
        .layer(http_trace_layer())
        .layer(request_id_layer())
}
