use axum::body::Bytes;
use axum::extract::Query;
use axum::http::Method;
use tracing::info;

use crate::error::GreeterError;
use crate::greeting::{DEFAULT_NAME, GreetingRequest, greet};

// ── GET /api/httpget ─────────────────────────────────────────────────────────

/// Query pairs are taken raw so repeated keys resolve to the first value
/// and malformed input never rejects the request.
///
/// Method routing also sends HEAD here, so the method is checked again.
pub async fn http_get(
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, GreeterError> {
    if method != Method::GET {
        return Err(GreeterError::MethodNotAllowed);
    }

    let name = pairs
        .into_iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_owned());

    info!(name = %name, "processing GET request");
    Ok(greet(&name))
}

// ── POST /api/httppost ───────────────────────────────────────────────────────

/// Body is read as raw bytes; no `Content-Type` is required.
pub async fn http_post(body: Bytes) -> Result<String, GreeterError> {
    let request = GreetingRequest::from_json(&body)?;

    info!(name = %request.name, "processing POST request");

    request.validate()?;
    Ok(request.greeting())
}
