use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level failures. Each renders as a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid JSON in request body")]
    InvalidJson,
    #[error("Please provide both 'name' and 'age' in the request body.")]
    MissingFields,
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl GreeterError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InvalidJson => "INVALID_JSON",
            Self::MissingFields => "MISSING_FIELDS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson | Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GreeterError {
    fn into_response(self) -> Response {
        // 4xx are already visible through the trace layer's response event.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = self.kind(), "internal error");
        }
        (self.status(), self.to_string()).into_response()
    }
}

/// Failures that stop the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to load config: {0}")]
    Config(#[from] envy::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
