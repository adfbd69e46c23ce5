use tokio::net::TcpListener;
use tracing::info;

use crate::config::GreeterConfig;
use crate::error::StartupError;
use crate::router::build_router;

/// Bind the configured address and serve until the process is killed.
/// Returns only on failure.
pub async fn serve(config: &GreeterConfig) -> Result<(), StartupError> {
    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    info!("greeter listening on {addr}");
    axum::serve(listener, build_router())
        .await
        .map_err(StartupError::Serve)
}
