use std::process::ExitCode;

use greeter_core::config::Config;
use greeter_core::tracing::init_tracing;

use greeter::config::GreeterConfig;
use greeter::error::StartupError;
use greeter::server::serve;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "greeter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = GreeterConfig::from_env();
    // Tracing comes up first so a config error is still reported.
    init_tracing(
        config
            .as_ref()
            .map(|c| c.log_format)
            .unwrap_or_default(),
    );
    serve(&config?).await
}
