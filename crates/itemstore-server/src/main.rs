//! Binary entrypoint for the itemstore HTTP server.
//!
//! Reads configuration from environment variables:
//! - `ITEMSTORE_PORT`: Server listen port (default: "8080")

use std::process::ExitCode;

use itemstore_server::config::Config;
use itemstore_server::router::build_router;
use itemstore_server::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = build_router(AppState::new());

    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("itemstore server running on {}", addr);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server terminated");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
