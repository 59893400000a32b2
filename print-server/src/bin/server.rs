//! Label print server binary.
//!
//! Loads configuration, starts the axum web server and waits for Ctrl+C.

use tracing_subscriber::EnvFilter;

use label_print_server::app::SharedState;
use label_print_server::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting label print server");

    let config = label_print_server::init_foundation();
    let state = SharedState::new(config);

    tracing::info!(port = state.server_port(), "Press Ctrl+C to stop.");
    server::start_server(state).await?;

    tracing::info!("Shutting down...");
    Ok(())
}
