use clap::Parser;
use std::sync::Arc;
use tracing::info;

use prompt_trainer::config::{CliArgs, TrainerConfig};
use prompt_trainer::server;
use prompt_trainer::state::TrainerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_trainer=info,tower_http=info".into()),
        )
        .init();

    let args = CliArgs::parse();
    info!("Starting prompt-trainer v{}", env!("CARGO_PKG_VERSION"));

    let config = TrainerConfig::from_args(args);
    info!("API key configured: {}", config.has_credential());
    info!("Mock delay: {:?}", config.mock_delay);
    let addr = config.listen_addr();

    let state = Arc::new(TrainerState::new(config)?);

    let router = server::build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
