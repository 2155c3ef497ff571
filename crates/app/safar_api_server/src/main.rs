//! Safar API server binary.
//!
//! Serves the Gujarat Travel Planner REST API over the in-memory sample
//! catalog. All state is built once at startup and shared read-only.

use std::sync::Arc;

use clap::Parser;
use safar_api::AppState;
use safar_api::config::ApiConfig;
use safar_core::assistant::AssistantConfig;
use safar_core::catalog::DestinationCatalog;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "safar_api_server", about = "Gujarat Travel Planner API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    bind: String,

    /// Chat assistant provider ("rules").
    #[arg(long, env = "ASSISTANT_PROVIDER", default_value = "rules")]
    assistant_provider: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,safar_api=debug,safar_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: args.bind,
    };

    let catalog = Arc::new(DestinationCatalog::sample()?);
    info!(destinations = catalog.len(), "loaded sample destination catalog");
    info!(provider = %args.assistant_provider, "chat assistant configured");

    let state = AppState {
        catalog,
        assistant: AssistantConfig {
            provider: args.assistant_provider,
        },
    };

    let app = safar_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
