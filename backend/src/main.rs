use anyhow::Context;
use engine_backend::{api, config::ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    let addr = config.bind_addr;
    info!(
        %addr,
        default_depth = config.default_depth,
        max_time_secs = config.max_time_secs,
        "Starting chess engine backend"
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("API listening on {}", addr);

    axum::serve(listener, api::router(config))
        .await
        .context("Server error")?;

    Ok(())
}
