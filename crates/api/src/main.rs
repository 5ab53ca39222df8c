use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use skuvault_api::app;
use skuvault_infra::AppConfig;

#[tokio::main]
async fn main() {
    skuvault_observability::init();

    if let Err(e) = run().await {
        tracing::error!("fatal startup error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().context("invalid configuration")?;
    tracing::info!(store = ?config.store, port = config.port, "initializing");

    let services = Arc::new(app::services::build_services(&config).await?);
    let app = app::build_app(services);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
}
