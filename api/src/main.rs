use std::sync::Arc;

use anyhow::Result;
use shared::{BackendClient, Config, StrategyPanel};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;

use routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting AiroboTrade landing page...");

    let config = Config::from_env()?;
    let backend = BackendClient::new(&config.backend_url, config.backend_timeout_secs)?;
    info!("Strategy backend: {}", backend.base_url());

    let state = AppState {
        panel: Arc::new(StrategyPanel::new(Arc::new(backend))),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Landing page listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
