use byob_api::{config, database::DatabaseManager, is_production};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("byob_api=info,tower_http=info")),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting BYOB API in {:?} mode", config.environment);
    if is_production!() && config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; token issuance and write routes will fail");
    }

    let pool = DatabaseManager::connect().await?;
    let app = byob_api::app(pool.clone());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("BYOB API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
