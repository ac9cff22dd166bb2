use std::sync::Arc;

use tracing::info;

use stash_api::{AppState, ServerConfig, Staging};
use stash_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stash_server=debug,stash_api=debug,stash_db=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let db_config = DbConfig::from_env();
    let server_config = ServerConfig::from_env();
    info!(
        host = %db_config.host,
        user = %db_config.user,
        database = %db_config.database,
        "Database settings"
    );

    // Init staging and the persistence gateway
    let staging = Staging::new(server_config.upload_dir.clone()).await?;
    let db = Database::new(db_config);
    let state = AppState::new(Arc::new(db), staging);

    let app = stash_api::router(state, server_config.max_body_bytes);

    info!("Web server listening on {}", server_config.listen);
    let listener = tokio::net::TcpListener::bind(server_config.listen).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable ({}); waiting for Ctrl+C", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
