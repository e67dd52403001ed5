//! API server command handler

use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};

use crate::api::{self, AppState};
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_serve(config: &Config, port: Option<u16>) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let state = Arc::new(AppState::new(store));
    let app = api::router(state, config);

    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {}", e);
        }
    });

    info!("Serving catalog API at http://{}", addr);
    println!("Serving catalog API at http://{addr}");
    println!("Press Ctrl+C to stop.");

    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }

    server_handle.abort();
    info!("Server stopped");
    Ok(())
}
