//! HTTP status endpoint for polling a link check.
//!
//! Provides one endpoint:
//! - `/status` - JSON poll response (`LinkCheckStatus` plus report or error)
//!
//! Each request re-reads the task directory, so a client can poll while the
//! external task is still writing stages.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use handlers::status_handler;
pub use types::StatusState;

/// Creates and starts the status server.
pub async fn start_status_server(port: u16, state: StatusState) -> Result<(), anyhow::Error> {
    let app = Router::new()
        .route("/status", get(status_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind status server to port {}: {}", port, e))?;

    log::info!("Status server listening on http://127.0.0.1:{}/status", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Status server error: {}", e))?;

    Ok(())
}
