//! HTTP gateway library.
//!
//! Serves the backend directly when the binary is run as a server: CORS
//! policy and bind address come from [`Settings`].

pub mod cors;
pub mod handlers;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use settings::Settings;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server until it fails.
pub async fn run_server(
    settings: Arc<Settings>,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(settings);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
