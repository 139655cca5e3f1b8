//! Route configuration.

use axum::Router;

use crate::cors::cors_layer;
use crate::handlers::health_routes;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.app.cors_origins);

    Router::new()
        .nest("/health", health_routes())
        .layer(cors)
        .with_state(state)
}
