//! Application state for dependency injection.

use std::sync::Arc;

use settings::Settings;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create new app state.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}
