use std::sync::Arc;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Generation itself is stateless: every request builds its own document.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }
}
