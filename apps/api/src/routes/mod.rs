pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers as resumes;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalogue
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:name", get(templates::handle_get_template))
        // Resume API
        .route("/api/v1/resumes/validate", post(resumes::handle_validate))
        .route("/api/v1/resumes/render", post(resumes::handle_render))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
