pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::plan::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/generate-plan", post(handlers::handle_generate_plan))
        .with_state(state)
}
