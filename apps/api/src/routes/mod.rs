pub mod status;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::status_handler))
        .route("/chat", post(handlers::handle_chat))
        .route("/analyze", post(handlers::handle_analyze_upload))
        .route("/api/analyze", post(handlers::handle_analyze_match))
        .with_state(state)
}
