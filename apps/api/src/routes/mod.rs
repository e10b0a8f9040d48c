pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route(
            "/api/v1/interviews/start",
            post(handlers::handle_start_interview),
        )
        .route(
            "/api/v1/interviews/:id/next",
            get(handlers::handle_next_question),
        )
        .route(
            "/api/v1/interviews/:id/answers",
            post(handlers::handle_submit_answer),
        )
        .route(
            "/api/v1/interviews/:id/results",
            get(handlers::handle_results),
        )
        .with_state(state)
}
