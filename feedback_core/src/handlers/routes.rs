//! Route table for the feedback endpoints

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

use super::{feedback, health};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/submit-feedback",
            post(feedback::handle_submit_feedback)
                .options(feedback::handle_preflight)
                .fallback(feedback::handle_method_not_allowed),
        )
        .route("/get-feedback", get(feedback::handle_get_feedback))
        .route("/health", get(health::handle_health))
}
