pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::interview::handlers as interview;
use crate::state::AppState;

/// Versioned prefix for the interview API.
pub const API_V1_PREFIX: &str = "/api/v1";
/// Unversioned prefix served for clients of the original service.
pub const LEGACY_API_PREFIX: &str = "/api";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest(API_V1_PREFIX, api_routes())
        .nest(LEGACY_API_PREFIX, api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Interview API
        .route("/roles", get(interview::handle_list_roles))
        .route("/start", post(interview::handle_start))
        .route("/reply", post(interview::handle_reply))
        .route(
            "/sessions/:user_id",
            get(interview::handle_get_session).delete(interview::handle_delete_session),
        )
        // Feedback API
        .route("/feedback", post(feedback::handle_feedback))
}
