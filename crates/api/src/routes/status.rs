use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// GET / -- plaintext liveness string.
async fn status() -> &'static str {
    "Backend is running (images stored in the database)"
}

/// Mount the root status route (intended for root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(status))
}
