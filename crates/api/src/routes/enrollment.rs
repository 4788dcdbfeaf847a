//! Route definitions for the `/enrollments` resource. All routes are learner-only.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET /                       -> list_mine
/// GET /{id}/progress          -> get_progress
/// PUT /{id}/steps/{step_id}   -> update_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollment::list_mine))
        .route("/{id}/progress", get(enrollment::get_progress))
        .route("/{id}/steps/{step_id}", put(enrollment::update_step))
}
