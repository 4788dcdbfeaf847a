//! Route definitions for the `/roadmaps` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::roadmap;
use crate::state::AppState;

/// Routes mounted at `/roadmaps`.
///
/// ```text
/// GET  /            -> list
/// POST /            -> create (admin)
/// GET  /{id}        -> get_by_id
/// POST /{id}/start  -> start (learner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(roadmap::list).post(roadmap::create))
        .route("/{id}", get(roadmap::get_by_id))
        .route("/{id}/start", post(roadmap::start))
}
