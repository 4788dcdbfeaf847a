//! Route definitions for discussion threads.
//!
//! Threads hang off steps, so these routes are merged at the API root rather
//! than nested under one prefix.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::discussion;
use crate::state::AppState;

/// ```text
/// GET  /steps/{step_id}/threads   -> list_for_step
/// POST /steps/{step_id}/threads   -> create_thread (auth)
/// GET  /threads/{id}              -> get_thread
/// POST /threads/{id}/comments     -> create_comment (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/steps/{step_id}/threads",
            get(discussion::list_for_step).post(discussion::create_thread),
        )
        .route("/threads/{id}", get(discussion::get_thread))
        .route("/threads/{id}/comments", post(discussion::create_comment))
}
