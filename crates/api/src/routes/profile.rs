//! Route definitions for `/me`.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET /        -> get_me
/// PUT /        -> update_me
/// GET /xp      -> get_my_xp
/// GET /badges  -> get_my_badges
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get_me).put(profile::update_me))
        .route("/xp", get(profile::get_my_xp))
        .route("/badges", get(profile::get_my_badges))
}
