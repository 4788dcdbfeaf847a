pub mod auth;
pub mod badges;
pub mod discussion;
pub mod enrollment;
pub mod health;
pub mod profile;
pub mod roadmap;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
/// /auth/refresh                           refresh (public)
/// /auth/logout                            logout (auth)
///
/// /me                                     get, update own profile (auth)
/// /me/xp                                  total XP and history (auth)
/// /me/badges                              badges with earned state (auth)
///
/// /roadmaps                               list (public), create (admin)
/// /roadmaps/{id}                          roadmap with steps (public)
/// /roadmaps/{id}/start                    start enrollment (learner)
///
/// /enrollments                            list own (learner)
/// /enrollments/{id}/progress              per-step status (learner)
/// /enrollments/{id}/steps/{step_id}       update step status (learner)
///
/// /badges                                 catalog (public)
///
/// /steps/{step_id}/threads                list (public), create (auth)
/// /threads/{id}                           thread with comments (public)
/// /threads/{id}/comments                  reply (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/me", profile::router())
        .nest("/roadmaps", roadmap::router())
        .nest("/enrollments", enrollment::router())
        .nest("/badges", badges::router())
        .merge(discussion::router())
}
