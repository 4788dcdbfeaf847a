//! Role gates layered over [`AuthUser`].
//!
//! A missing or bad token is a 401 from [`AuthUser`]; a valid token with the
//! wrong role is a 403 from the gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use skillkart_core::error::CoreError;
use skillkart_core::roles::{ROLE_ADMIN, ROLE_LEARNER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn require_role(
    parts: &mut Parts,
    state: &AppState,
    role: &str,
    message: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if !user.has_role(role) {
        tracing::debug!(user_id = user.user_id, role = %user.role, required = role, "Role check failed");
        return Err(AppError::Core(CoreError::Forbidden(message.to_string())));
    }
    Ok(user)
}

/// Admits only the `admin` role (roadmap authoring).
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, ROLE_ADMIN, "Admin role required")
            .await
            .map(RequireAdmin)
    }
}

/// Admits only the `learner` role (enrollments, progress, XP, badges).
pub struct RequireLearner(pub AuthUser);

impl FromRequestParts<AppState> for RequireLearner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, ROLE_LEARNER, "Learner role required")
            .await
            .map(RequireLearner)
    }
}

/// Admits any authenticated account.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_request_parts(parts, state)
            .await
            .map(RequireAuth)
    }
}
