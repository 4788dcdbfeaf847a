//! Handlers for the caller's own account (`/me`).

use axum::extract::State;
use axum::Json;
use skillkart_core::accounts::{validate_bio, validate_email};
use skillkart_core::error::CoreError;
use skillkart_db::models::badge::UserBadgeStatus;
use skillkart_db::models::user::{UpdateProfile, UserResponse};
use skillkart_db::repositories::{RoleRepo, UserRepo};

use crate::engine::{badges, xp};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/me
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let row = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    let role = RoleRepo::name_of(&state.pool, row.role_id).await?;
    Ok(Json(DataResponse {
        data: UserResponse::from_user(&row, role),
    }))
}

/// PUT /api/v1/me
///
/// Update email and/or bio. Omitted fields are left unchanged.
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    Json(mut input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if let Some(email) = input.email.as_mut() {
        *email = email.trim().to_string();
        validate_email(email)?;
    }
    if let Some(bio) = input.bio.as_deref() {
        validate_bio(bio)?;
    }

    let row = UserRepo::update_profile(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    tracing::info!(user_id = row.id, "Profile updated");

    let role = RoleRepo::name_of(&state.pool, row.role_id).await?;
    Ok(Json(DataResponse {
        data: UserResponse::from_user(&row, role),
    }))
}

/// GET /api/v1/me/xp
///
/// Total XP and the ledger entries behind it.
pub async fn get_my_xp(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<xp::XpSummary>>> {
    let summary = xp::get_xp_summary(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/me/badges
///
/// Every catalog badge with the caller's earned state.
pub async fn get_my_badges(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<UserBadgeStatus>>>> {
    let list = badges::get_user_badges(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: list }))
}
