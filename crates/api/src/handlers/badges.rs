//! Handlers for the `/badges` catalog.

use axum::extract::State;
use axum::Json;
use skillkart_db::models::badge::Badge;

use crate::engine::badges;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/badges
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Badge>>>> {
    let all = badges::get_all_badges(&state.pool).await?;
    Ok(Json(DataResponse { data: all }))
}
