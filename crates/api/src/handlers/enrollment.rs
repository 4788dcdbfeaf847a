//! Handlers for the learner's `/enrollments` and step progress.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use skillkart_core::progress::ProgressStatus;
use skillkart_core::types::DbId;
use skillkart_db::models::enrollment::EnrollmentOverview;

use crate::engine::enrollment;
use crate::engine::progress::{self, EnrollmentProgress, ProgressUpdate};
use crate::error::AppResult;
use crate::middleware::rbac::RequireLearner;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /enrollments/{id}/steps/{step_id}`.
///
/// `status` is kept as a string so an unknown value is a 400 validation
/// error rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub status: String,
}

/// GET /api/v1/enrollments
pub async fn list_mine(
    State(state): State<AppState>,
    RequireLearner(learner): RequireLearner,
) -> AppResult<Json<DataResponse<Vec<EnrollmentOverview>>>> {
    let items = enrollment::list_enrollments(&state.pool, learner.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/enrollments/{id}/progress
pub async fn get_progress(
    State(state): State<AppState>,
    RequireLearner(learner): RequireLearner,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EnrollmentProgress>>> {
    let view = progress::get_enrollment_progress(&state.pool, learner.user_id, id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/enrollments/{id}/steps/{step_id}
pub async fn update_step(
    State(state): State<AppState>,
    RequireLearner(learner): RequireLearner,
    Path((id, step_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProgressRequest>,
) -> AppResult<Json<ProgressUpdate>> {
    let status = ProgressStatus::from_str_value(input.status.trim())?;
    let outcome = progress::update_step_progress(
        &state.pool,
        &state.config.xp,
        learner.user_id,
        id,
        step_id,
        status,
    )
    .await?;
    Ok(Json(outcome))
}
