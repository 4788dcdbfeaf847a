//! Handlers for the `/roadmaps` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillkart_core::error::CoreError;
use skillkart_core::roadmap::{validate_roadmap_title, validate_step_titles};
use skillkart_core::types::DbId;
use skillkart_db::models::enrollment::Enrollment;
use skillkart_db::models::roadmap::{CreateRoadmap, Roadmap, RoadmapDetail};
use skillkart_db::repositories::RoadmapRepo;

use crate::engine::enrollment;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireLearner};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/roadmaps
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Roadmap>>>> {
    let roadmaps = RoadmapRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: roadmaps }))
}

/// GET /api/v1/roadmaps/{id}
///
/// The roadmap with its steps in position order.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RoadmapDetail>>> {
    let roadmap = RoadmapRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Roadmap",
            id,
        }))?;
    let steps = RoadmapRepo::list_steps(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: RoadmapDetail { roadmap, steps },
    }))
}

/// POST /api/v1/roadmaps
///
/// Admin only. Creates the roadmap and its steps atomically.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateRoadmap>,
) -> AppResult<(StatusCode, Json<DataResponse<RoadmapDetail>>)> {
    validate_roadmap_title(&input.title)?;
    let titles: Vec<&str> = input.steps.iter().map(|s| s.title.as_str()).collect();
    validate_step_titles(&titles)?;

    let detail = RoadmapRepo::create_with_steps(&state.pool, Some(admin.user_id), &input).await?;
    tracing::info!(
        roadmap_id = detail.roadmap.id,
        steps = detail.steps.len(),
        created_by = admin.user_id,
        "Roadmap created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// POST /api/v1/roadmaps/{id}/start
///
/// Learner only. 201 when the enrollment is new, 200 when it already existed.
pub async fn start(
    State(state): State<AppState>,
    RequireLearner(learner): RequireLearner,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Enrollment>>)> {
    let upsert = enrollment::start_enrollment(&state.pool, learner.user_id, id).await?;
    let status = if upsert.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(DataResponse {
            data: upsert.enrollment,
        }),
    ))
}
