//! Handlers for step discussion threads and their comments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillkart_core::discussion::{validate_post_body, validate_thread_title};
use skillkart_core::error::CoreError;
use skillkart_core::types::DbId;
use skillkart_db::models::discussion::{
    Comment, CreateComment, CreateThread, Thread, ThreadDetail,
};
use skillkart_db::repositories::{CommentRepo, RoadmapRepo, ThreadRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_step_exists(state: &AppState, step_id: DbId) -> AppResult<()> {
    RoadmapRepo::find_step(&state.pool, step_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Step",
            id: step_id,
        }))
}

/// GET /api/v1/steps/{step_id}/threads
pub async fn list_for_step(
    State(state): State<AppState>,
    Path(step_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Thread>>>> {
    ensure_step_exists(&state, step_id).await?;
    let threads = ThreadRepo::list_for_step(&state.pool, step_id).await?;
    Ok(Json(DataResponse { data: threads }))
}

/// POST /api/v1/steps/{step_id}/threads
pub async fn create_thread(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(step_id): Path<DbId>,
    Json(mut input): Json<CreateThread>,
) -> AppResult<(StatusCode, Json<DataResponse<Thread>>)> {
    validate_thread_title(&input.title)?;
    validate_post_body(&input.body)?;
    input.title = input.title.trim().to_string();
    ensure_step_exists(&state, step_id).await?;

    let thread = ThreadRepo::create(&state.pool, step_id, user.user_id, &input).await?;
    tracing::info!(thread_id = thread.id, step_id, author_id = user.user_id, "Thread created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: thread })))
}

/// GET /api/v1/threads/{id}
pub async fn get_thread(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ThreadDetail>>> {
    let thread = ThreadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Thread",
            id,
        }))?;
    let comments = CommentRepo::list_for_thread(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: ThreadDetail { thread, comments },
    }))
}

/// POST /api/v1/threads/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    validate_post_body(&input.body)?;
    if ThreadRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Thread",
            id,
        }));
    }

    let comment = CommentRepo::create(&state.pool, id, user.user_id, &input).await?;
    tracing::info!(comment_id = comment.id, thread_id = id, author_id = user.user_id, "Comment posted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
