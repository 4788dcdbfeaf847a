//! Enrollment manager.

use skillkart_core::error::CoreError;
use skillkart_core::types::DbId;
use skillkart_db::models::enrollment::{Enrollment, EnrollmentOverview, EnrollmentUpsert};
use skillkart_db::repositories::{EnrollmentRepo, RoadmapRepo};
use sqlx::PgPool;

use crate::error::AppResult;

/// Start `roadmap_id` for `user_id`, or return the enrollment they already have.
///
/// Repeated and concurrent calls resolve to the same row; `inserted` tells
/// the caller whether this call created it.
pub async fn start_enrollment(
    pool: &PgPool,
    user_id: DbId,
    roadmap_id: DbId,
) -> AppResult<EnrollmentUpsert> {
    if RoadmapRepo::find_by_id(pool, roadmap_id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "Roadmap",
            id: roadmap_id,
        }
        .into());
    }

    let upsert = EnrollmentRepo::start(pool, user_id, roadmap_id).await?;
    if upsert.inserted {
        tracing::info!(
            user_id,
            roadmap_id,
            enrollment_id = upsert.enrollment.id,
            "Enrollment started",
        );
    } else {
        tracing::debug!(
            user_id,
            roadmap_id,
            enrollment_id = upsert.enrollment.id,
            "Enrollment already exists",
        );
    }
    Ok(upsert)
}

/// Load an enrollment owned by `user_id`.
///
/// Someone else's enrollment is reported as missing, not forbidden, so ids
/// cannot be probed.
pub async fn find_owned_enrollment(
    pool: &PgPool,
    user_id: DbId,
    enrollment_id: DbId,
) -> AppResult<Enrollment> {
    EnrollmentRepo::find_by_id(pool, enrollment_id)
        .await?
        .filter(|e| e.user_id == user_id)
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Enrollment",
                id: enrollment_id,
            }
            .into()
        })
}

pub async fn list_enrollments(pool: &PgPool, user_id: DbId) -> AppResult<Vec<EnrollmentOverview>> {
    Ok(EnrollmentRepo::list_overviews_for_user(pool, user_id).await?)
}
