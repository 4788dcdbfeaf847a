//! Repository for the `progress_records` table.

use skillkart_core::progress::{ProgressStatus, STATUS_COMPLETED, STATUS_NOT_STARTED};
use skillkart_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::progress::{ProgressRecord, StepProgress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, enrollment_id, step_id, status, created_at, updated_at";

/// Provides operations on per-step progress records.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Find the record for an (enrollment, step) pair.
    pub async fn find(
        pool: &PgPool,
        enrollment_id: DbId,
        step_id: DbId,
    ) -> Result<Option<ProgressRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM progress_records WHERE enrollment_id = $1 AND step_id = $2"
        );
        sqlx::query_as::<_, ProgressRecord>(&query)
            .bind(enrollment_id)
            .bind(step_id)
            .fetch_optional(pool)
            .await
    }

    /// Ensure a record exists for the pair and lock it for the rest of the
    /// caller's transaction, returning the status it held before this call.
    ///
    /// Returns `None` when the record did not exist and was created here.
    /// Concurrent callers for the same pair serialize on the row lock, so
    /// each observes the status committed by the one before it.
    pub async fn lock_or_create(
        conn: &mut PgConnection,
        enrollment_id: DbId,
        step_id: DbId,
    ) -> Result<Option<ProgressStatus>, sqlx::Error> {
        let created: Option<(DbId,)> = sqlx::query_as(
            "INSERT INTO progress_records (enrollment_id, step_id, status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_progress_records_enrollment_step DO NOTHING \
             RETURNING id",
        )
        .bind(enrollment_id)
        .bind(step_id)
        .bind(STATUS_NOT_STARTED)
        .fetch_optional(&mut *conn)
        .await?;

        if created.is_some() {
            return Ok(None);
        }

        let (status,): (String,) = sqlx::query_as(
            "SELECT status FROM progress_records \
             WHERE enrollment_id = $1 AND step_id = $2 \
             FOR UPDATE",
        )
        .bind(enrollment_id)
        .bind(step_id)
        .fetch_one(&mut *conn)
        .await?;

        ProgressStatus::from_str_value(&status)
            .map(Some)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))
    }

    /// Overwrite the status of an existing record.
    pub async fn set_status(
        conn: &mut PgConnection,
        enrollment_id: DbId,
        step_id: DbId,
        status: ProgressStatus,
    ) -> Result<ProgressRecord, sqlx::Error> {
        let query = format!(
            "UPDATE progress_records SET status = $3 \
             WHERE enrollment_id = $1 AND step_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgressRecord>(&query)
            .bind(enrollment_id)
            .bind(step_id)
            .bind(status.as_str())
            .fetch_one(&mut *conn)
            .await
    }

    /// Every step of `roadmap_id` with this enrollment's status for it, in
    /// position order. Steps without a record report `not_started`.
    pub async fn list_step_progress(
        pool: &PgPool,
        enrollment_id: DbId,
        roadmap_id: DbId,
    ) -> Result<Vec<StepProgress>, sqlx::Error> {
        sqlx::query_as::<_, StepProgress>(
            "SELECT s.id AS step_id, s.position, s.title, \
                 COALESCE(p.status, $3) AS status, p.updated_at \
             FROM steps s \
             LEFT JOIN progress_records p \
                 ON p.step_id = s.id AND p.enrollment_id = $1 \
             WHERE s.roadmap_id = $2 \
             ORDER BY s.position ASC",
        )
        .bind(enrollment_id)
        .bind(roadmap_id)
        .bind(STATUS_NOT_STARTED)
        .fetch_all(pool)
        .await
    }

    /// Count completed records across all of a user's enrollments.
    pub async fn count_completed_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM progress_records p \
             JOIN enrollments e ON e.id = p.enrollment_id \
             WHERE e.user_id = $1 AND p.status = $2",
        )
        .bind(user_id)
        .bind(STATUS_COMPLETED)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
