//! Repository for the `enrollments` table.

use skillkart_core::progress::{STATUS_COMPLETED, STATUS_IN_PROGRESS};
use skillkart_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::{Enrollment, EnrollmentOverview, EnrollmentUpsert};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, roadmap_id, started_at, created_at, updated_at";

/// Provides operations for roadmap enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Start a roadmap for a user, or return the existing enrollment.
    ///
    /// The insert is guarded by `uq_enrollments_user_roadmap`, so concurrent
    /// starts cannot create duplicates. When the insert yields nothing the
    /// row already exists (possibly committed by a concurrent caller this
    /// statement waited on) and is read back unchanged.
    pub async fn start(
        pool: &PgPool,
        user_id: DbId,
        roadmap_id: DbId,
    ) -> Result<EnrollmentUpsert, sqlx::Error> {
        let insert = format!(
            "INSERT INTO enrollments (user_id, roadmap_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_enrollments_user_roadmap DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Enrollment>(&insert)
            .bind(user_id)
            .bind(roadmap_id)
            .fetch_optional(pool)
            .await?;

        if let Some(enrollment) = created {
            return Ok(EnrollmentUpsert {
                enrollment,
                inserted: true,
            });
        }

        let select =
            format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 AND roadmap_id = $2");
        let enrollment = sqlx::query_as::<_, Enrollment>(&select)
            .bind(user_id)
            .bind(roadmap_id)
            .fetch_one(pool)
            .await?;

        Ok(EnrollmentUpsert {
            enrollment,
            inserted: false,
        })
    }

    /// Find an enrollment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's enrollments with roadmap titles and step counts,
    /// most recently started first.
    pub async fn list_overviews_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EnrollmentOverview>, sqlx::Error> {
        sqlx::query_as::<_, EnrollmentOverview>(
            "SELECT e.id, e.roadmap_id, r.title AS roadmap_title, e.started_at, \
                 (SELECT COUNT(*) FROM steps s WHERE s.roadmap_id = e.roadmap_id) AS total_steps, \
                 (SELECT COUNT(*) FROM progress_records p \
                   WHERE p.enrollment_id = e.id AND p.status = $2) AS completed_steps, \
                 (SELECT COUNT(*) FROM progress_records p \
                   WHERE p.enrollment_id = e.id AND p.status = $3) AS in_progress_steps \
             FROM enrollments e \
             JOIN roadmaps r ON r.id = e.roadmap_id \
             WHERE e.user_id = $1 \
             ORDER BY e.started_at DESC, e.id DESC",
        )
        .bind(user_id)
        .bind(STATUS_COMPLETED)
        .bind(STATUS_IN_PROGRESS)
        .fetch_all(pool)
        .await
    }
}
