//! Enrollment models.

use serde::Serialize;
use skillkart_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `enrollments` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub roadmap_id: DbId,
    pub started_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of an idempotent start: the enrollment plus whether this call
/// inserted it.
#[derive(Debug, Clone)]
pub struct EnrollmentUpsert {
    pub enrollment: Enrollment,
    pub inserted: bool,
}

/// An enrollment joined with its roadmap title and step counts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentOverview {
    pub id: DbId,
    pub roadmap_id: DbId,
    pub roadmap_title: String,
    pub started_at: Timestamp,
    pub total_steps: i64,
    pub completed_steps: i64,
    pub in_progress_steps: i64,
}
