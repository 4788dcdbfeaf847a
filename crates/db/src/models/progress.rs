//! Progress record models.

use serde::Serialize;
use skillkart_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `progress_records` table.
///
/// `status` holds one of the `skillkart_core::progress::STATUS_*` values.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgressRecord {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub step_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One step of a roadmap with the enrollment's status for it.
///
/// Steps without a progress record report `not_started`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StepProgress {
    pub step_id: DbId,
    pub position: i32,
    pub title: String,
    pub status: String,
    pub updated_at: Option<Timestamp>,
}
