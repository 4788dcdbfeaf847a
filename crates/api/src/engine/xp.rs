//! XP ledger operations.

use serde::Serialize;
use skillkart_core::types::DbId;
use skillkart_core::xp::step_completion_action;
use skillkart_db::models::xp::XpLogEntry;
use skillkart_db::repositories::XpRepo;
use sqlx::{PgConnection, PgPool};

use crate::error::AppResult;

/// Append the reward for completing `step_id`.
///
/// Runs on the caller's connection so the entry commits together with the
/// status write that earned it. Badge evaluation is the caller's job once
/// that transaction has committed.
pub async fn award_xp_for_step_completion(
    conn: &mut PgConnection,
    user_id: DbId,
    step_id: DbId,
    points: i32,
) -> Result<XpLogEntry, sqlx::Error> {
    let action = step_completion_action(step_id);
    let entry = XpRepo::append(&mut *conn, user_id, &action, points).await?;
    tracing::info!(user_id, step_id, points, xp_log_id = entry.id, "XP awarded");
    Ok(entry)
}

/// Sum of the user's ledger, recomputed on every call.
pub async fn get_total_xp(pool: &PgPool, user_id: DbId) -> AppResult<i64> {
    Ok(XpRepo::total_for_user(pool, user_id).await?)
}

/// A user's total alongside the entries that make it up.
#[derive(Debug, Serialize)]
pub struct XpSummary {
    pub total_xp: i64,
    /// Newest first.
    pub history: Vec<XpLogEntry>,
}

pub async fn get_xp_summary(pool: &PgPool, user_id: DbId) -> AppResult<XpSummary> {
    let total_xp = get_total_xp(pool, user_id).await?;
    let history = XpRepo::list_for_user(pool, user_id).await?;
    Ok(XpSummary { total_xp, history })
}
