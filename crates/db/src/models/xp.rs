//! XP ledger model.

use serde::Serialize;
use skillkart_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the append-only `xp_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct XpLogEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub action: String,
    pub points: i32,
    pub created_at: Timestamp,
}
