//! Repository for the append-only `xp_log` table.

use skillkart_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::xp::XpLogEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, action, points, created_at";

/// Provides append and aggregate operations on the XP ledger.
///
/// There are deliberately no update or delete methods.
pub struct XpRepo;

impl XpRepo {
    /// Append a ledger entry. Accepts a pool or a connection inside a
    /// caller's transaction.
    pub async fn append<'e, E>(
        executor: E,
        user_id: DbId,
        action: &str,
        points: i32,
    ) -> Result<XpLogEntry, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO xp_log (user_id, action, points) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, XpLogEntry>(&query)
            .bind(user_id)
            .bind(action)
            .bind(points)
            .fetch_one(executor)
            .await
    }

    /// Sum of points across the user's entries; 0 when there are none.
    pub async fn total_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COALESCE(SUM(points), 0)::BIGINT FROM xp_log WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(total)
    }

    /// The user's entries, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<XpLogEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM xp_log WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, XpLogEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
