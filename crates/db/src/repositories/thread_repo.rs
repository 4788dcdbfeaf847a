//! Repository for the `threads` table.

use skillkart_core::types::DbId;
use sqlx::PgPool;

use crate::models::discussion::{CreateThread, Thread};

/// Select list joining the author's username.
const SELECT: &str = "SELECT t.id, t.step_id, t.author_id, u.username AS author_username, \
                      t.title, t.body, t.created_at, t.updated_at \
                      FROM threads t JOIN users u ON u.id = t.author_id";

/// Provides operations for discussion threads.
pub struct ThreadRepo;

impl ThreadRepo {
    /// Insert a thread on a step, returning it with the author's username.
    pub async fn create(
        pool: &PgPool,
        step_id: DbId,
        author_id: DbId,
        input: &CreateThread,
    ) -> Result<Thread, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO threads (step_id, author_id, title, body) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(step_id)
        .bind(author_id)
        .bind(input.title.trim())
        .bind(&input.body)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a thread by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Thread>, sqlx::Error> {
        let query = format!("{SELECT} WHERE t.id = $1");
        sqlx::query_as::<_, Thread>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a step's threads, newest first.
    pub async fn list_for_step(pool: &PgPool, step_id: DbId) -> Result<Vec<Thread>, sqlx::Error> {
        let query = format!("{SELECT} WHERE t.step_id = $1 ORDER BY t.created_at DESC, t.id DESC");
        sqlx::query_as::<_, Thread>(&query)
            .bind(step_id)
            .fetch_all(pool)
            .await
    }
}
