//! Repository for the `comments` table.

use skillkart_core::types::DbId;
use sqlx::PgPool;

use crate::models::discussion::{Comment, CreateComment};

/// Select list joining the author's username.
const SELECT: &str = "SELECT c.id, c.thread_id, c.author_id, u.username AS author_username, \
                      c.body, c.created_at, c.updated_at \
                      FROM comments c JOIN users u ON u.id = c.author_id";

/// Provides operations for thread comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment, returning it with the author's username.
    pub async fn create(
        pool: &PgPool,
        thread_id: DbId,
        author_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO comments (thread_id, author_id, body) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(thread_id)
        .bind(author_id)
        .bind(&input.body)
        .fetch_one(pool)
        .await?;

        let query = format!("{SELECT} WHERE c.id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List a thread's comments, oldest first.
    pub async fn list_for_thread(
        pool: &PgPool,
        thread_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("{SELECT} WHERE c.thread_id = $1 ORDER BY c.created_at ASC, c.id ASC");
        sqlx::query_as::<_, Comment>(&query)
            .bind(thread_id)
            .fetch_all(pool)
            .await
    }
}
