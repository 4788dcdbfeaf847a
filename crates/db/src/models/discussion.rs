//! Discussion thread and comment models and DTOs.

use serde::{Deserialize, Serialize};
use skillkart_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A thread joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Thread {
    pub id: DbId,
    pub step_id: DbId,
    pub author_id: DbId,
    pub author_username: String,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A comment joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub thread_id: DbId,
    pub author_id: DbId,
    pub author_username: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A thread with its comments, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetail {
    #[serde(flatten)]
    pub thread: Thread,
    pub comments: Vec<Comment>,
}

/// DTO for starting a thread on a step.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateThread {
    pub title: String,
    pub body: String,
}

/// DTO for replying to a thread.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub body: String,
}
