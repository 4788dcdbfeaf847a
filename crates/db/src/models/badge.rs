//! Badge catalog and award models.

use serde::Serialize;
use skillkart_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `badges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Badge {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// A row from the `user_badges` table. `created_at` is the time earned.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBadge {
    pub id: DbId,
    pub user_id: DbId,
    pub badge_id: DbId,
    pub created_at: Timestamp,
}

/// A catalog badge merged with a user's earned state.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBadgeStatus {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub earned: bool,
    pub earned_at: Option<Timestamp>,
}
