//! Repository for the `badges` and `user_badges` tables.

use skillkart_core::badges::BadgeDefinition;
use skillkart_core::types::DbId;
use sqlx::PgPool;

use crate::models::badge::{Badge, UserBadge, UserBadgeStatus};

/// Column list for `badges` queries.
const BADGE_COLUMNS: &str = "id, name, description, created_at";

/// Column list for `user_badges` queries.
const USER_BADGE_COLUMNS: &str = "id, user_id, badge_id, created_at";

/// Provides catalog and award operations for badges.
pub struct BadgeRepo;

impl BadgeRepo {
    /// Insert each definition whose name is not already in the catalog.
    ///
    /// Safe to run repeatedly and concurrently: `uq_badges_name` decides,
    /// and conflicting inserts are skipped. Returns how many rows were added.
    pub async fn seed_defaults(
        pool: &PgPool,
        definitions: &[BadgeDefinition],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for def in definitions {
            let result = sqlx::query(
                "INSERT INTO badges (name, description) VALUES ($1, $2) \
                 ON CONFLICT ON CONSTRAINT uq_badges_name DO NOTHING",
            )
            .bind(def.name)
            .bind(def.description)
            .execute(pool)
            .await?;
            if result.rows_affected() > 0 {
                tracing::debug!(badge = def.name, "Seeded badge");
            }
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    /// List the whole catalog, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Badge>, sqlx::Error> {
        let query =
            format!("SELECT {BADGE_COLUMNS} FROM badges ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Badge>(&query).fetch_all(pool).await
    }

    /// Find a badge by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!("SELECT {BADGE_COLUMNS} FROM badges WHERE name = $1");
        sqlx::query_as::<_, Badge>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Award a badge to a user. Returns the new row, or `None` if the user
    /// already held it.
    pub async fn award(
        pool: &PgPool,
        user_id: DbId,
        badge_id: DbId,
    ) -> Result<Option<UserBadge>, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_badges (user_id, badge_id) VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_user_badges_user_badge DO NOTHING \
             RETURNING {USER_BADGE_COLUMNS}"
        );
        sqlx::query_as::<_, UserBadge>(&query)
            .bind(user_id)
            .bind(badge_id)
            .fetch_optional(pool)
            .await
    }

    /// Every catalog badge (oldest first) with the user's earned state.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserBadgeStatus>, sqlx::Error> {
        sqlx::query_as::<_, UserBadgeStatus>(
            "SELECT b.id, b.name, b.description, \
                 (ub.id IS NOT NULL) AS earned, ub.created_at AS earned_at \
             FROM badges b \
             LEFT JOIN user_badges ub ON ub.badge_id = b.id AND ub.user_id = $1 \
             ORDER BY b.created_at ASC, b.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
