//! Badge award engine.
//!
//! Rules live in [`skillkart_core::badges::BADGE_RULES`]; this module loads
//! the stats they need and persists the resulting awards. Awards are
//! idempotent through `uq_user_badges_user_badge`, so evaluation can be
//! re-run at any time.

use skillkart_core::badges::{eligible_badges, BadgeStats, DEFAULT_BADGES};
use skillkart_core::types::DbId;
use skillkart_db::models::badge::{Badge, UserBadgeStatus};
use skillkart_db::repositories::{BadgeRepo, ProgressRepo};
use sqlx::PgPool;

use crate::error::AppResult;

/// Insert the default catalog, skipping names that already exist.
pub async fn seed_default_badges(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let inserted = BadgeRepo::seed_defaults(pool, DEFAULT_BADGES).await?;
    tracing::info!(
        inserted,
        catalog_size = DEFAULT_BADGES.len(),
        "Default badges seeded"
    );
    Ok(inserted)
}

/// Evaluate every badge rule for `user_id` and award the satisfied ones.
///
/// Returns the names newly awarded by this call.
pub async fn check_and_award_badges(pool: &PgPool, user_id: DbId) -> AppResult<Vec<&'static str>> {
    let stats = BadgeStats {
        completed_steps: ProgressRepo::count_completed_for_user(pool, user_id).await?,
    };

    let mut awarded = Vec::new();
    for name in eligible_badges(&stats) {
        if award_badge_if_not_exists(pool, user_id, name).await? {
            awarded.push(name);
        }
    }
    Ok(awarded)
}

/// Award the named badge unless the user already holds it.
///
/// An unknown badge name is a silent no-op. Returns `true` only when this
/// call created the award.
pub async fn award_badge_if_not_exists(
    pool: &PgPool,
    user_id: DbId,
    badge_name: &str,
) -> AppResult<bool> {
    let Some(badge) = BadgeRepo::find_by_name(pool, badge_name).await? else {
        tracing::warn!(user_id, badge = badge_name, "Badge not in catalog, skipping award");
        return Ok(false);
    };

    match BadgeRepo::award(pool, user_id, badge.id).await? {
        Some(award) => {
            tracing::info!(user_id, badge = badge_name, user_badge_id = award.id, "Badge awarded");
            Ok(true)
        }
        None => Ok(false),
    }
}

/// The whole catalog with the user's earned state, oldest badge first.
pub async fn get_user_badges(pool: &PgPool, user_id: DbId) -> AppResult<Vec<UserBadgeStatus>> {
    Ok(BadgeRepo::list_for_user(pool, user_id).await?)
}

/// The whole catalog ordered by creation time.
pub async fn get_all_badges(pool: &PgPool) -> AppResult<Vec<Badge>> {
    Ok(BadgeRepo::list(pool).await?)
}
