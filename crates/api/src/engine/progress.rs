//! Progress update orchestrator.
//!
//! A status write runs in one transaction:
//!
//! 1. find-or-create the `(enrollment, step)` record and lock it,
//! 2. overwrite its status,
//! 3. append step-completion XP if the repeat-completion policy allows it.
//!
//! Badge evaluation follows after commit. If it fails the progress and XP
//! stay committed and the next evaluation catches up.

use serde::Serialize;
use skillkart_core::error::CoreError;
use skillkart_core::progress::{should_award_xp, ProgressStatus, ProgressSummary};
use skillkart_core::types::DbId;
use skillkart_db::models::enrollment::Enrollment;
use skillkart_db::models::progress::StepProgress;
use skillkart_db::repositories::{ProgressRepo, RoadmapRepo};
use sqlx::PgPool;

use crate::config::XpSettings;
use crate::engine::{badges, enrollment, xp};
use crate::error::AppResult;

/// Outcome of [`update_step_progress`].
#[derive(Debug, Serialize)]
pub struct ProgressUpdate {
    pub success: bool,
    pub status: ProgressStatus,
    /// Points appended by this write (0 when no XP was earned).
    pub xp_awarded: i32,
    /// Badges first earned as a result of this write.
    pub badges_awarded: Vec<&'static str>,
}

/// Set the learner's status for one step of an enrolled roadmap.
///
/// Fails with `NotFound` when the enrollment is missing or belongs to
/// someone else, or when the step is not part of the enrolled roadmap.
pub async fn update_step_progress(
    pool: &PgPool,
    settings: &XpSettings,
    user_id: DbId,
    enrollment_id: DbId,
    step_id: DbId,
    status: ProgressStatus,
) -> AppResult<ProgressUpdate> {
    let enrollment = enrollment::find_owned_enrollment(pool, user_id, enrollment_id).await?;
    ensure_step_in_roadmap(pool, &enrollment, step_id).await?;

    let mut tx = pool.begin().await?;

    let previous = ProgressRepo::lock_or_create(&mut *tx, enrollment_id, step_id).await?;
    ProgressRepo::set_status(&mut *tx, enrollment_id, step_id, status).await?;

    let xp_awarded = if should_award_xp(settings.repeat_completion, previous, status) {
        xp::award_xp_for_step_completion(&mut *tx, user_id, step_id, settings.points_per_step)
            .await?
            .points
    } else {
        0
    };

    tx.commit().await?;

    tracing::info!(
        user_id,
        enrollment_id,
        step_id,
        previous = previous.map(|p| p.as_str()),
        status = status.as_str(),
        xp_awarded,
        "Step progress updated",
    );

    let badges_awarded = if status.is_completed() {
        match badges::check_and_award_badges(pool, user_id).await {
            Ok(names) => names,
            Err(e) => {
                tracing::error!(user_id, error = %e, "Badge evaluation failed after progress update");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    Ok(ProgressUpdate {
        success: true,
        status,
        xp_awarded,
        badges_awarded,
    })
}

async fn ensure_step_in_roadmap(
    pool: &PgPool,
    enrollment: &Enrollment,
    step_id: DbId,
) -> AppResult<()> {
    match RoadmapRepo::find_step(pool, step_id).await? {
        Some(step) if step.roadmap_id == enrollment.roadmap_id => Ok(()),
        _ => Err(CoreError::NotFound {
            entity: "Step",
            id: step_id,
        }
        .into()),
    }
}

/// Per-step statuses for an enrollment, plus counts.
#[derive(Debug, Serialize)]
pub struct EnrollmentProgress {
    pub enrollment: Enrollment,
    pub summary: ProgressSummary,
    pub steps: Vec<StepProgress>,
}

pub async fn get_enrollment_progress(
    pool: &PgPool,
    user_id: DbId,
    enrollment_id: DbId,
) -> AppResult<EnrollmentProgress> {
    let enrollment = enrollment::find_owned_enrollment(pool, user_id, enrollment_id).await?;
    let steps =
        ProgressRepo::list_step_progress(pool, enrollment.id, enrollment.roadmap_id).await?;

    let statuses = steps
        .iter()
        .map(|s| ProgressStatus::from_str_value(&s.status))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EnrollmentProgress {
        summary: ProgressSummary::from_statuses(&statuses),
        enrollment,
        steps,
    })
}
