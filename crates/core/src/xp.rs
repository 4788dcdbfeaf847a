//! Experience point rewards.

use crate::types::DbId;

/// Points awarded for completing a single roadmap step.
pub const DEFAULT_XP_PER_STEP: i32 = 10;

/// Action label recorded in the XP log for a step completion.
pub fn step_completion_action(step_id: DbId) -> String {
    format!("Completed step {step_id}")
}

/// Validate a configured per-step reward.
pub fn validate_xp_reward(points: i32) -> Result<(), String> {
    if points <= 0 {
        return Err(format!("XP reward must be positive, got {points}"));
    }
    Ok(())
}
