//! Step progress states and the XP award decision for status updates.
//!
//! A progress record holds the status of one roadmap step within one
//! enrollment. Updates are blind overwrites: any status may replace any
//! other. Whether a write to `completed` earns XP depends on the configured
//! [`RepeatCompletionPolicy`] and the status the record held before.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Status string values as stored in `progress_records.status`.
pub const STATUS_NOT_STARTED: &str = "not_started";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid progress status strings.
pub const VALID_PROGRESS_STATUSES: &[&str] =
    &[STATUS_NOT_STARTED, STATUS_IN_PROGRESS, STATUS_COMPLETED];

/// Repeat-completion policy values accepted from configuration.
pub const POLICY_ONCE: &str = "once";
pub const POLICY_EVERY: &str = "every";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Status of a single step within an enrollment.
///
/// `NotStarted` is also the implicit status of a step with no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_NOT_STARTED => Ok(Self::NotStarted),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            _ => Err(CoreError::Validation(format!(
                "Invalid progress status '{s}'. Must be one of: {}",
                VALID_PROGRESS_STATUSES.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => STATUS_NOT_STARTED,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Governs whether writing `completed` over an already-completed step
/// awards XP again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatCompletionPolicy {
    /// Award XP only when the step moves into `completed` from another state.
    #[default]
    AwardOnce,
    /// Award XP on every write of `completed`, even if already completed.
    AwardEvery,
}

impl RepeatCompletionPolicy {
    /// Parse a configuration value (`once` or `every`, case-insensitive).
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            POLICY_ONCE => Ok(Self::AwardOnce),
            POLICY_EVERY => Ok(Self::AwardEvery),
            other => Err(CoreError::Validation(format!(
                "Invalid repeat completion policy '{other}'. Must be one of: {POLICY_ONCE}, {POLICY_EVERY}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwardOnce => POLICY_ONCE,
            Self::AwardEvery => POLICY_EVERY,
        }
    }
}

// ---------------------------------------------------------------------------
// Transition logic
// ---------------------------------------------------------------------------

/// Whether writing `next` over `previous` moves the step into `completed`.
///
/// `previous` is `None` when no record existed before the write.
pub fn is_completion_transition(previous: Option<ProgressStatus>, next: ProgressStatus) -> bool {
    next.is_completed() && !previous.is_some_and(|p| p.is_completed())
}

/// Decide whether a status write earns step-completion XP.
pub fn should_award_xp(
    policy: RepeatCompletionPolicy,
    previous: Option<ProgressStatus>,
    next: ProgressStatus,
) -> bool {
    match policy {
        RepeatCompletionPolicy::AwardOnce => is_completion_transition(previous, next),
        RepeatCompletionPolicy::AwardEvery => next.is_completed(),
    }
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// Completed/total step counts for one enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub total_steps: i64,
    pub completed_steps: i64,
    pub in_progress_steps: i64,
    /// Whole-number completion percentage (0 when the roadmap has no steps).
    pub percent_complete: i64,
}

impl ProgressSummary {
    /// Build a summary from the statuses of every step in a roadmap.
    pub fn from_statuses(statuses: &[ProgressStatus]) -> Self {
        let total_steps = statuses.len() as i64;
        let completed_steps = statuses.iter().filter(|s| s.is_completed()).count() as i64;
        let in_progress_steps = statuses
            .iter()
            .filter(|s| **s == ProgressStatus::InProgress)
            .count() as i64;
        Self::from_counts(total_steps, completed_steps, in_progress_steps)
    }

    pub fn from_counts(total_steps: i64, completed_steps: i64, in_progress_steps: i64) -> Self {
        let percent_complete = if total_steps > 0 {
            completed_steps * 100 / total_steps
        } else {
            0
        };
        Self {
            total_steps,
            completed_steps,
            in_progress_steps,
            percent_complete,
        }
    }
}
