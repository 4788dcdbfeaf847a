//! Roadmap catalog validation.

use crate::error::CoreError;

pub const MAX_ROADMAP_TITLE_LENGTH: usize = 200;
pub const MAX_STEPS_PER_ROADMAP: usize = 500;

pub fn validate_roadmap_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_ROADMAP_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Roadmap title must be between 1 and {MAX_ROADMAP_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// A roadmap needs at least one step, each with a non-blank title.
pub fn validate_step_titles<S: AsRef<str>>(titles: &[S]) -> Result<(), CoreError> {
    if titles.is_empty() {
        return Err(CoreError::Validation(
            "A roadmap must contain at least one step".to_string(),
        ));
    }
    if titles.len() > MAX_STEPS_PER_ROADMAP {
        return Err(CoreError::Validation(format!(
            "A roadmap may contain at most {MAX_STEPS_PER_ROADMAP} steps"
        )));
    }
    for (i, title) in titles.iter().enumerate() {
        if title.as_ref().trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "steps[{i}] title must not be empty"
            )));
        }
    }
    Ok(())
}
