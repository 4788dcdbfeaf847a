//! Validation for discussion threads and comments.

use crate::error::CoreError;

pub const MAX_THREAD_TITLE_LENGTH: usize = 200;
pub const MAX_POST_BODY_LENGTH: usize = 5000;

/// Thread titles are 1-200 characters after trimming.
pub fn validate_thread_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Thread title must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_THREAD_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Thread title must be at most {MAX_THREAD_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Thread and comment bodies must be non-blank and at most 5000 characters.
pub fn validate_post_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("Body must not be empty".to_string()));
    }
    if body.chars().count() > MAX_POST_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Body must be at most {MAX_POST_BODY_LENGTH} characters"
        )));
    }
    Ok(())
}
