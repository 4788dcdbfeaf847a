//! Account field validation for registration and profile updates.

use crate::error::CoreError;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_BIO_LENGTH: usize = 1000;

/// Minimum password length enforced on registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Usernames are 3-50 characters of ASCII letters, digits, or underscores.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, and underscores".to_string(),
        ));
    }
    Ok(())
}

/// Minimal shape check: a non-empty local part and domain around a single `@`.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Email must be at most {MAX_EMAIL_LENGTH} characters"
        )));
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace) =>
        {
            Ok(())
        }
        _ => Err(CoreError::Validation(format!("Invalid email address '{email}'"))),
    }
}

pub fn validate_bio(bio: &str) -> Result<(), CoreError> {
    if bio.chars().count() > MAX_BIO_LENGTH {
        return Err(CoreError::Validation(format!(
            "Bio must be at most {MAX_BIO_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_usernames_accepted() {
        assert!(validate_username("ada").is_ok());
        assert!(validate_username("grace_hopper_42").is_ok());
    }

    #[test]
    fn short_or_long_usernames_rejected() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"x".repeat(51)).is_err());
    }

    #[test]
    fn username_with_symbols_rejected() {
        assert!(validate_username("bad-name").is_err());
        assert!(validate_username("space name").is_err());
    }

    #[test]
    fn email_shape_checked() {
        assert!(validate_email("learner@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@b@c").is_err());
        assert!(validate_email("a b@example.com").is_err());
    }

    #[test]
    fn bio_length_limited() {
        assert!(validate_bio("").is_ok());
        assert!(validate_bio(&"b".repeat(MAX_BIO_LENGTH + 1)).is_err());
    }
}
