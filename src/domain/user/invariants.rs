use super::entity::UserData;
use crate::domain::{DomainError, DomainResult};

/// Validates all User invariants that do not depend on other users.
/// Email uniqueness needs the whole store and is enforced by the repository.
pub fn validate_user(data: &UserData) -> DomainResult<()> {
    validate_email(&data.email)?;
    validate_login(&data.login)?;
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    if email.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "User email cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Login is the display-name fallback, so it has to carry something
fn validate_login(login: &str) -> DomainResult<()> {
    if login.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "User login cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// User invariants:
///
/// 1. Id is unique and never changes after insert
/// 2. Email is unique across all users (repository-enforced)
/// 3. Stored display name is never blank
/// 4. Friendship is symmetric and never self-referential

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn data(email: &str, login: &str) -> UserData {
        UserData::new(email, login, None, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
    }

    #[test]
    fn test_valid_user() {
        assert!(validate_user(&data("test@test.ru", "testlogin")).is_ok());
    }

    #[test]
    fn test_blank_login_fails() {
        assert!(validate_user(&data("test@test.ru", "")).is_err());
    }

    #[test]
    fn test_blank_email_fails() {
        assert!(validate_user(&data(" ", "testlogin")).is_err());
    }
}
