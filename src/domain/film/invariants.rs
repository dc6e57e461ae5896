use chrono::NaiveDate;

use super::entity::FilmData;
use crate::domain::{DomainError, DomainResult};

/// Validates all Film invariants against the earliest accepted release date
pub fn validate_film(data: &FilmData, earliest_release_date: NaiveDate) -> DomainResult<()> {
    validate_name(&data.name)?;
    validate_release_date(data.release_date, earliest_release_date)?;
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Film name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// The floor itself is accepted; anything strictly before it is not
fn validate_release_date(release_date: NaiveDate, earliest: NaiveDate) -> DomainResult<()> {
    if release_date < earliest {
        return Err(DomainError::ReleaseDateTooEarly {
            release_date,
            earliest,
        });
    }
    Ok(())
}

/// Film invariants:
///
/// 1. Id is unique and never changes after insert
/// 2. Name cannot be blank
/// 3. Release date is not before the configured floor (1895-12-28 by default)
/// 4. Like-set only changes through like/unlike, never through update
