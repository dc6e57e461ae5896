// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod film;
pub mod identifier;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Film Domain
pub use film::{validate_film, Film, FilmData};

// User Domain
pub use user::{validate_user, User, UserData};

// Identifiers
pub use identifier::{next_id, FilmId, UserId};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Release date {release_date} cannot be earlier than {earliest}")]
    ReleaseDateTooEarly {
        release_date: NaiveDate,
        earliest: NaiveDate,
    },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
