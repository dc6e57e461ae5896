// src/lib.rs
// CineSocial - in-memory film catalog with friendships and likes
//
// Architecture:
// - Domain-centric: entities and their invariants live in `domain`
// - Repositories own all entity state, one lock each
// - Services coordinate cross-entity operations and emit events
// - Application layer is the boundary an outer transport talks to

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    next_id, validate_film, validate_user, DomainError, DomainResult, Film, FilmData, FilmId,
    User, UserData, UserId,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::CatalogConfig;
pub use error::{AppError, AppResult, ErrorKind};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent, EventBus, EventLogEntry, FilmLiked, FilmUnliked, FriendshipCreated,
    FriendshipRemoved,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    FilmRepository, InMemoryFilmRepository, InMemoryUserRepository, UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{RankingService, RelationshipService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType, ToErrorResponse};
