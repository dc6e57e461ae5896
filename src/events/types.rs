// src/events/types.rs
//
// Domain events raised by relationship changes.
// Each event is an immutable fact that has already been committed.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{FilmId, UserId};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// FRIENDSHIP EVENTS
// ============================================================================

/// Emitted after both sides of a friendship were recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendshipCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub friend_id: UserId,
}

impl FriendshipCreated {
    pub fn new(user_id: UserId, friend_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            friend_id,
        }
    }
}

impl DomainEvent for FriendshipCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FriendshipCreated" }
}

/// Emitted after a successful remove-friend call, even when the two users
/// were not friends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendshipRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub friend_id: UserId,
}

impl FriendshipRemoved {
    pub fn new(user_id: UserId, friend_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            friend_id,
        }
    }
}

impl DomainEvent for FriendshipRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FriendshipRemoved" }
}

// ============================================================================
// LIKE EVENTS
// ============================================================================

/// Emitted after a like call; `like_count` is the film's count afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmLiked {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub film_id: FilmId,
    pub user_id: UserId,
    pub like_count: usize,
}

impl FilmLiked {
    pub fn new(film_id: FilmId, user_id: UserId, like_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            film_id,
            user_id,
            like_count,
        }
    }
}

impl DomainEvent for FilmLiked {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FilmLiked" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmUnliked {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub film_id: FilmId,
    pub user_id: UserId,
    pub like_count: usize,
}

impl FilmUnliked {
    pub fn new(film_id: FilmId, user_id: UserId, like_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            film_id,
            user_id,
            like_count,
        }
    }
}

impl DomainEvent for FilmUnliked {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FilmUnliked" }
}
