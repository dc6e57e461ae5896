// src/services/relationship_service.rs
//
// Relationship Service - friendships between users, likes from users to films
//
// RULES:
// - Both sides are validated before either is mutated
// - Mutations are delegated to repositories
// - Events are emitted only after the repository call succeeded

use std::sync::Arc;

use crate::domain::{Film, FilmId, User, UserId};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, FilmLiked, FilmUnliked, FriendshipCreated, FriendshipRemoved};
use crate::repositories::{FilmRepository, UserRepository};

pub struct RelationshipService {
    user_repo: Arc<dyn UserRepository>,
    film_repo: Arc<dyn FilmRepository>,
    event_bus: Arc<EventBus>,
}

impl RelationshipService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        film_repo: Arc<dyn FilmRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            user_repo,
            film_repo,
            event_bus,
        }
    }

    // ========================================================================
    // FRIENDSHIP
    // ========================================================================

    /// Make two users mutual friends. Returns the initiating user.
    pub fn add_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<User> {
        if user_id == friend_id {
            return Err(AppError::validation(format!(
                "User {} cannot add themselves as a friend",
                user_id
            )));
        }

        let user = self.user_repo.add_friendship(user_id, friend_id)?;
        self.event_bus.emit(FriendshipCreated::new(user_id, friend_id));
        Ok(user)
    }

    /// End a mutual friendship. Returns the initiating user, same as `add_friend`.
    /// Removing a friendship that does not exist is not an error.
    pub fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<User> {
        if user_id == friend_id {
            return Err(AppError::validation(format!(
                "User {} and the friend to remove are the same user",
                user_id
            )));
        }

        let user = self.user_repo.remove_friendship(user_id, friend_id)?;
        self.event_bus.emit(FriendshipRemoved::new(user_id, friend_id));
        Ok(user)
    }

    /// Friends of a user in id order; ids that no longer resolve are dropped
    pub fn list_friends(&self, user_id: UserId) -> AppResult<Vec<User>> {
        self.user_repo.friends_of(user_id)
    }

    /// Users who are friends of both, in id order. No overlap yields an empty list.
    pub fn list_common_friends(&self, user_id: UserId, other_id: UserId) -> AppResult<Vec<User>> {
        if user_id == other_id {
            return Err(AppError::validation(format!(
                "Common friends need two different users, got {} twice",
                user_id
            )));
        }

        self.user_repo.common_friends(user_id, other_id)
    }

    // ========================================================================
    // LIKES
    // ========================================================================

    /// Record a like. Liking twice leaves a single like.
    pub fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        // The user stays read-locked until the like lands
        let film = self
            .user_repo
            .with_user(user_id, &mut |_| self.film_repo.add_like(film_id, user_id))?;
        self.event_bus
            .emit(FilmLiked::new(film_id, user_id, film.like_count()));
        Ok(film)
    }

    /// Withdraw a like. Withdrawing a like that was never given is not an error.
    pub fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        let film = self
            .user_repo
            .with_user(user_id, &mut |_| self.film_repo.remove_like(film_id, user_id))?;
        self.event_bus
            .emit(FilmUnliked::new(film_id, user_id, film.like_count()));
        Ok(film)
    }
}
