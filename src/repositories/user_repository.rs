// src/repositories/user_repository.rs
//
// User storage - in-memory, one lock per repository
//
// The email index lives under the same lock as the user map, and both sides of
// a friendship are written inside one critical section, so readers never see
// either of them half-updated.

use std::collections::{BTreeMap, HashSet};
use std::sync::RwLock;

use log::{debug, info};

use crate::domain::{next_id, validate_user, Film, User, UserData, UserId};
use crate::error::{AppError, AppResult};

pub trait UserRepository: Send + Sync {
    fn add(&self, data: UserData) -> AppResult<User>;
    fn update(&self, id: UserId, data: UserData) -> AppResult<User>;
    fn get_by_id(&self, id: UserId) -> AppResult<User>;

    /// Ids that do not resolve are skipped, never reported
    fn get_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>>;

    fn list_all(&self) -> AppResult<Vec<User>>;
    fn remove(&self, id: UserId) -> AppResult<User>;
    fn clear(&self) -> AppResult<()>;

    /// Record a mutual friendship. Returns the initiating user.
    fn add_friendship(&self, user_id: UserId, friend_id: UserId) -> AppResult<User>;

    /// Drop a mutual friendship. Returns the initiating user.
    fn remove_friendship(&self, user_id: UserId, friend_id: UserId) -> AppResult<User>;

    /// Resolved friends of one user, read under a single lock
    fn friends_of(&self, id: UserId) -> AppResult<Vec<User>>;

    /// Users in both friend-sets, read under a single lock so the result
    /// matches one moment in time
    fn common_friends(&self, user_id: UserId, other_id: UserId) -> AppResult<Vec<User>>;

    /// Run a film mutation while the user store stays read-locked, so the
    /// user cannot disappear before it lands. Fixes the lock order to users first.
    fn with_user(
        &self,
        id: UserId,
        action: &mut dyn FnMut(&User) -> AppResult<Film>,
    ) -> AppResult<Film>;
}

#[derive(Default)]
struct UserStore {
    users: BTreeMap<UserId, User>,
    emails: HashSet<String>,
}

impl UserStore {
    fn get(&self, id: UserId) -> AppResult<&User> {
        self.users.get(&id).ok_or_else(|| missing(id))
    }

    /// Skips ids that no longer resolve
    fn resolve<'a>(&self, ids: impl IntoIterator<Item = &'a UserId>) -> Vec<User> {
        ids.into_iter()
            .filter_map(|id| self.users.get(id).cloned())
            .collect()
    }

    /// Both ids must resolve before either side is touched
    fn ensure_pair(&self, user_id: UserId, friend_id: UserId) -> AppResult<()> {
        if user_id == friend_id {
            return Err(AppError::validation(format!(
                "User {} cannot be their own friend",
                user_id
            )));
        }
        self.get(user_id)?;
        self.get(friend_id)?;
        Ok(())
    }
}

fn missing(id: UserId) -> AppError {
    AppError::not_found(format!("User with id {} not found", id))
}

fn email_taken(email: &str) -> AppError {
    AppError::validation(format!("Email {} is already in use", email))
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn add(&self, data: UserData) -> AppResult<User> {
        validate_user(&data)?;

        let mut store = self.store.write()?;
        if store.emails.contains(&data.email) {
            return Err(email_taken(&data.email));
        }

        let id = next_id(&store.users);
        let user = User::new(id, data);
        store.emails.insert(user.email.clone());
        store.users.insert(id, user.clone());

        info!("User {} registered with login {}", id, user.login);
        Ok(user)
    }

    fn update(&self, id: UserId, data: UserData) -> AppResult<User> {
        let mut store = self.store.write()?;
        let old_email = store.get(id)?.email.clone();

        validate_user(&data)?;
        let email_changed = data.email != old_email;
        if email_changed && store.emails.contains(&data.email) {
            return Err(email_taken(&data.email));
        }

        // Nothing has been written yet; from here on the update cannot fail
        if email_changed {
            store.emails.remove(&old_email);
            store.emails.insert(data.email.clone());
        }
        let user = store.users.get_mut(&id).ok_or_else(|| missing(id))?;
        user.apply(data);

        info!("User {} updated", id);
        Ok(user.clone())
    }

    fn get_by_id(&self, id: UserId) -> AppResult<User> {
        let store = self.store.read()?;
        let user = store.get(id)?.clone();
        debug!("User {} retrieved", id);
        Ok(user)
    }

    fn get_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        let store = self.store.read()?;
        Ok(store.resolve(ids))
    }

    fn list_all(&self) -> AppResult<Vec<User>> {
        let store = self.store.read()?;
        Ok(store.users.values().cloned().collect())
    }

    fn remove(&self, id: UserId) -> AppResult<User> {
        let mut store = self.store.write()?;
        let user = store.users.remove(&id).ok_or_else(|| missing(id))?;
        store.emails.remove(&user.email);

        // Keep friendship symmetric among the users that remain
        for friend_id in &user.friends {
            if let Some(friend) = store.users.get_mut(friend_id) {
                friend.remove_friend(id);
            }
        }

        info!("User {} removed", id);
        Ok(user)
    }

    fn clear(&self) -> AppResult<()> {
        let mut store = self.store.write()?;
        store.users.clear();
        store.emails.clear();
        info!("User store cleared");
        Ok(())
    }

    fn add_friendship(&self, user_id: UserId, friend_id: UserId) -> AppResult<User> {
        let mut store = self.store.write()?;
        store.ensure_pair(user_id, friend_id)?;

        if let Some(friend) = store.users.get_mut(&friend_id) {
            friend.add_friend(user_id);
        }
        let user = store.users.get_mut(&user_id).ok_or_else(|| missing(user_id))?;
        user.add_friend(friend_id);

        info!("Friendship between {} and {} established", user_id, friend_id);
        Ok(user.clone())
    }

    fn remove_friendship(&self, user_id: UserId, friend_id: UserId) -> AppResult<User> {
        let mut store = self.store.write()?;
        store.ensure_pair(user_id, friend_id)?;

        if let Some(friend) = store.users.get_mut(&friend_id) {
            friend.remove_friend(user_id);
        }
        let user = store.users.get_mut(&user_id).ok_or_else(|| missing(user_id))?;
        user.remove_friend(friend_id);

        info!("Friendship between {} and {} removed", user_id, friend_id);
        Ok(user.clone())
    }

    fn friends_of(&self, id: UserId) -> AppResult<Vec<User>> {
        let store = self.store.read()?;
        let user = store.get(id)?;
        Ok(store.resolve(&user.friends))
    }

    fn common_friends(&self, user_id: UserId, other_id: UserId) -> AppResult<Vec<User>> {
        let store = self.store.read()?;
        let user = store.get(user_id)?;
        let other = store.get(other_id)?;
        Ok(store.resolve(user.friends.intersection(&other.friends)))
    }

    fn with_user(
        &self,
        id: UserId,
        action: &mut dyn FnMut(&User) -> AppResult<Film>,
    ) -> AppResult<Film> {
        let store = self.store.read()?;
        let user = store.get(id)?;
        action(user)
    }
}
