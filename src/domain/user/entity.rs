use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::identifier::UserId;

/// A registered user and their friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned once on insert, immutable afterwards
    pub id: UserId,

    /// Unique across all users, compared case-sensitively
    pub email: String,

    pub login: String,

    /// Display name. Never blank once stored: falls back to `login`.
    pub name: String,

    pub birthday: NaiveDate,

    /// Symmetric: if A holds B, B holds A
    pub friends: BTreeSet<UserId>,
}

/// The caller-supplied, mutable part of a User
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

impl User {
    pub fn new(id: UserId, data: UserData) -> Self {
        let name = data.display_name();
        Self {
            id,
            email: data.email,
            login: data.login,
            name,
            birthday: data.birthday,
            friends: BTreeSet::new(),
        }
    }

    /// Replace every mutable field. Id and friend-set are left untouched.
    pub fn apply(&mut self, data: UserData) {
        self.name = data.display_name();
        self.email = data.email;
        self.login = data.login;
        self.birthday = data.birthday;
    }

    pub fn add_friend(&mut self, friend_id: UserId) -> bool {
        self.friends.insert(friend_id)
    }

    pub fn remove_friend(&mut self, friend_id: UserId) -> bool {
        self.friends.remove(&friend_id)
    }

    pub fn is_friend_of(&self, other_id: UserId) -> bool {
        self.friends.contains(&other_id)
    }
}

impl UserData {
    pub fn new(
        email: impl Into<String>,
        login: impl Into<String>,
        name: Option<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            email: email.into(),
            login: login.into(),
            name,
            birthday,
        }
    }

    /// The name to store: the given one, or the login when it is missing or blank
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.login.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
    }

    #[test]
    fn test_blank_name_falls_back_to_login() {
        let user = User::new(
            1,
            UserData::new("a@example.com", "alogin", Some("   ".to_string()), birthday()),
        );
        assert_eq!(user.name, "alogin");

        let user = User::new(2, UserData::new("b@example.com", "blogin", None, birthday()));
        assert_eq!(user.name, "blogin");
    }

    #[test]
    fn test_apply_resolves_name_and_keeps_friends() {
        let mut user = User::new(
            1,
            UserData::new("a@example.com", "alogin", Some("Ann".to_string()), birthday()),
        );
        user.add_friend(2);

        user.apply(UserData::new("a2@example.com", "anew", None, birthday()));

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a2@example.com");
        assert_eq!(user.name, "anew");
        assert!(user.is_friend_of(2));
    }
}
