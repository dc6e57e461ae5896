use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::identifier::{FilmId, UserId};

/// A film in the catalog, together with the users who liked it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Assigned once on insert, immutable afterwards
    pub id: FilmId,

    pub name: String,

    pub description: String,

    pub release_date: NaiveDate,

    /// Running time in minutes
    pub duration: u32,

    /// Users who liked this film. Ids are checked when the like is recorded,
    /// not when the user is later removed.
    pub likes: BTreeSet<UserId>,
}

/// The caller-supplied, mutable part of a Film
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmData {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: u32,
}

impl Film {
    /// Build a stored Film from validated data and an allocated id
    pub fn new(id: FilmId, data: FilmData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            release_date: data.release_date,
            duration: data.duration,
            likes: BTreeSet::new(),
        }
    }

    /// Replace every mutable field. Id and like-set are left untouched.
    pub fn apply(&mut self, data: FilmData) {
        self.name = data.name;
        self.description = data.description;
        self.release_date = data.release_date;
        self.duration = data.duration;
    }

    /// Returns false if the user already liked the film
    pub fn add_like(&mut self, user_id: UserId) -> bool {
        self.likes.insert(user_id)
    }

    /// Returns false if there was no like to remove
    pub fn remove_like(&mut self, user_id: UserId) -> bool {
        self.likes.remove(&user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

impl FilmData {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        release_date: NaiveDate,
        duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            release_date,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilmData {
        FilmData::new(
            "Stalker",
            "A guide leads two men through the Zone",
            NaiveDate::from_ymd_opt(1979, 5, 25).unwrap(),
            161,
        )
    }

    #[test]
    fn test_apply_keeps_id_and_likes() {
        let mut film = Film::new(7, sample());
        film.add_like(3);

        let mut data = sample();
        data.name = "Solaris".to_string();
        film.apply(data);

        assert_eq!(film.id, 7);
        assert_eq!(film.name, "Solaris");
        assert!(film.likes.contains(&3));
    }

    #[test]
    fn test_like_is_idempotent() {
        let mut film = Film::new(1, sample());
        assert!(film.add_like(5));
        assert!(!film.add_like(5));
        assert_eq!(film.like_count(), 1);

        assert!(film.remove_like(5));
        assert!(!film.remove_like(5));
        assert_eq!(film.like_count(), 0);
    }
}
