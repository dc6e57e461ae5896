// src/repositories/film_repository.rs
//
// Film storage - in-memory, one lock per repository

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use log::{debug, info};

use crate::domain::{next_id, validate_film, Film, FilmData, FilmId, UserId};
use crate::error::{AppError, AppResult};

pub trait FilmRepository: Send + Sync {
    fn add(&self, data: FilmData) -> AppResult<Film>;
    fn update(&self, id: FilmId, data: FilmData) -> AppResult<Film>;
    fn get_by_id(&self, id: FilmId) -> AppResult<Film>;
    fn list_all(&self) -> AppResult<Vec<Film>>;
    fn remove(&self, id: FilmId) -> AppResult<Film>;
    fn clear(&self) -> AppResult<()>;
    fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film>;
    fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film>;
}

pub struct InMemoryFilmRepository {
    films: RwLock<BTreeMap<FilmId, Film>>,
    earliest_release_date: NaiveDate,
}

impl InMemoryFilmRepository {
    pub fn new(earliest_release_date: NaiveDate) -> Self {
        Self {
            films: RwLock::new(BTreeMap::new()),
            earliest_release_date,
        }
    }

    fn missing(id: FilmId) -> AppError {
        AppError::not_found(format!("Film with id {} not found", id))
    }

    /// Apply `change` to one stored film and return the result
    fn modify<F>(&self, id: FilmId, change: F) -> AppResult<Film>
    where
        F: FnOnce(&mut Film),
    {
        let mut films = self.films.write()?;
        let film = films.get_mut(&id).ok_or_else(|| Self::missing(id))?;
        change(film);
        Ok(film.clone())
    }
}

impl FilmRepository for InMemoryFilmRepository {
    fn add(&self, data: FilmData) -> AppResult<Film> {
        validate_film(&data, self.earliest_release_date)?;

        let mut films = self.films.write()?;
        let id = next_id(&films);
        let film = Film::new(id, data);
        films.insert(id, film.clone());

        info!("Film {} added: {}", id, film.name);
        Ok(film)
    }

    fn update(&self, id: FilmId, data: FilmData) -> AppResult<Film> {
        let mut films = self.films.write()?;
        let film = films.get_mut(&id).ok_or_else(|| Self::missing(id))?;

        // Checked after the lookup so an unknown id is reported as not found
        validate_film(&data, self.earliest_release_date)?;
        film.apply(data);

        info!("Film {} updated", id);
        Ok(film.clone())
    }

    fn get_by_id(&self, id: FilmId) -> AppResult<Film> {
        let films = self.films.read()?;
        let film = films.get(&id).cloned().ok_or_else(|| Self::missing(id))?;
        debug!("Film {} retrieved", id);
        Ok(film)
    }

    fn list_all(&self) -> AppResult<Vec<Film>> {
        let films = self.films.read()?;
        Ok(films.values().cloned().collect())
    }

    fn remove(&self, id: FilmId) -> AppResult<Film> {
        let mut films = self.films.write()?;
        let film = films.remove(&id).ok_or_else(|| Self::missing(id))?;
        info!("Film {} removed", id);
        Ok(film)
    }

    fn clear(&self) -> AppResult<()> {
        let mut films = self.films.write()?;
        films.clear();
        info!("Film store cleared");
        Ok(())
    }

    fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        self.modify(film_id, |film| {
            if film.add_like(user_id) {
                info!("User {} liked film {}", user_id, film_id);
            }
        })
    }

    fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        self.modify(film_id, |film| {
            if film.remove_like(user_id) {
                info!("User {} unliked film {}", user_id, film_id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn repo() -> InMemoryFilmRepository {
        InMemoryFilmRepository::new(NaiveDate::from_ymd_opt(1895, 12, 28).unwrap())
    }

    fn film(name: &str) -> FilmData {
        FilmData::new(
            name,
            "description",
            NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
            136,
        )
    }

    #[test]
    fn test_ids_increase_from_one() {
        let repo = repo();
        let ids: Vec<FilmId> = ["A", "B", "C"]
            .iter()
            .map(|name| repo.add(film(name)).unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_release_date_floor() {
        let repo = repo();

        let mut too_early = film("Too early");
        too_early.release_date = NaiveDate::from_ymd_opt(1895, 12, 27).unwrap();
        let result = repo.add(too_early);
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::ReleaseDateTooEarly { .. }))
        ));

        let mut on_floor = film("On the floor");
        on_floor.release_date = NaiveDate::from_ymd_opt(1895, 12, 28).unwrap();
        assert!(repo.add(on_floor).is_ok());
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let repo = repo();
        assert!(matches!(
            repo.update(42, film("Ghost")),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_with_early_date_changes_nothing() {
        let repo = repo();
        let stored = repo.add(film("The Matrix")).unwrap();

        let mut bad = film("Renamed");
        bad.release_date = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap();
        assert!(repo.update(stored.id, bad).is_err());

        assert_eq!(repo.get_by_id(stored.id).unwrap(), stored);
    }

    #[test]
    fn test_update_preserves_likes() {
        let repo = repo();
        let stored = repo.add(film("The Matrix")).unwrap();
        repo.add_like(stored.id, 9).unwrap();

        let updated = repo.update(stored.id, film("The Matrix Reloaded")).unwrap();
        assert_eq!(updated.name, "The Matrix Reloaded");
        assert!(updated.likes.contains(&9));
    }

    #[test]
    fn test_remove_returns_film_and_missing_fails() {
        let repo = repo();
        let stored = repo.add(film("Heat")).unwrap();

        assert_eq!(repo.remove(stored.id).unwrap().name, "Heat");
        assert!(matches!(repo.remove(stored.id), Err(AppError::NotFound(_))));
        assert!(matches!(repo.get_by_id(stored.id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_clear_resets_id_baseline() {
        let repo = repo();
        repo.add(film("A")).unwrap();
        repo.add(film("B")).unwrap();

        repo.clear().unwrap();
        assert!(repo.list_all().unwrap().is_empty());
        assert_eq!(repo.add(film("C")).unwrap().id, 1);
    }

    #[test]
    fn test_list_all_in_id_order() {
        let repo = repo();
        repo.add(film("A")).unwrap();
        repo.add(film("B")).unwrap();

        let names: Vec<String> = repo.list_all().unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_like_on_missing_film_is_not_found() {
        let repo = repo();
        assert!(matches!(repo.add_like(1, 1), Err(AppError::NotFound(_))));
        assert!(matches!(repo.remove_like(1, 1), Err(AppError::NotFound(_))));
    }
}
