// src/services/ranking_service.rs
//
// Most-liked films, computed from the film store on every call

use std::cmp::Reverse;
use std::sync::Arc;

use log::debug;

use crate::domain::Film;
use crate::error::{AppError, AppResult};
use crate::repositories::FilmRepository;

pub struct RankingService {
    film_repo: Arc<dyn FilmRepository>,
}

impl RankingService {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self { film_repo }
    }

    /// Up to `count` films with at least one like, most liked first.
    /// Films with equal like counts keep ascending id order.
    pub fn most_popular(&self, count: Option<usize>) -> AppResult<Vec<Film>> {
        let count = match count {
            Some(count) if count > 0 => count,
            _ => {
                return Err(AppError::validation(
                    "count must be greater than 0".to_string(),
                ))
            }
        };

        let mut films: Vec<Film> = self
            .film_repo
            .list_all()?
            .into_iter()
            .filter(|film| !film.likes.is_empty())
            .collect();

        // Stable sort, so ties stay in id order
        films.sort_by_key(|film| Reverse(film.like_count()));
        films.truncate(count);

        debug!("Ranked {} popular films (requested {})", films.len(), count);
        Ok(films)
    }
}
