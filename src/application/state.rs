// src/application/state.rs

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::domain::Film;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::repositories::{
    FilmRepository, InMemoryFilmRepository, InMemoryUserRepository, UserRepository,
};
use crate::services::{RankingService, RelationshipService};

/// Everything an outer layer needs, wired from one config.
/// All fields are Arc-wrapped for thread-safe sharing across requests.
/// Film and user CRUD go straight to the repositories.
pub struct AppState {
    pub config: CatalogConfig,
    pub event_bus: Arc<EventBus>,
    pub film_repo: Arc<dyn FilmRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub relationship_service: Arc<RelationshipService>,
    pub ranking_service: Arc<RankingService>,
}

impl AppState {
    pub fn new(config: CatalogConfig) -> Self {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());

        // 2. REPOSITORIES
        let film_repo: Arc<dyn FilmRepository> =
            Arc::new(InMemoryFilmRepository::new(config.earliest_release_date));
        let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());

        // 3. SERVICES
        let relationship_service = Arc::new(RelationshipService::new(
            user_repo.clone(),
            film_repo.clone(),
            event_bus.clone(),
        ));
        let ranking_service = Arc::new(RankingService::new(film_repo.clone()));

        Self {
            config,
            event_bus,
            film_repo,
            user_repo,
            relationship_service,
            ranking_service,
        }
    }

    /// Popular films, falling back to the configured count when none is given
    pub fn popular_films(&self, count: Option<usize>) -> AppResult<Vec<Film>> {
        let count = count.unwrap_or(self.config.default_popular_count);
        self.ranking_service.most_popular(Some(count))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilmData, UserData};
    use crate::error::AppError;
    use chrono::NaiveDate;

    fn add_liked_films(state: &AppState, n: usize) {
        let user = state
            .user_repo
            .add(UserData::new(
                "fan@example.com",
                "fan",
                None,
                NaiveDate::from_ymd_opt(1980, 6, 1).unwrap(),
            ))
            .unwrap();
        for i in 0..n {
            let film = state
                .film_repo
                .add(FilmData::new(
                    format!("Film {}", i),
                    "",
                    NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
                    90,
                ))
                .unwrap();
            state
                .relationship_service
                .add_like(film.id, user.id)
                .unwrap();
        }
    }

    #[test]
    fn test_popular_films_uses_default_count() {
        let state = AppState::new(CatalogConfig {
            default_popular_count: 2,
            ..CatalogConfig::default()
        });
        add_liked_films(&state, 3);

        assert_eq!(state.popular_films(None).unwrap().len(), 2);
        assert_eq!(state.popular_films(Some(3)).unwrap().len(), 3);
        assert!(matches!(
            state.popular_films(Some(0)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_config_floor_reaches_film_repository() {
        let state = AppState::new(CatalogConfig {
            earliest_release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            ..CatalogConfig::default()
        });

        let result = state.film_repo.add(FilmData::new(
            "Old",
            "",
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            90,
        ));
        assert!(matches!(result, Err(AppError::Domain(_))));
    }
}
