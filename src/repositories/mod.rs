// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are the only code that mutates entity state
// - One lock per repository; multi-step writes happen under that one lock
// - NO event emission
// - NO cross-repository calls
// - When both stores are needed, users are locked before films

pub mod film_repository;
pub mod user_repository;

pub use film_repository::{FilmRepository, InMemoryFilmRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};
