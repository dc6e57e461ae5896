pub mod entity;
pub mod invariants;

pub use entity::{Film, FilmData};
pub use invariants::validate_film;
