pub mod entity;
pub mod invariants;

pub use entity::{User, UserData};
pub use invariants::validate_user;
