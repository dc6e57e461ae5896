// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between an outer transport (HTTP, CLI, ...) and the services
// - Wires repositories and services from one config
// - Translates errors into a transport-neutral response shape

pub mod error_handling;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
