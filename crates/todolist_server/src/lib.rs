//! HTTP surface for the todolist service.
//!
//! # Responsibility
//! - Expose CRUD access to the task collection over REST.
//! - Translate store outcomes into HTTP status codes.
//!
//! # Invariants
//! - Handlers are stateless; the only cross-request state is the shared
//!   store handle inside `AppState`.
//! - Identifier validity is checked before any store access.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
