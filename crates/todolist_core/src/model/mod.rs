//! Domain model for the task collection.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep the external wire shape (`_id`/`todo`/`status`) in one place.
//!
//! # Invariants
//! - Every item is identified by a stable `TodoId`.
//! - Deletion is permanent; identifiers are never reused.

pub mod todo;
