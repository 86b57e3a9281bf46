//! Task item domain model.
//!
//! # Responsibility
//! - Define the single persisted entity shared by server and client.
//! - Provide constructors that enforce creation defaults.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - Every item has exactly one `todo` text and one `status` flag.
//! - `status` starts as `false` at creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Canonical task record.
///
/// Serialized field names match the external API schema: the identifier is
/// `_id` on the wire, the text is `todo`, the completion flag is `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned stable ID, serialized as `_id`.
    #[serde(rename = "_id")]
    pub id: TodoId,
    /// Free-form task text. May be empty; the service does not trim.
    pub todo: String,
    /// Completion flag.
    pub status: bool,
}

impl Todo {
    /// Creates a new item with a generated stable ID and `status = false`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an item with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this item's lifetime.
    pub fn with_id(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            todo: text.into(),
            status: false,
        }
    }

    /// Returns whether this item counts as still actionable.
    pub fn is_active(&self) -> bool {
        !self.status
    }
}
