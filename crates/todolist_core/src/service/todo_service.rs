//! Todo use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::todo::{Todo, TodoId};
use crate::repo::todo_repo::{RepoResult, TodoRepository};

/// Use-case service wrapper for todo CRUD operations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new item from caller-supplied text.
    ///
    /// # Contract
    /// - The store assigns the ID; `status` starts as `false`.
    /// - Text is stored verbatim, including empty strings.
    pub fn create_todo(&self, text: &str) -> RepoResult<Todo> {
        self.repo.create_todo(text)
    }

    /// Gets one item by stable ID.
    pub fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        self.repo.get_todo(id)
    }

    /// Lists the full collection in insertion order.
    pub fn list_todos(&self) -> RepoResult<Vec<Todo>> {
        self.repo.list_todos()
    }

    /// Replaces both fields of an existing item by stable ID.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_todo(&self, id: TodoId, status: bool, text: &str) -> RepoResult<Todo> {
        self.repo.update_todo(id, status, text)
    }

    /// Permanently deletes an item by ID.
    pub fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        self.repo.delete_todo(id)
    }
}
