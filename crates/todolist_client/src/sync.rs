//! Synchronization facade over the local mirror and the REST transport.
//!
//! # Responsibility
//! - Round-trip every mutation through the server before the mirror changes.
//! - Keep the mirror at its last-confirmed-good state after any failure.
//!
//! # Invariants
//! - No optimistic local edits; the server response is what lands in the
//!   mirror.
//! - Toggle resends the unchanged text alongside the flipped status; the
//!   server contract replaces both fields on every update.
//! - No retries; a failed call is logged, returned, and dropped.

use log::warn;
use todolist_core::TodoId;

use crate::api::TodoTransport;
use crate::error::ClientError;
use crate::state::{Filter, TodoListState};

/// Client session: one transport plus the local mirror it keeps consistent.
pub struct TodoClient<T: TodoTransport> {
    transport: T,
    state: TodoListState,
}

impl<T: TodoTransport> TodoClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: TodoListState::new(),
        }
    }

    /// Read access to the mirror (list, filter, edit slot).
    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    /// Local-only filter change; never triggers a network call.
    pub fn set_filter(&mut self, filter: Filter) {
        self.state.set_filter(filter);
    }

    /// Opens the edit slot for `id`. Local-only.
    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        self.state.begin_edit(id)
    }

    /// Replaces the edit draft. Local-only.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    /// Discards the edit slot. Local-only.
    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    /// Fetches the full list and replaces the mirror wholesale.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let todos = match self.transport.fetch_todos().await {
            Ok(todos) => todos,
            Err(err) => {
                warn!("event=client_load module=client status=error error={err}");
                return Err(err);
            }
        };

        self.state.replace_all(todos);
        Ok(())
    }

    /// Creates an item from `text`; appends the server's copy on success.
    pub async fn add(&mut self, text: &str) -> Result<TodoId, ClientError> {
        let created = match self.transport.create_todo(text).await {
            Ok(created) => created,
            Err(err) => {
                warn!("event=client_add module=client status=error error={err}");
                return Err(err);
            }
        };

        let id = created.id;
        self.state.insert_confirmed(created);
        Ok(id)
    }

    /// Flips the completion flag of one item.
    pub async fn toggle(&mut self, id: TodoId) -> Result<(), ClientError> {
        let (status, text) = match self.state.get(id) {
            Some(todo) => (!todo.status, todo.todo.clone()),
            None => return Err(ClientError::UnknownItem(id)),
        };

        let updated = match self.transport.update_todo(id, status, &text).await {
            Ok(updated) => updated,
            Err(err) => {
                warn!("event=client_toggle module=client status=error id={id} error={err}");
                return Err(err);
            }
        };

        self.state.replace_confirmed(updated);
        Ok(())
    }

    /// Commits the edit slot: sends the draft text with `status = false`
    /// (committing an edit marks the item active again) and clears the slot
    /// on success.
    ///
    /// An empty trimmed draft or a missing slot is rejected locally with
    /// `NothingToCommit`, before any network call.
    pub async fn commit_edit(&mut self) -> Result<(), ClientError> {
        let slot = match self.state.editing() {
            Some(slot) if !slot.draft.trim().is_empty() => slot.clone(),
            _ => return Err(ClientError::NothingToCommit),
        };

        let updated = match self.transport.update_todo(slot.id, false, &slot.draft).await {
            Ok(updated) => updated,
            Err(err) => {
                warn!(
                    "event=client_edit_commit module=client status=error id={} error={err}",
                    slot.id
                );
                return Err(err);
            }
        };

        self.state.replace_confirmed(updated);
        self.state.cancel_edit();
        Ok(())
    }

    /// Deletes one item; drops the local copy on success.
    ///
    /// Always round-trips, even when `id` is not in the mirror; the server
    /// decides whether the item exists.
    pub async fn remove(&mut self, id: TodoId) -> Result<(), ClientError> {
        match self.transport.delete_todo(id).await {
            Ok(()) => {
                self.state.remove_confirmed(id);
                Ok(())
            }
            Err(err) => {
                warn!("event=client_remove module=client status=error id={id} error={err}");
                Err(err)
            }
        }
    }
}
