//! Local mirror of the server-side task list.
//!
//! # Responsibility
//! - Hold the last-confirmed-good copy of the list.
//! - Derive the visible subset from the current filter (pure).
//! - Track the single-item edit slot.
//!
//! # Invariants
//! - The list changes only through confirmed-state appliers, called after a
//!   successful server round trip.
//! - Filtering never mutates the underlying list and never touches the
//!   network.
//! - At most one item is being edited at a time.

use todolist_core::{Todo, TodoId};

/// View filter over the local list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every item passes.
    #[default]
    All,
    /// Items with `status = false`.
    Active,
    /// Items with `status = true`.
    Done,
}

impl Filter {
    /// Pure predicate deciding whether `todo` stays visible.
    pub fn keeps(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => todo.is_active(),
            Self::Done => !todo.is_active(),
        }
    }
}

/// Single-item edit-in-progress slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSlot {
    pub id: TodoId,
    pub draft: String,
}

/// Client-side mirror state.
#[derive(Debug, Default)]
pub struct TodoListState {
    todos: Vec<Todo>,
    filter: Filter,
    edit: Option<EditSlot>,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full local list, unfiltered.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Derives the visible subset. Pure: no mutation, no network.
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.keeps(todo))
            .collect()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Current edit slot, if any.
    pub fn editing(&self) -> Option<&EditSlot> {
        self.edit.as_ref()
    }

    /// Opens the edit slot for `id`, seeding the draft from the item text.
    ///
    /// Returns `false` (and leaves any existing slot alone) when `id` is not
    /// in the local list.
    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        match self.get(id) {
            Some(todo) => {
                self.edit = Some(EditSlot {
                    id,
                    draft: todo.todo.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Replaces the draft text. No-op without an open slot.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(slot) = self.edit.as_mut() {
            slot.draft = text.into();
        }
    }

    /// Clears the edit slot without any network call.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    // Confirmed-state appliers. Only the sync facade calls these, and only
    // with items the server has already acknowledged.

    pub(crate) fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub(crate) fn insert_confirmed(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    pub(crate) fn replace_confirmed(&mut self, todo: Todo) {
        if let Some(existing) = self.todos.iter_mut().find(|item| item.id == todo.id) {
            *existing = todo;
        }
    }

    pub(crate) fn remove_confirmed(&mut self, id: TodoId) {
        self.todos.retain(|item| item.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, TodoListState};
    use todolist_core::Todo;

    fn seeded_state() -> TodoListState {
        let mut state = TodoListState::new();
        let mut done = Todo::new("done item");
        done.status = true;
        state.replace_all(vec![Todo::new("active one"), done, Todo::new("active two")]);
        state
    }

    #[test]
    fn active_and_done_partition_the_list_exactly() {
        let mut state = seeded_state();

        state.set_filter(Filter::Active);
        let active: Vec<_> = state.visible().iter().map(|todo| todo.id).collect();
        state.set_filter(Filter::Done);
        let done: Vec<_> = state.visible().iter().map(|todo| todo.id).collect();
        state.set_filter(Filter::All);
        let all: Vec<_> = state.visible().iter().map(|todo| todo.id).collect();

        assert_eq!(active.len() + done.len(), all.len());
        assert!(active.iter().all(|id| !done.contains(id)));
        assert_eq!(all.len(), state.todos().len());
    }

    #[test]
    fn filtering_never_mutates_the_list() {
        let mut state = seeded_state();
        let before: Vec<_> = state.todos().to_vec();

        state.set_filter(Filter::Done);
        let _ = state.visible();
        state.set_filter(Filter::Active);
        let _ = state.visible();

        assert_eq!(state.todos(), before.as_slice());
    }

    #[test]
    fn begin_edit_seeds_draft_from_item_text() {
        let mut state = seeded_state();
        let id = state.todos()[0].id;

        assert!(state.begin_edit(id));
        let slot = state.editing().unwrap();
        assert_eq!(slot.id, id);
        assert_eq!(slot.draft, "active one");

        state.set_draft("rewritten");
        assert_eq!(state.editing().unwrap().draft, "rewritten");

        state.cancel_edit();
        assert!(state.editing().is_none());
    }

    #[test]
    fn begin_edit_rejects_unknown_id() {
        let mut state = seeded_state();
        let unknown = Todo::new("elsewhere").id;
        assert!(!state.begin_edit(unknown));
        assert!(state.editing().is_none());
    }

    #[test]
    fn at_most_one_edit_slot() {
        let mut state = seeded_state();
        let first = state.todos()[0].id;
        let second = state.todos()[1].id;

        state.begin_edit(first);
        state.begin_edit(second);
        assert_eq!(state.editing().unwrap().id, second);
    }
}
