//! Client-side synchronization for the todolist service.
//!
//! The rendering layer is out of scope; this crate owns everything between
//! user intent and confirmed server state: the local list mirror, the view
//! filter, the single-item edit slot, and the REST transport. Every mutation
//! round-trips through the server before the mirror changes.

pub mod api;
pub mod error;
pub mod state;
pub mod sync;

pub use api::{HttpTodoApi, TodoTransport};
pub use error::ClientError;
pub use state::{EditSlot, Filter, TodoListState};
pub use sync::TodoClient;
