//! Client-side error taxonomy for synchronization calls.

use std::error::Error;
use std::fmt::{Display, Formatter};
use todolist_core::TodoId;

/// Failure of one client/server round trip or its local precondition.
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, send, body decode).
    Transport(reqwest::Error),
    /// Server answered with a non-success status and a free-text message.
    Api { status: u16, message: String },
    /// Toggle target is missing from the local mirror, so there is no text
    /// to resend; no network call made.
    UnknownItem(TodoId),
    /// No edit slot, or the draft is empty after trimming; no network call
    /// made.
    NothingToCommit,
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Api { status, message } => write!(f, "server error {status}: {message}"),
            Self::UnknownItem(id) => write!(f, "item not in local list: {id}"),
            Self::NothingToCommit => write!(f, "no committable edit in progress"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Api { .. } => None,
            Self::UnknownItem(_) => None,
            Self::NothingToCommit => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}
