//! HTTP error mapping for the todos API.
//!
//! # Responsibility
//! - Map service failures onto the observed wire contract: HTTP status plus
//!   a free-text `message` (and `error` detail for store failures).
//!
//! # Invariants
//! - Store failures are logged and answered with 500; they never crash the
//!   process.
//! - There is no structured error code on the wire beyond the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt::Display;
use todolist_core::RepoError;

/// JSON error body: `{ "message": ..., "error": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request-level API failure.
#[derive(Debug)]
pub enum ApiError {
    /// Path identifier failed parsing; raised before any store access.
    InvalidId,
    /// Well-formed identifier with no matching document.
    NotFound,
    /// Any store-layer failure; `context` is the operation-specific message.
    Store {
        context: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn store(context: &'static str, err: impl Display) -> Self {
        Self::Store {
            context,
            detail: err.to_string(),
        }
    }

    /// Maps repository errors onto the wire contract for one operation.
    pub fn from_repo(context: &'static str, err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => Self::NotFound,
            other => Self::store(context, other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidId => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Invalid ID format".to_string(),
                    error: None,
                },
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message: "Todo not found".to_string(),
                    error: None,
                },
            ),
            Self::Store { context, detail } => {
                log::error!(
                    "event=store_error module=server status=error context={context} error={detail}"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: context.to_string(),
                        error: Some(detail),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
