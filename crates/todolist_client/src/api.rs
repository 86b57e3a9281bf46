//! HTTP transport for the todos API.
//!
//! # Responsibility
//! - Implement the four REST calls against a running todolist server.
//! - Translate non-success statuses into `ClientError::Api` with the
//!   server's free-text message.
//!
//! # Invariants
//! - No retries, no timeouts beyond reqwest defaults; a failed call is
//!   reported and dropped.

use serde_json::{json, Value};
use todolist_core::{Todo, TodoId};

use crate::error::ClientError;

/// Async transport contract for task synchronization.
///
/// Abstracting the wire calls keeps `TodoClient` testable against an
/// in-memory fake without a running server.
// The client drives every call from one task; Send bounds are left to the
// concrete implementation.
#[allow(async_fn_in_trait)]
pub trait TodoTransport {
    /// GET the full collection.
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ClientError>;

    /// POST one new item; the server assigns the ID.
    async fn create_todo(&self, text: &str) -> Result<Todo, ClientError>;

    /// PUT both fields of one item; returns the item after replacement.
    async fn update_todo(&self, id: TodoId, status: bool, text: &str)
        -> Result<Todo, ClientError>;

    /// DELETE one item.
    async fn delete_todo(&self, id: TodoId) -> Result<(), ClientError>;
}

/// reqwest-backed transport.
pub struct HttpTodoApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTodoApi {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => "unknown error".to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl TodoTransport for HttpTodoApi {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.http.get(self.url("/todos")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_todo(&self, text: &str) -> Result<Todo, ClientError> {
        let response = self
            .http
            .post(self.url("/todos"))
            .json(&json!({ "todo": text }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_todo(
        &self,
        id: TodoId,
        status: bool,
        text: &str,
    ) -> Result<Todo, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/todos/{id}")))
            .json(&json!({ "status": status, "todo": text }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
