//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify client/server wiring.
//! - Keep output deterministic for quick local sanity checks.

use todolist_client::{HttpTodoApi, TodoClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::var("TODOS_API_BASE")
        .unwrap_or_else(|_| "http://localhost:5000/api".to_string());

    let mut client = TodoClient::new(HttpTodoApi::new(base_url));
    client.load().await?;

    for todo in client.state().todos() {
        let mark = if todo.status { "x" } else { " " };
        println!("[{mark}] {} ({})", todo.todo, todo.id);
    }

    Ok(())
}
