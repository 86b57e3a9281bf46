//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `todos` collection.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Updates replace `todo` and `status` together; there is no partial-field
//!   write path.
//! - Read paths reject invalid persisted state instead of masking it.
//! - List order is insertion order of the collection.

use crate::db::DbError;
use crate::model::todo::{Todo, TodoId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TODO_SELECT_SQL: &str = "SELECT id, todo, status FROM todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for todo persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(TodoId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for todo CRUD operations.
pub trait TodoRepository {
    /// Inserts a new item with `status = false` and a fresh ID.
    ///
    /// Never idempotent: two calls with identical text produce two rows.
    fn create_todo(&self, text: &str) -> RepoResult<Todo>;

    /// Looks up one item by stable ID.
    fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>>;

    /// Returns the whole collection in insertion order.
    fn list_todos(&self) -> RepoResult<Vec<Todo>>;

    /// Replaces both `status` and `todo` on the matched row and returns the
    /// row as re-read after the write.
    fn update_todo(&self, id: TodoId, status: bool, text: &str) -> RepoResult<Todo>;

    /// Permanently removes one item. `NotFound` leaves the store untouched.
    fn delete_todo(&self, id: TodoId) -> RepoResult<()>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn create_todo(&self, text: &str) -> RepoResult<Todo> {
        // Empty text is persisted as-is; the API contract does not trim.
        let todo = Todo::new(text);

        self.conn.execute(
            "INSERT INTO todos (id, todo, status) VALUES (?1, ?2, ?3);",
            params![
                todo.id.to_string(),
                todo.todo.as_str(),
                bool_to_int(todo.status),
            ],
        )?;

        Ok(todo)
    }

    fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn list_todos(&self) -> RepoResult<Vec<Todo>> {
        // rowid tiebreak keeps insertion order stable within one millisecond.
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} ORDER BY created_at ASC, rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();

        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }

    fn update_todo(&self, id: TodoId, status: bool, text: &str) -> RepoResult<Todo> {
        let changed = self.conn.execute(
            "UPDATE todos
             SET
                todo = ?1,
                status = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?3;",
            params![text, bool_to_int(status), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get_todo(id)?
            .ok_or_else(|| RepoError::InvalidData(format!("todo `{id}` missing after update")))
    }

    fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<Todo> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid id value `{id_text}` in todos.id")))?;

    let status = match row.get::<_, i64>("status")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid status value `{other}` in todos.status"
            )));
        }
    };

    Ok(Todo {
        id,
        todo: row.get("todo")?,
        status,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
