//! ToDo table mapping.

use super::{SqliteQuery, SqliteRecord, SqliteRepository};
use gorest_core::{ResourceId, ToDo};
use sqlx::FromRow;

/// SQLite to-do repository.
pub type SqliteToDoRepository = SqliteRepository<ToDo>;

/// Database row representation of a to-do.
///
/// `due_on` stays a string so remote timestamps round-trip unchanged.
#[derive(Debug, FromRow)]
pub struct ToDoRow {
    id: i64,
    user_id: i64,
    title: String,
    due_on: String,
    status: String,
}

impl From<ToDoRow> for ToDo {
    fn from(row: ToDoRow) -> Self {
        Self {
            id: ResourceId(row.id),
            user_id: ResourceId(row.user_id),
            title: row.title,
            due_on: row.due_on,
            status: row.status,
        }
    }
}

impl SqliteRecord for ToDo {
    type Row = ToDoRow;

    const COLUMNS: &'static [&'static str] = &["user_id", "title", "due_on", "status"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.user_id.into_inner())
            .bind(self.title.clone())
            .bind(self.due_on.clone())
            .bind(self.status.clone())
    }
}
