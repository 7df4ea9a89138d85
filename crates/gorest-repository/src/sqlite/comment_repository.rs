//! Comment table mapping.

use super::{SqliteQuery, SqliteRecord, SqliteRepository};
use gorest_core::{Comment, ResourceId};
use sqlx::FromRow;

/// SQLite comment repository.
pub type SqliteCommentRepository = SqliteRepository<Comment>;

#[derive(Debug, FromRow)]
pub struct CommentRow {
    id: i64,
    post_id: i64,
    name: String,
    email: String,
    body: String,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: ResourceId(row.id),
            post_id: ResourceId(row.post_id),
            name: row.name,
            email: row.email,
            body: row.body,
        }
    }
}

impl SqliteRecord for Comment {
    type Row = CommentRow;

    const COLUMNS: &'static [&'static str] = &["post_id", "name", "email", "body"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.post_id.into_inner())
            .bind(self.name.clone())
            .bind(self.email.clone())
            .bind(self.body.clone())
    }
}
