//! Post table mapping.

use super::{SqliteQuery, SqliteRecord, SqliteRepository};
use gorest_core::{Post, ResourceId};
use sqlx::FromRow;

/// SQLite post repository.
pub type SqlitePostRepository = SqliteRepository<Post>;

/// Database row representation of a post.
#[derive(Debug, FromRow)]
pub struct PostRow {
    id: i64,
    user_id: i64,
    title: String,
    body: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: ResourceId(row.id),
            user_id: ResourceId(row.user_id),
            title: row.title,
            body: row.body,
        }
    }
}

impl SqliteRecord for Post {
    type Row = PostRow;

    const COLUMNS: &'static [&'static str] = &["user_id", "title", "body"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.user_id.into_inner())
            .bind(self.title.clone())
            .bind(self.body.clone())
    }
}
