//! User table mapping.

use super::{SqliteQuery, SqliteRecord, SqliteRepository};
use gorest_core::{ResourceId, User};
use sqlx::FromRow;

/// SQLite user repository.
pub type SqliteUserRepository = SqliteRepository<User>;

/// Database row representation of a user.
#[derive(Debug, FromRow)]
pub struct UserRow {
    id: i64,
    name: String,
    email: String,
    gender: String,
    status: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: ResourceId(row.id),
            name: row.name,
            email: row.email,
            gender: row.gender,
            status: row.status,
        }
    }
}

impl SqliteRecord for User {
    type Row = UserRow;

    const COLUMNS: &'static [&'static str] = &["name", "email", "gender", "status"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.email.clone())
            .bind(self.gender.clone())
            .bind(self.status.clone())
    }
}
