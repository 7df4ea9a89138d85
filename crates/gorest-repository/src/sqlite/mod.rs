//! SQLite repository implementations.
//!
//! Each resource describes its table through [`SqliteRecord`]; the CRUD
//! and upsert statements are shared by [`SqliteRepository`].

mod comment_repository;
mod post_repository;
mod todo_repository;
mod user_repository;

pub use comment_repository::*;
pub use post_repository::*;
pub use todo_repository::*;
pub use user_repository::*;

use crate::DatabasePoolInterface;
use async_trait::async_trait;
use gorest_core::{GorestResult, Repository, Resource, ResourceId};
use shaku::Component;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{FromRow, Row};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// A query with its id parameter already bound.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Table mapping for a resource stored in SQLite.
///
/// The table is named after [`Resource::COLLECTION`] and keyed by an
/// `INTEGER PRIMARY KEY` column called `id`.
pub trait SqliteRecord: Resource {
    /// Row shape returned by `SELECT id, <COLUMNS>`.
    type Row: for<'r> FromRow<'r, SqliteRow> + Into<Self> + Send + Unpin;

    /// Data columns in bind order, excluding `id`.
    const COLUMNS: &'static [&'static str];

    /// Binds the values for [`Self::COLUMNS`] in order.
    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

fn select_sql<T: SqliteRecord>() -> String {
    format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::COLLECTION)
}

/// `INSERT ... ON CONFLICT(id) DO UPDATE`, binding NULL for the id lets
/// SQLite allocate the next rowid.
fn upsert_sql<T: SqliteRecord>(returning: bool) -> String {
    let placeholders = vec!["?"; T::COLUMNS.len() + 1].join(", ");
    let updates = T::COLUMNS
        .iter()
        .map(|column| format!("{column} = excluded.{column}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} (id, {}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}{}",
        T::COLLECTION,
        T::COLUMNS.join(", "),
        placeholders,
        updates,
        if returning { " RETURNING id" } else { "" }
    )
}

fn bind_id(id: ResourceId) -> Option<i64> {
    (!id.is_unassigned()).then_some(id.into_inner())
}

/// SQLite repository for any [`SqliteRecord`].
#[derive(Component)]
#[shaku(interface = Repository<T>)]
pub struct SqliteRepository<T: SqliteRecord> {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    #[shaku(default)]
    _record: PhantomData<fn() -> T>,
}

impl<T: SqliteRecord> SqliteRepository<T> {
    /// Creates a new repository over the shared pool.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<T: SqliteRecord> Clone for SqliteRepository<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.pool))
    }
}

#[async_trait]
impl<T: SqliteRecord> Repository<T> for SqliteRepository<T> {
    async fn find_by_id(&self, id: ResourceId) -> GorestResult<Option<T>> {
        debug!("Finding {} by id: {}", T::LABEL, id);

        let sql = format!("{} WHERE id = ?", select_sql::<T>());
        let row = sqlx::query_as::<_, T::Row>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> GorestResult<Vec<T>> {
        debug!("Finding all {}", T::COLLECTION);

        let sql = format!("{} ORDER BY id", select_sql::<T>());
        let rows = sqlx::query_as::<_, T::Row>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, entity: &T) -> GorestResult<T> {
        debug!("Saving {} with id: {}", T::LABEL, entity.id());

        let sql = upsert_sql::<T>(true);
        let row = entity
            .bind_columns(sqlx::query(&sql).bind(bind_id(*entity.id())))
            .fetch_one(self.pool.inner())
            .await?;
        let id: i64 = row.try_get("id")?;

        Ok(entity.clone().with_id(ResourceId(id)))
    }

    async fn save_all(&self, entities: &[T]) -> GorestResult<u64> {
        debug!("Saving {} {}", entities.len(), T::COLLECTION);

        let sql = upsert_sql::<T>(false);
        let mut tx = self.pool.inner().begin().await?;
        let mut written = 0;
        for entity in entities {
            written += entity
                .bind_columns(sqlx::query(&sql).bind(bind_id(*entity.id())))
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;

        info!("Stored {} {}", written, T::COLLECTION);
        Ok(written)
    }

    async fn delete(&self, id: ResourceId) -> GorestResult<bool> {
        debug!("Deleting {} with id: {}", T::LABEL, id);

        let sql = format!("DELETE FROM {} WHERE id = ?", T::COLLECTION);
        let result = sqlx::query(&sql)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> GorestResult<u64> {
        debug!("Deleting all {}", T::COLLECTION);

        let sql = format!("DELETE FROM {}", T::COLLECTION);
        let result = sqlx::query(&sql).execute(self.pool.inner()).await?;

        Ok(result.rows_affected())
    }

    async fn exists(&self, id: ResourceId) -> GorestResult<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ? LIMIT 1", T::COLLECTION);
        let result: Option<i64> = sqlx::query_scalar(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn count(&self) -> GorestResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::COLLECTION);
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
