//! Common test infrastructure for database integration tests.

use gorest_repository::{DatabasePool, DatabasePoolInterface};
use std::sync::Arc;

/// Test database wrapper.
///
/// Each instance owns a private in-memory SQLite database with the
/// schema applied, so tests never share rows.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a new, migrated, empty database.
    pub async fn new() -> Self {
        let pool = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns the pool as the interface repositories depend on.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        Arc::clone(&self.pool) as Arc<dyn DatabasePoolInterface>
    }
}
