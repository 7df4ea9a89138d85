//! Core traits shared by the storage, service, and HTTP layers.

use crate::{GorestResult, Resource, ResourceId};
use async_trait::async_trait;
use shaku::Interface;

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &ID;
}

/// Storage operations for a single resource table.
///
/// `save` follows upsert semantics: a record whose id is unassigned gets a
/// fresh id from the store, while a record carrying an id replaces any row
/// with that id or is inserted under it.
#[async_trait]
pub trait Repository<T: Resource>: Interface {
    /// Finds a record by its ID.
    async fn find_by_id(&self, id: ResourceId) -> GorestResult<Option<T>>;

    /// Returns every stored record ordered by id.
    async fn find_all(&self) -> GorestResult<Vec<T>>;

    /// Inserts or replaces a record and returns it as stored.
    async fn save(&self, entity: &T) -> GorestResult<T>;

    /// Upserts a batch atomically; returns the number of rows written.
    async fn save_all(&self, entities: &[T]) -> GorestResult<u64>;

    /// Deletes a record by its ID.
    async fn delete(&self, id: ResourceId) -> GorestResult<bool>;

    /// Deletes every record; returns how many were removed.
    async fn delete_all(&self) -> GorestResult<u64>;

    /// Checks if a record exists by its ID.
    async fn exists(&self, id: ResourceId) -> GorestResult<bool>;

    /// Counts all records.
    async fn count(&self) -> GorestResult<u64>;
}

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is degraded but functional.
    Degraded(String),
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Returns true if the status is unhealthy.
    #[must_use]
    pub const fn is_unhealthy(&self) -> bool {
        matches!(self, Self::Unhealthy(_))
    }

    /// Returns the label used in health responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded(_) => "degraded",
            Self::Unhealthy(_) => "unhealthy",
        }
    }
}
