//! Resource service trait definition.

use crate::dto::{CountResponse, ImportSummary};
use async_trait::async_trait;
use gorest_core::{GorestResult, Interface, Resource, ResourceId};

/// Operations exposed for every resource type.
#[async_trait]
pub trait ResourceService<T: Resource>: Interface {
    /// Gets a record by ID.
    async fn get(&self, id: ResourceId) -> GorestResult<T>;

    /// Lists every stored record, ordered by ID.
    async fn list(&self) -> GorestResult<Vec<T>>;

    /// Deletes a record and returns it as it was stored.
    async fn delete(&self, id: ResourceId) -> GorestResult<T>;

    /// Deletes every record.
    async fn delete_all(&self) -> GorestResult<CountResponse>;

    /// Validates and stores a new record; the store assigns the ID.
    async fn create(&self, record: T) -> GorestResult<T>;

    /// Validates and replaces an existing record.
    async fn update(&self, record: T) -> GorestResult<T>;

    /// Fetches one record from the remote API and stores it under its remote ID.
    async fn import_one(&self, id: ResourceId) -> GorestResult<T>;

    /// Fetches every page of the remote collection and stores each page.
    async fn import_all(&self) -> GorestResult<ImportSummary>;
}
