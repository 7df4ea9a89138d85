//! The remote record source consumed by the import operations.

use async_trait::async_trait;
use gorest_core::{GorestResult, Resource, ResourceId};

/// One page of remote records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePage<T> {
    /// Records on this page, in remote order.
    pub items: Vec<T>,
    /// Total number of pages reported by the remote.
    pub total_pages: u32,
}

impl<T> RemotePage<T> {
    /// Creates a page.
    #[must_use]
    pub fn new(items: Vec<T>, total_pages: u32) -> Self {
        Self { items, total_pages }
    }
}

/// A source of records that can be imported into the local store.
#[async_trait]
pub trait RemoteSource: Send + Sync + 'static {
    /// Fetches a single record; a missing record is `GorestError::NotFound`.
    async fn fetch_one<T: Resource>(&self, id: ResourceId) -> GorestResult<T>;

    /// Fetches one page (1-based) of the resource collection.
    async fn fetch_page<T: Resource>(&self, page: u32) -> GorestResult<RemotePage<T>>;
}
