//! Resource abstraction shared by every record type.

use crate::{Entity, ResourceId};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use validator::Validate;

/// A record type exposed under `/api/{COLLECTION}` and importable from
/// the remote API at `/{COLLECTION}`.
///
/// The associated constants drive routing, SQL table names, remote paths,
/// and the wording of client-facing messages.
pub trait Resource:
    Entity<ResourceId>
    + Clone
    + Debug
    + Default
    + Serialize
    + DeserializeOwned
    + Validate
    + Send
    + Sync
    + 'static
{
    /// Display name, e.g. `"ToDo"`.
    const NAME: &'static str;

    /// Lowercase label used in validation messages, e.g. `"todo"`.
    const LABEL: &'static str;

    /// Collection segment used in routes and remote paths, e.g. `"todos"`.
    const COLLECTION: &'static str;

    /// Replaces the record id.
    fn set_id(&mut self, id: ResourceId);

    /// Returns a copy of the record with the given id.
    #[must_use]
    fn with_id(mut self, id: ResourceId) -> Self {
        self.set_id(id);
        self
    }
}
