//! ToDo entity.

use crate::{Entity, Resource, ResourceId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A to-do item owned by a user.
///
/// `due_on` is kept as the remote API's timestamp string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ToDo {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: ResourceId,

    #[validate(custom(
        function = "crate::validation::rules::assigned",
        message = "User_ID cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_id: ResourceId,

    #[validate(custom(
        function = "crate::validation::rules::not_blank",
        message = "Title cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,

    #[validate(custom(
        function = "crate::validation::rules::not_blank",
        message = "Due_On cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub due_on: String,

    #[validate(custom(
        function = "crate::validation::rules::not_blank",
        message = "Status cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
}

impl ToDo {
    /// Creates an unsaved to-do.
    #[must_use]
    pub fn new(
        user_id: ResourceId,
        title: impl Into<String>,
        due_on: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: ResourceId::UNASSIGNED,
            user_id,
            title: title.into(),
            due_on: due_on.into(),
            status: status.into(),
        }
    }
}

impl Entity<ResourceId> for ToDo {
    fn id(&self) -> &ResourceId {
        &self.id
    }
}

impl Resource for ToDo {
    const NAME: &'static str = "ToDo";
    const LABEL: &'static str = "todo";
    const COLLECTION: &'static str = "todos";

    fn set_id(&mut self, id: ResourceId) {
        self.id = id;
    }
}
