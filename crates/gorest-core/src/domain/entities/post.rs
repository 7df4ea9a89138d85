//! Post entity.

use crate::{Entity, Resource, ResourceId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A post written by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: ResourceId,

    /// Author; must reference a stored user when created locally.
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
        message = "Body cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub body: String,
}

impl Post {
    /// Creates an unsaved post.
    #[must_use]
    pub fn new(user_id: ResourceId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: ResourceId::UNASSIGNED,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Entity<ResourceId> for Post {
    fn id(&self) -> &ResourceId {
        &self.id
    }
}

impl Resource for Post {
    const NAME: &'static str = "Post";
    const LABEL: &'static str = "post";
    const COLLECTION: &'static str = "posts";

    fn set_id(&mut self, id: ResourceId) {
        self.id = id;
    }
}
