//! Comment entity.

use crate::{Entity, Resource, ResourceId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A comment left on a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: ResourceId,

    #[validate(custom(
        function = "crate::validation::rules::assigned",
        message = "Post_ID cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub post_id: ResourceId,

    #[validate(custom(
        function = "crate::validation::rules::not_blank",
        message = "Name cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,

    #[validate(custom(
        function = "crate::validation::rules::not_blank",
        message = "Email cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub email: String,

    #[validate(custom(
        function = "crate::validation::rules::not_blank",
        message = "Body cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub body: String,
}

impl Comment {
    /// Creates an unsaved comment.
    #[must_use]
    pub fn new(
        post_id: ResourceId,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: ResourceId::UNASSIGNED,
            post_id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }
}

impl Entity<ResourceId> for Comment {
    fn id(&self) -> &ResourceId {
        &self.id
    }
}

impl Resource for Comment {
    const NAME: &'static str = "Comment";
    const LABEL: &'static str = "comment";
    const COLLECTION: &'static str = "comments";

    fn set_id(&mut self, id: ResourceId) {
        self.id = id;
    }
}
