//! User entity.

use crate::{Entity, Resource, ResourceId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user record as exposed by the remote API.
///
/// Missing JSON fields default to blank so that they are reported by
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct User {
    /// Record id; `0` until stored.
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: ResourceId,

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
        message = "Gender cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub gender: String,

    #[validate(custom(
        function = "crate::validation::rules::not_blank",
        message = "Status cannot be left blank."
    ))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
}

impl User {
    /// Creates an unsaved user.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        gender: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: ResourceId::UNASSIGNED,
            name: name.into(),
            email: email.into(),
            gender: gender.into(),
            status: status.into(),
        }
    }
}

impl Entity<ResourceId> for User {
    fn id(&self) -> &ResourceId {
        &self.id
    }
}

impl Resource for User {
    const NAME: &'static str = "User";
    const LABEL: &'static str = "user";
    const COLLECTION: &'static str = "users";

    fn set_id(&mut self, id: ResourceId) {
        self.id = id;
    }
}
