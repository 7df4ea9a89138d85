//! Typed record identifiers.

use crate::{GorestError, GorestResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for record IDs.
///
/// Records use the remote API's integer ids; `0` means "not yet assigned".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct ResourceId(pub i64);

impl ResourceId {
    /// The unassigned id.
    pub const UNASSIGNED: Self = Self(0);

    /// Parses a record ID from a path segment.
    ///
    /// Anything that is not a base-10 integer is rejected with a
    /// validation error naming the offending input.
    pub fn parse(raw: &str) -> GorestResult<Self> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| GorestError::validation(format!("{} is not a valid ID.", raw)))
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Returns true if the id has not been assigned yet.
    #[must_use]
    pub const fn is_unassigned(self) -> bool {
        self.0 == 0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ResourceId> for i64 {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_id() {
        assert_eq!(ResourceId::parse("42").unwrap(), ResourceId(42));
        assert_eq!(ResourceId::parse("-7").unwrap().into_inner(), -7);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = ResourceId::parse("abc").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "abc is not a valid ID.");

        assert!(ResourceId::parse("").is_err());
        assert!(ResourceId::parse("1.5").is_err());
        assert!(ResourceId::parse(" 1").is_err());
    }

    #[test]
    fn test_unassigned() {
        assert!(ResourceId::UNASSIGNED.is_unassigned());
        assert!(!ResourceId::from(3).is_unassigned());
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceId(1234).to_string(), "1234");
    }
}
