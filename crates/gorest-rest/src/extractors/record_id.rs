//! Record id path extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use gorest_core::{GorestError, ResourceId};

/// Extracts the `:id` path segment as a [`ResourceId`].
///
/// A segment that is not an integer is rejected with 400 and the message
/// `"{raw} is not a valid ID."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub ResourceId);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| GorestError::validation(rejection.body_text()))?;

        Ok(Self(ResourceId::parse(&raw)?))
    }
}
