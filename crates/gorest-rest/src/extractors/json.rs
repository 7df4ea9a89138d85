//! JSON body extractor with uniform error responses.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use gorest_core::GorestError;
use serde::de::DeserializeOwned;

/// JSON extractor whose rejections use the API error body.
///
/// Field validation is left to the service, which also checks references
/// against the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject)?;

        Ok(Self(value))
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    AppError(GorestError::validation(format!(
        "Invalid JSON: {}",
        rejection.body_text()
    )))
}
