//! API response types.

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use gorest_core::{ErrorResponse, GorestError};
use serde::Serialize;
use tracing::error;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub GorestError);

impl From<GorestError> for AppError {
    fn from(err: GorestError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    let body = ErrorResponse {
        code: "METHOD_NOT_ALLOWED".to_string(),
        message: format!("Method {} is not supported for {}", method, uri.path()),
        details: None,
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}
