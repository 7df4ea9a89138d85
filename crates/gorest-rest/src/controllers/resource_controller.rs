//! Resource controllers.
//!
//! Every resource exposes the same eight endpoints under
//! `/api/{collection}`. The handler bodies are generic over the record
//! type; `resource_endpoints!` stamps out the documented per-resource
//! handlers and router that call into them.

use crate::{
    extractors::{ApiJson, RecordId},
    responses::{created, ok, ApiResult, AppError},
};
use axum::{extract::State, http::StatusCode, Json};
use gorest_core::Resource;
use gorest_service::{CountResponse, ImportSummary, ResourceService};
use std::sync::Arc;

type Service<T> = Arc<dyn ResourceService<T>>;

async fn get_one<T: Resource>(
    State(service): State<Service<T>>,
    RecordId(id): RecordId,
) -> ApiResult<T> {
    ok(service.get(id).await?)
}

async fn list<T: Resource>(State(service): State<Service<T>>) -> ApiResult<Vec<T>> {
    ok(service.list().await?)
}

async fn delete_one<T: Resource>(
    State(service): State<Service<T>>,
    RecordId(id): RecordId,
) -> ApiResult<T> {
    ok(service.delete(id).await?)
}

async fn delete_all<T: Resource>(State(service): State<Service<T>>) -> ApiResult<CountResponse> {
    ok(service.delete_all().await?)
}

async fn create<T: Resource>(
    State(service): State<Service<T>>,
    ApiJson(record): ApiJson<T>,
) -> Result<(StatusCode, Json<T>), AppError> {
    Ok(created(service.create(record).await?))
}

async fn update<T: Resource>(
    State(service): State<Service<T>>,
    ApiJson(record): ApiJson<T>,
) -> ApiResult<T> {
    ok(service.update(record).await?)
}

async fn import_one<T: Resource>(
    State(service): State<Service<T>>,
    RecordId(id): RecordId,
) -> Result<(StatusCode, Json<T>), AppError> {
    Ok(created(service.import_one(id).await?))
}

async fn import_all<T: Resource>(State(service): State<Service<T>>) -> ApiResult<ImportSummary> {
    ok(service.import_all().await?)
}

/// Declares a module with the documented handlers and router for one
/// resource. `$collection` must equal the record's `Resource::COLLECTION`.
///
/// Static segments (`all`, `deleteall`, `uploadall`) take priority over
/// the `:id` capture. Creates and updates are accepted with and without a
/// trailing slash.
macro_rules! resource_endpoints {
    ($module:ident, $record:ident, $collection:literal) => {
        pub mod $module {
            use super::*;
            use axum::{
                routing::{delete, get, post},
                Router,
            };
            use gorest_core::{ErrorResponse, $record};

            /// Creates the router for this resource.
            pub fn router<S>(service: Service<$record>) -> Router<S>
            where
                S: Clone + Send + Sync + 'static,
            {
                Router::new()
                    .route(concat!("/api/", $collection, "/all"), get(list))
                    .route(concat!("/api/", $collection, "/deleteall"), delete(delete_all))
                    .route(concat!("/api/", $collection, "/uploadall"), post(import_all))
                    .route(concat!("/api/", $collection, "/upload/:id"), post(import_one))
                    .route(
                        concat!("/api/", $collection, "/:id"),
                        get(get_one).delete(delete_one),
                    )
                    .route(concat!("/api/", $collection, "/"), post(create).put(update))
                    .route(concat!("/api/", $collection), post(create).put(update))
                    .with_state(service)
            }

            #[utoipa::path(
                get,
                path = concat!("/api/", $collection, "/all"),
                tag = $collection,
                operation_id = concat!("list_", $collection),
                responses(
                    (status = 200, description = "Every stored record", body = Vec<$record>)
                )
            )]
            pub async fn list(state: State<Service<$record>>) -> ApiResult<Vec<$record>> {
                super::list(state).await
            }

            #[utoipa::path(
                get,
                path = concat!("/api/", $collection, "/{id}"),
                tag = $collection,
                operation_id = concat!("get_", $collection),
                params(("id" = i64, Path, description = "Record ID")),
                responses(
                    (status = 200, description = "The stored record", body = $record),
                    (status = 400, description = "Malformed ID", body = ErrorResponse),
                    (status = 404, description = "No record with this ID", body = ErrorResponse)
                )
            )]
            pub async fn get_one(
                state: State<Service<$record>>,
                id: RecordId,
            ) -> ApiResult<$record> {
                super::get_one(state, id).await
            }

            #[utoipa::path(
                delete,
                path = concat!("/api/", $collection, "/{id}"),
                tag = $collection,
                operation_id = concat!("delete_", $collection),
                params(("id" = i64, Path, description = "Record ID")),
                responses(
                    (status = 200, description = "The removed record", body = $record),
                    (status = 400, description = "Malformed ID", body = ErrorResponse),
                    (status = 404, description = "No record with this ID", body = ErrorResponse)
                )
            )]
            pub async fn delete_one(
                state: State<Service<$record>>,
                id: RecordId,
            ) -> ApiResult<$record> {
                super::delete_one(state, id).await
            }

            #[utoipa::path(
                delete,
                path = concat!("/api/", $collection, "/deleteall"),
                tag = $collection,
                operation_id = concat!("delete_all_", $collection),
                responses(
                    (status = 200, description = "Number of removed records", body = CountResponse)
                )
            )]
            pub async fn delete_all(state: State<Service<$record>>) -> ApiResult<CountResponse> {
                super::delete_all(state).await
            }

            #[utoipa::path(
                post,
                path = concat!("/api/", $collection, "/"),
                tag = $collection,
                operation_id = concat!("create_", $collection),
                request_body = $record,
                responses(
                    (status = 201, description = "Stored with a new ID", body = $record),
                    (status = 400, description = "Invalid record", body = ErrorResponse)
                )
            )]
            pub async fn create(
                state: State<Service<$record>>,
                record: ApiJson<$record>,
            ) -> Result<(StatusCode, Json<$record>), AppError> {
                super::create(state, record).await
            }

            #[utoipa::path(
                put,
                path = concat!("/api/", $collection, "/"),
                tag = $collection,
                operation_id = concat!("update_", $collection),
                request_body = $record,
                responses(
                    (status = 200, description = "The replaced record", body = $record),
                    (status = 400, description = "Invalid record or unknown ID", body = ErrorResponse)
                )
            )]
            pub async fn update(
                state: State<Service<$record>>,
                record: ApiJson<$record>,
            ) -> ApiResult<$record> {
                super::update(state, record).await
            }

            #[utoipa::path(
                post,
                path = concat!("/api/", $collection, "/upload/{id}"),
                tag = $collection,
                operation_id = concat!("import_", $collection),
                params(("id" = i64, Path, description = "GoREST record ID")),
                responses(
                    (status = 201, description = "Imported under the remote ID", body = $record),
                    (status = 404, description = "Unknown to GoREST", body = ErrorResponse),
                    (status = 502, description = "GoREST unreachable", body = ErrorResponse)
                )
            )]
            pub async fn import_one(
                state: State<Service<$record>>,
                id: RecordId,
            ) -> Result<(StatusCode, Json<$record>), AppError> {
                super::import_one(state, id).await
            }

            #[utoipa::path(
                post,
                path = concat!("/api/", $collection, "/uploadall"),
                tag = $collection,
                operation_id = concat!("import_all_", $collection),
                responses(
                    (status = 200, description = "Pages fetched and records stored", body = ImportSummary),
                    (status = 502, description = "GoREST unreachable", body = ErrorResponse)
                )
            )]
            pub async fn import_all(state: State<Service<$record>>) -> ApiResult<ImportSummary> {
                super::import_all(state).await
            }
        }
    };
}

resource_endpoints!(users, User, "users");
resource_endpoints!(posts, Post, "posts");
resource_endpoints!(comments, Comment, "comments");
resource_endpoints!(todos, ToDo, "todos");

#[cfg(test)]
mod tests {
    use gorest_core::{Comment, Post, Resource, ToDo, User};

    #[test]
    fn test_route_prefixes_match_collections() {
        assert_eq!(User::COLLECTION, "users");
        assert_eq!(Post::COLLECTION, "posts");
        assert_eq!(Comment::COLLECTION, "comments");
        assert_eq!(ToDo::COLLECTION, "todos");
    }
}
