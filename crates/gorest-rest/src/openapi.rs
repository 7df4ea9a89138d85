//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{CheckResult, HealthResponse, ReadinessResponse};
use gorest_core::{Comment, ErrorResponse, FieldError, Post, ResourceId, ToDo, User};
use gorest_service::{CountResponse, ImportSummary};
use utoipa::OpenApi;

/// OpenAPI documentation for the GoREST proxy.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GoREST Proxy API",
        version = "1.0.0",
        description = "CRUD proxy for GoREST users, posts, comments and todos",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
        crate::controllers::resource_controller::users::list,
        crate::controllers::resource_controller::users::get_one,
        crate::controllers::resource_controller::users::delete_one,
        crate::controllers::resource_controller::users::delete_all,
        crate::controllers::resource_controller::users::create,
        crate::controllers::resource_controller::users::update,
        crate::controllers::resource_controller::users::import_one,
        crate::controllers::resource_controller::users::import_all,
        crate::controllers::resource_controller::posts::list,
        crate::controllers::resource_controller::posts::get_one,
        crate::controllers::resource_controller::posts::delete_one,
        crate::controllers::resource_controller::posts::delete_all,
        crate::controllers::resource_controller::posts::create,
        crate::controllers::resource_controller::posts::update,
        crate::controllers::resource_controller::posts::import_one,
        crate::controllers::resource_controller::posts::import_all,
        crate::controllers::resource_controller::comments::list,
        crate::controllers::resource_controller::comments::get_one,
        crate::controllers::resource_controller::comments::delete_one,
        crate::controllers::resource_controller::comments::delete_all,
        crate::controllers::resource_controller::comments::create,
        crate::controllers::resource_controller::comments::update,
        crate::controllers::resource_controller::comments::import_one,
        crate::controllers::resource_controller::comments::import_all,
        crate::controllers::resource_controller::todos::list,
        crate::controllers::resource_controller::todos::get_one,
        crate::controllers::resource_controller::todos::delete_one,
        crate::controllers::resource_controller::todos::delete_all,
        crate::controllers::resource_controller::todos::create,
        crate::controllers::resource_controller::todos::update,
        crate::controllers::resource_controller::todos::import_one,
        crate::controllers::resource_controller::todos::import_all,
    ),
    components(
        schemas(
            ResourceId,
            User,
            Post,
            Comment,
            ToDo,
            CountResponse,
            ImportSummary,
            ErrorResponse,
            FieldError,
            HealthResponse,
            ReadinessResponse,
            CheckResult,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "GoREST users"),
        (name = "posts", description = "Posts written by users"),
        (name = "comments", description = "Comments on posts"),
        (name = "todos", description = "ToDo items owned by users")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_record_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;

        for name in ["User", "Post", "Comment", "ToDo", "ErrorResponse", "ImportSummary"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
        assert!(doc.paths.paths.contains_key("/ready"));
    }

    #[test]
    fn test_document_lists_resource_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for collection in ["users", "posts", "comments", "todos"] {
            for suffix in ["/", "/all", "/deleteall", "/uploadall", "/upload/{id}", "/{id}"] {
                let path = format!("/api/{collection}{suffix}");
                assert!(paths.contains_key(&path), "missing path {path}");
            }
        }

        let item = &paths["/api/users/{id}"];
        assert!(item.get.is_some() && item.delete.is_some());
        let item = &paths["/api/todos/"];
        assert!(item.post.is_some() && item.put.is_some());

        let operations: usize = paths
            .values()
            .map(|item| {
                [&item.get, &item.post, &item.put, &item.delete]
                    .iter()
                    .filter(|op| op.is_some())
                    .count()
            })
            .sum();
        assert_eq!(operations, 32 + 3);
    }
}
