//! Main application router.

use crate::{
    controllers::{health_controller, resource_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    responses::method_not_allowed,
    state::AppState,
};
use axum::{
    extract::DefaultBodyLimit, http::HeaderValue, middleware, routing::get, Json, Router,
};
use gorest_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router: Router<AppState> = Router::new()
        .merge(resource_controller::users::router(state.users.clone()))
        .merge(resource_controller::posts::router(state.posts.clone()))
        .merge(resource_controller::comments::router(state.comments.clone()))
        .merge(resource_controller::todos::router(state.todos.clone()));

    let router = Router::new()
        .merge(health_controller::router())
        .merge(api_router)
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/", get(root))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with resource endpoints under /api and OpenAPI at /api-docs/openapi.json");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }
    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "GoREST Proxy API"
}
