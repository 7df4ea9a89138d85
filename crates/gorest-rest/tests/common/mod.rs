//! Full-stack test harness: in-memory SQLite plus a mock GoREST server.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use gorest_config::{RemoteConfig, ServerConfig};
use gorest_core::{Comment, Post, Repository, ToDo, User};
use gorest_remote::GoRestClient;
use gorest_repository::{
    DatabaseHealthCheck, DatabasePool, DatabasePoolInterface, SqliteCommentRepository,
    SqlitePostRepository, SqliteToDoRepository, SqliteUserRepository,
};
use gorest_rest::{create_router, AppState};
use gorest_service::{
    CommentValidator, ImportSettings, PostValidator, ResourceServiceImpl, ToDoValidator,
    UserValidator,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::MockServer;

/// Router wired to a private database and a mock remote.
pub struct TestApp {
    pub router: Router,
    pub remote: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_import_settings(ImportSettings::default()).await
    }

    pub async fn with_import_settings(import: ImportSettings) -> Self {
        let remote = MockServer::start().await;
        let pool: Arc<dyn DatabasePoolInterface> = Arc::new(
            DatabasePool::in_memory()
                .await
                .expect("Failed to open in-memory database"),
        );

        let client = Arc::new(
            GoRestClient::new(&RemoteConfig {
                base_url: remote.uri(),
                timeout_secs: 5,
                ..RemoteConfig::default()
            })
            .expect("Failed to build client"),
        );

        let users: Arc<dyn Repository<User>> =
            Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
        let posts: Arc<dyn Repository<Post>> =
            Arc::new(SqlitePostRepository::new(Arc::clone(&pool)));
        let comments: Arc<dyn Repository<Comment>> =
            Arc::new(SqliteCommentRepository::new(Arc::clone(&pool)));
        let todos: Arc<dyn Repository<ToDo>> =
            Arc::new(SqliteToDoRepository::new(Arc::clone(&pool)));

        let state = AppState::new(
            Arc::new(ResourceServiceImpl::new(
                Arc::clone(&users),
                Arc::new(UserValidator::new(Arc::clone(&users))),
                Arc::clone(&client),
                import,
            )),
            Arc::new(ResourceServiceImpl::new(
                Arc::clone(&posts),
                Arc::new(PostValidator::new(Arc::clone(&posts), Arc::clone(&users))),
                Arc::clone(&client),
                import,
            )),
            Arc::new(ResourceServiceImpl::new(
                Arc::clone(&comments),
                Arc::new(CommentValidator::new(Arc::clone(&comments), Arc::clone(&posts))),
                Arc::clone(&client),
                import,
            )),
            Arc::new(ResourceServiceImpl::new(
                Arc::clone(&todos),
                Arc::new(ToDoValidator::new(Arc::clone(&todos), Arc::clone(&users))),
                Arc::clone(&client),
                import,
            )),
        )
        .with_health_check(Arc::new(DatabaseHealthCheck::new(pool)));

        Self {
            router: create_router(state, &ServerConfig::default()),
            remote,
        }
    }

    /// Sends a request and returns the status and the JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}
