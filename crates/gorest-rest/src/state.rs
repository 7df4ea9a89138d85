//! Application state for Axum handlers.

use gorest_core::{Comment, HealthCheck, Post, ToDo, User};
use gorest_service::ResourceService;
use std::sync::Arc;

/// Services shared with the handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service.
    pub users: Arc<dyn ResourceService<User>>,
    /// Post service.
    pub posts: Arc<dyn ResourceService<Post>>,
    /// Comment service.
    pub comments: Arc<dyn ResourceService<Comment>>,
    /// ToDo service.
    pub todos: Arc<dyn ResourceService<ToDo>>,
    /// Checks run by the readiness endpoint.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state without health checks.
    pub fn new(
        users: Arc<dyn ResourceService<User>>,
        posts: Arc<dyn ResourceService<Post>>,
        comments: Arc<dyn ResourceService<Comment>>,
        todos: Arc<dyn ResourceService<ToDo>>,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
            todos,
            health_checks: Vec::new(),
        }
    }

    /// Adds a readiness check.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}
