//! Application builder.

use crate::di::{app_state, build_proxy_module, DatabaseResolver, ProxyModule};
use gorest_config::AppConfig;
use gorest_core::{GorestError, GorestResult};
use gorest_repository::DatabasePoolInterface;
use gorest_rest::create_router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Wires the components and binds the listener.
    pub async fn build(self) -> GorestResult<Application> {
        let config = self.config.unwrap_or_default();
        let module = build_proxy_module(&config).await?;

        let addr = config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| GorestError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        Ok(Application {
            config,
            module,
            listener,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A wired application bound to its listener.
pub struct Application {
    config: AppConfig,
    module: Arc<ProxyModule>,
    listener: TcpListener,
}

impl Application {
    /// Returns the bound port, useful when configured with port 0.
    pub fn port(&self) -> GorestResult<u16> {
        self.listener
            .local_addr()
            .map(|addr| addr.port())
            .map_err(|e| GorestError::Internal(format!("Listener has no address: {}", e)))
    }

    /// Serves requests until `shutdown` resolves, then closes the pool.
    pub async fn run_until<F>(self, shutdown: F) -> GorestResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = create_router(app_state(&self.module), &self.config.server);
        info!("Starting REST server on http://{}", self.config.server.addr());

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| GorestError::Internal(format!("REST server error: {}", e)))?;

        self.module.database_pool().close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_builder_default() {
        let builder = AppBuilder::default();
        assert!(builder.config.is_none());
    }

    #[test]
    fn test_app_builder_with_config() {
        let builder = AppBuilder::new().with_config(AppConfig::default());
        assert!(builder.config.is_some());
    }
}
