//! Dependency injection module using Shaku.
//!
//! `ProxyModule` holds one SQLite pool, a repository per table, a
//! validator per resource that can see the tables it references, and a
//! service per resource sharing one GoREST client.

use gorest_config::AppConfig;
use gorest_core::{Comment, GorestResult, HealthCheck, Post, Resource, ToDo, User};
use gorest_remote::GoRestClient;
use gorest_repository::{
    create_pool, DatabaseHealthCheck, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    SqliteCommentRepository, SqlitePostRepository, SqliteToDoRepository, SqliteUserRepository,
};
use gorest_rest::AppState;
use gorest_service::{
    CommentValidator, ImportSettings, PostValidator, ResourceService, ResourceServiceImpl,
    ResourceServiceImplParameters, ToDoValidator, UserValidator,
};
use shaku::{module, HasComponent};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

pub type UserServiceComponent = ResourceServiceImpl<User, GoRestClient>;
pub type PostServiceComponent = ResourceServiceImpl<Post, GoRestClient>;
pub type CommentServiceComponent = ResourceServiceImpl<Comment, GoRestClient>;
pub type ToDoServiceComponent = ResourceServiceImpl<ToDo, GoRestClient>;

module! {
    pub ProxyModule {
        components = [
            DatabasePool,
            SqliteUserRepository,
            SqlitePostRepository,
            SqliteCommentRepository,
            SqliteToDoRepository,
            UserValidator,
            PostValidator,
            CommentValidator,
            ToDoValidator,
            UserServiceComponent,
            PostServiceComponent,
            CommentServiceComponent,
            ToDoServiceComponent,
        ],
        providers = [],
    }
}

/// Opens the database from configuration and builds the module.
pub async fn build_proxy_module(config: &AppConfig) -> GorestResult<Arc<ProxyModule>> {
    let db_pool = create_pool(&config.database).await?;
    let client = Arc::new(GoRestClient::new(&config.remote)?);

    info!("Importing from {}", client.base_url());
    Ok(build_with_components(
        &db_pool,
        client,
        ImportSettings::from(&config.remote),
    ))
}

/// Builds the module around an existing pool and remote client.
pub fn build_with_components(
    db_pool: &DatabasePool,
    client: Arc<GoRestClient>,
    import: ImportSettings,
) -> Arc<ProxyModule> {
    let module = ProxyModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<UserServiceComponent>(service_parameters(&client, import))
        .with_component_parameters::<PostServiceComponent>(service_parameters(&client, import))
        .with_component_parameters::<CommentServiceComponent>(service_parameters(&client, import))
        .with_component_parameters::<ToDoServiceComponent>(service_parameters(&client, import))
        .build();

    Arc::new(module)
}

fn service_parameters<T: Resource>(
    client: &Arc<GoRestClient>,
    import: ImportSettings,
) -> ResourceServiceImplParameters<T, GoRestClient> {
    ResourceServiceImplParameters {
        remote: Arc::clone(client),
        import,
        _resource: PhantomData,
    }
}

/// Resolves the resource services.
pub trait ServiceResolver {
    fn user_service(&self) -> Arc<dyn ResourceService<User>>;
    fn post_service(&self) -> Arc<dyn ResourceService<Post>>;
    fn comment_service(&self) -> Arc<dyn ResourceService<Comment>>;
    fn todo_service(&self) -> Arc<dyn ResourceService<ToDo>>;
}

/// Resolves infrastructure components.
pub trait DatabaseResolver {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl ServiceResolver for ProxyModule {
    fn user_service(&self) -> Arc<dyn ResourceService<User>> {
        self.resolve()
    }

    fn post_service(&self) -> Arc<dyn ResourceService<Post>> {
        self.resolve()
    }

    fn comment_service(&self) -> Arc<dyn ResourceService<Comment>> {
        self.resolve()
    }

    fn todo_service(&self) -> Arc<dyn ResourceService<ToDo>> {
        self.resolve()
    }
}

impl DatabaseResolver for ProxyModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

/// Readiness checks for the wired components.
pub fn health_checks(module: &ProxyModule) -> Vec<Arc<dyn HealthCheck>> {
    vec![Arc::new(DatabaseHealthCheck::new(module.database_pool()))]
}

/// Builds the handler state from the module's services.
pub fn app_state(module: &ProxyModule) -> AppState {
    health_checks(module).into_iter().fold(
        AppState::new(
            module.user_service(),
            module.post_service(),
            module.comment_service(),
            module.todo_service(),
        ),
        AppState::with_health_check,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gorest_config::RemoteConfig;
    use gorest_core::{Repository, ResourceId};
    use gorest_service::ResourceValidator;

    async fn module() -> Arc<ProxyModule> {
        let pool = DatabasePool::in_memory().await.unwrap();
        let client = Arc::new(GoRestClient::new(&RemoteConfig::default()).unwrap());
        build_with_components(&pool, client, ImportSettings::default())
    }

    #[test]
    fn test_module_provides_every_interface() {
        fn _assert_has_user_service<M: HasComponent<dyn ResourceService<User>>>() {}
        fn _assert_has_todo_service<M: HasComponent<dyn ResourceService<ToDo>>>() {}
        fn _assert_has_post_repository<M: HasComponent<dyn Repository<Post>>>() {}
        fn _assert_has_comment_validator<M: HasComponent<dyn ResourceValidator<Comment>>>() {}
        fn _assert_has_pool<M: HasComponent<dyn DatabasePoolInterface>>() {}

        _assert_has_user_service::<ProxyModule>();
        _assert_has_todo_service::<ProxyModule>();
        _assert_has_post_repository::<ProxyModule>();
        _assert_has_comment_validator::<ProxyModule>();
        _assert_has_pool::<ProxyModule>();
    }

    #[test]
    fn test_resolver_traits_are_object_safe() {
        fn _use_service_resolver(_r: &dyn ServiceResolver) {}
        fn _use_database_resolver(_r: &dyn DatabaseResolver) {}
    }

    #[tokio::test]
    async fn test_components_are_singletons() {
        let module = module().await;

        let first: Arc<dyn Repository<User>> = module.resolve();
        let second: Arc<dyn Repository<User>> = module.resolve();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&module.user_service(), &module.user_service()));
    }

    #[tokio::test]
    async fn test_services_share_one_store() {
        let module = module().await;

        let user = module
            .user_service()
            .create(User::new("Ada", "ada@example.com", "female", "active"))
            .await
            .unwrap();
        let post = module
            .post_service()
            .create(Post::new(user.id, "Hi", "There"))
            .await
            .unwrap();

        assert_eq!(post.user_id, ResourceId(1));
        assert_eq!(module.post_service().list().await.unwrap().len(), 1);

        let users: Arc<dyn Repository<User>> = module.resolve();
        assert!(users.exists(user.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_post_validator_sees_user_table() {
        let module = module().await;

        let orphan = module
            .post_service()
            .create(Post::new(ResourceId(9), "Hi", "There"))
            .await;
        assert!(orphan.is_err());
    }

    #[tokio::test]
    async fn test_app_state_has_database_check() {
        let module = module().await;
        let state = app_state(&module);

        assert_eq!(state.health_checks.len(), 1);
        assert_eq!(state.health_checks[0].name(), "database");
        assert!(module.database_pool().health_check().await.is_ok());
    }
}
