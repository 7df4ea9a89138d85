//! Generic resource service implementation.

use crate::dto::{CountResponse, ImportSummary};
use crate::resource_service::ResourceService;
use crate::validators::{ResourceValidator, ValidationMode};
use async_trait::async_trait;
use gorest_config::RemoteConfig;
use gorest_core::{GorestError, GorestResult, Repository, Resource, ResourceId};
use gorest_remote::RemoteSource;
use shaku::Component;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Limits applied to bulk imports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSettings {
    /// Stop after this many pages even if the remote reports more.
    pub max_pages: Option<u32>,
}

impl From<&RemoteConfig> for ImportSettings {
    fn from(config: &RemoteConfig) -> Self {
        Self {
            max_pages: config.max_import_pages,
        }
    }
}

/// Service for one resource type, importing from the remote source `S`.
///
/// As a component the store and validator are injected; the remote client
/// has no default and must be supplied through the module builder.
#[derive(Component)]
#[shaku(interface = ResourceService<T>)]
pub struct ResourceServiceImpl<T: Resource, S: RemoteSource> {
    #[shaku(inject)]
    repository: Arc<dyn Repository<T>>,
    #[shaku(inject)]
    validator: Arc<dyn ResourceValidator<T>>,
    remote: Arc<S>,
    #[shaku(default)]
    import: ImportSettings,
    #[shaku(default)]
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource, S: RemoteSource> ResourceServiceImpl<T, S> {
    /// Creates a new resource service.
    pub fn new(
        repository: Arc<dyn Repository<T>>,
        validator: Arc<dyn ResourceValidator<T>>,
        remote: Arc<S>,
        import: ImportSettings,
    ) -> Self {
        Self {
            repository,
            validator,
            remote,
            import,
            _resource: PhantomData,
        }
    }

    /// Last page to fetch given the remote's page count.
    fn last_page(&self, total_pages: u32) -> u32 {
        let last = total_pages.max(1);
        match self.import.max_pages {
            Some(cap) if cap < last => {
                warn!(
                    "{} import capped at {} of {} pages",
                    T::NAME,
                    cap,
                    total_pages
                );
                cap
            }
            _ => last,
        }
    }
}

#[async_trait]
impl<T: Resource, S: RemoteSource> ResourceService<T> for ResourceServiceImpl<T, S> {
    async fn get(&self, id: ResourceId) -> GorestResult<T> {
        debug!("Getting {}: {}", T::LABEL, id);

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GorestError::not_found(T::NAME, id))
    }

    async fn list(&self) -> GorestResult<Vec<T>> {
        debug!("Listing {}", T::COLLECTION);
        self.repository.find_all().await
    }

    async fn delete(&self, id: ResourceId) -> GorestResult<T> {
        debug!("Deleting {}: {}", T::LABEL, id);

        let record = self.get(id).await?;
        if !self.repository.delete(id).await? {
            return Err(GorestError::not_found(T::NAME, id));
        }

        info!("{} deleted: {}", T::NAME, id);
        Ok(record)
    }

    async fn delete_all(&self) -> GorestResult<CountResponse> {
        debug!("Deleting all {}", T::COLLECTION);

        let count = self.repository.delete_all().await?;

        info!("{} {} deleted", count, T::COLLECTION);
        Ok(CountResponse::deleted(T::NAME, count))
    }

    async fn create(&self, record: T) -> GorestResult<T> {
        debug!("Creating {}", T::LABEL);

        let record = record.with_id(ResourceId::UNASSIGNED);
        self.validator
            .validate(&record, ValidationMode::Create)
            .await?;

        let saved = self.repository.save(&record).await?;

        info!("{} created: {}", T::NAME, saved.id());
        Ok(saved)
    }

    async fn update(&self, record: T) -> GorestResult<T> {
        debug!("Updating {}: {}", T::LABEL, record.id());

        self.validator
            .validate(&record, ValidationMode::Update)
            .await?;

        let saved = self.repository.save(&record).await?;

        info!("{} updated: {}", T::NAME, saved.id());
        Ok(saved)
    }

    async fn import_one(&self, id: ResourceId) -> GorestResult<T> {
        debug!("Importing {} {} from remote", T::LABEL, id);

        let mut record: T = self.remote.fetch_one(id).await?;
        if record.id().is_unassigned() {
            record.set_id(id);
        }

        let saved = self.repository.save(&record).await?;

        info!("{} imported: {}", T::NAME, saved.id());
        Ok(saved)
    }

    async fn import_all(&self) -> GorestResult<ImportSummary> {
        debug!("Importing all {} from remote", T::COLLECTION);

        let first = self.remote.fetch_page::<T>(1).await?;
        let last_page = self.last_page(first.total_pages);
        let mut count = self.repository.save_all(&first.items).await?;

        for page in 2..=last_page {
            let next = self.remote.fetch_page::<T>(page).await.map_err(|e| {
                warn!(
                    "{} import stopped at page {} of {} after storing {}: {}",
                    T::NAME,
                    page,
                    last_page,
                    count,
                    e
                );
                e
            })?;
            count += self.repository.save_all(&next.items).await?;
            debug!("Stored page {}/{} of {}", page, last_page, T::COLLECTION);
        }

        info!("{} {} imported from {} pages", count, T::COLLECTION, last_page);
        Ok(ImportSummary::created(T::NAME, count, last_page))
    }
}
