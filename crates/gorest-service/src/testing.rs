//! In-memory doubles for service tests.

use async_trait::async_trait;
use gorest_core::{GorestError, GorestResult, Repository, Resource, ResourceId};
use gorest_remote::{RemotePage, RemoteSource};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

/// Repository backed by a `BTreeMap`, assigning ids like an integer key.
pub struct InMemoryRepository<T> {
    records: Mutex<BTreeMap<i64, T>>,
}

impl<T: Resource> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.records
                .lock()
                .unwrap()
                .insert(record.id().into_inner(), record);
        }
        repo
    }

    fn upsert(&self, record: &T) -> T {
        let mut records = self.records.lock().unwrap();
        let id = if record.id().is_unassigned() {
            records.keys().next_back().map_or(1, |last| last + 1)
        } else {
            record.id().into_inner()
        };
        let stored = record.clone().with_id(ResourceId(id));
        records.insert(id, stored.clone());
        stored
    }
}

#[async_trait]
impl<T: Resource> Repository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: ResourceId) -> GorestResult<Option<T>> {
        Ok(self.records.lock().unwrap().get(&id.into_inner()).cloned())
    }

    async fn find_all(&self) -> GorestResult<Vec<T>> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn save(&self, entity: &T) -> GorestResult<T> {
        Ok(self.upsert(entity))
    }

    async fn save_all(&self, entities: &[T]) -> GorestResult<u64> {
        for entity in entities {
            self.upsert(entity);
        }
        Ok(entities.len() as u64)
    }

    async fn delete(&self, id: ResourceId) -> GorestResult<bool> {
        Ok(self.records.lock().unwrap().remove(&id.into_inner()).is_some())
    }

    async fn delete_all(&self) -> GorestResult<u64> {
        let mut records = self.records.lock().unwrap();
        let count = records.len() as u64;
        records.clear();
        Ok(count)
    }

    async fn exists(&self, id: ResourceId) -> GorestResult<bool> {
        Ok(self.records.lock().unwrap().contains_key(&id.into_inner()))
    }

    async fn count(&self) -> GorestResult<u64> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

/// Remote source serving canned JSON per collection.
#[derive(Default)]
pub struct StubRemote {
    records: HashMap<(&'static str, i64), Value>,
    pages: HashMap<&'static str, Vec<Value>>,
    failing_page: Option<u32>,
    pages_fetched: AtomicU32,
}

impl StubRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record<T: Resource>(mut self, record: &T) -> Self {
        let json = serde_json::to_value(record).unwrap();
        self.records
            .insert((T::COLLECTION, record.id().into_inner()), json);
        self
    }

    /// Every page reports `pages.len()` as the total.
    pub fn with_pages<T: Resource>(mut self, pages: Vec<Vec<T>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|page| serde_json::to_value(page).unwrap())
            .collect();
        self.pages.insert(T::COLLECTION, pages);
        self
    }

    pub fn failing_on_page(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSource for StubRemote {
    async fn fetch_one<T: Resource>(&self, id: ResourceId) -> GorestResult<T> {
        let json = self
            .records
            .get(&(T::COLLECTION, id.into_inner()))
            .ok_or_else(|| GorestError::not_found(T::NAME, id))?;
        Ok(serde_json::from_value(json.clone())?)
    }

    async fn fetch_page<T: Resource>(&self, page: u32) -> GorestResult<RemotePage<T>> {
        self.pages_fetched.fetch_add(1, Ordering::SeqCst);
        if self.failing_page == Some(page) {
            return Err(GorestError::external("GoREST", format!("HTTP 500 on page {}", page)));
        }

        let pages = self.pages.get(T::COLLECTION).cloned().unwrap_or_default();
        let total = u32::try_from(pages.len()).unwrap();
        let items = match pages.get(page as usize - 1) {
            Some(json) => serde_json::from_value(json.clone())?,
            None => Vec::new(),
        };
        Ok(RemotePage::new(items, total))
    }
}
