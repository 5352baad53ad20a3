//! Resource library service.

use std::sync::Arc;

use crate::backend::{Backend, MemoryBackend, seed};
use crate::model::{Filter, ListQuery, Page, Resource, ResourceDetail, ResourceFilters};
use crate::publish::Subscription;

use super::{Catalog, ListSource};

/// How many related resources a detail view carries.
const RELATED_LIMIT: usize = 3;

pub struct ResourceService<B = MemoryBackend<Resource>> {
    catalog: Catalog<Resource, B>,
    current: Option<ResourceDetail>,
}

impl ResourceService {
    /// A service over the seeded content library.
    pub fn seeded() -> Self {
        Self::new(MemoryBackend::with_entries(seed::resources()))
    }
}

impl<B: Backend<Resource>> ResourceService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            catalog: Catalog::new("resources", backend),
            current: None,
        }
    }

    pub fn list(&self, query: &ListQuery<ResourceFilters>) -> Page<Resource> {
        self.catalog.list(query)
    }

    pub fn get(&self, id: u64) -> Option<Resource> {
        self.catalog.get(id)
    }

    /// Loads a resource with related reading on the same topic.
    ///
    /// Replaces the previously cached detail, if any.
    pub fn detail(&mut self, id: u64) -> Option<ResourceDetail> {
        let resource = self.catalog.get(id)?;

        let mut query: ListQuery<ResourceFilters> = ListQuery::window(0, RELATED_LIMIT + 1);
        query.filters.topic = Filter::Only(resource.topic);
        let related = self
            .catalog
            .list(&query)
            .items
            .into_iter()
            .filter(|r| r.id != resource.id)
            .take(RELATED_LIMIT)
            .collect();

        let detail = ResourceDetail { resource, related };
        self.current = Some(detail.clone());
        Some(detail)
    }

    /// The most recently loaded detail.
    pub fn current(&self) -> Option<&ResourceDetail> {
        self.current.as_ref()
    }

    /// Drops the cached detail, as when its page is torn down.
    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn published(&self) -> Arc<Vec<Resource>> {
        self.catalog.published()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Arc<Vec<Resource>>) + 'static,
    ) -> Subscription {
        self.catalog.subscribe(callback)
    }
}

impl<B: Backend<Resource>> ListSource<Resource> for ResourceService<B> {
    fn fetch(&self, query: &ListQuery<ResourceFilters>) -> Option<Page<Resource>> {
        self.catalog.fetch(query)
    }
}
