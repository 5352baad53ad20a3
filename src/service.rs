//! Domain services: one per feature.
//!
//! Services sit between callers and a [`Backend`]. They never return errors:
//! every backend failure is logged here and surfaces as `None`, `false`, or
//! an empty page. Each service also publishes its collection; every mutation
//! republishes a fresh snapshot.

mod conflicts;
mod dialogues;
mod resources;
mod surveys;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::Backend;
use crate::model::{Entry, ListQuery, Page};
use crate::publish::{Publisher, Subscription};

pub use conflicts::ConflictLogService;
pub use dialogues::DialogueService;
pub use resources::ResourceService;
pub use surveys::SurveyService;

/// A paginated data source the list controller can drive.
pub trait ListSource<T: Entry> {
    /// Fetches one page.
    ///
    /// `None` means the call failed and was already logged; an empty page
    /// is a successful result.
    fn fetch(&self, query: &ListQuery<T::Filters>) -> Option<Page<T>>;
}

/// A feature's backend plus the published copy of its collection.
pub struct Catalog<T: Entry, B> {
    feature: &'static str,
    backend: B,
    published: Publisher<Vec<T>>,
}

impl<T: Entry, B: Backend<T>> Catalog<T, B> {
    pub fn new(feature: &'static str, backend: B) -> Self {
        let initial = backend.snapshot().unwrap_or_else(|e| {
            warn!(feature, error = %e, "failed to load initial collection");
            Vec::new()
        });
        Self {
            feature,
            backend,
            published: Publisher::new(initial),
        }
    }

    pub fn fetch(&self, query: &ListQuery<T::Filters>) -> Option<Page<T>> {
        match self.backend.query(query) {
            Ok(page) => {
                debug!(
                    feature = self.feature,
                    offset = query.offset,
                    limit = query.limit,
                    returned = page.items.len(),
                    total = page.total_count,
                    "fetched page"
                );
                Some(page)
            }
            Err(e) => {
                warn!(feature = self.feature, error = %e, "list failed");
                None
            }
        }
    }

    pub fn list(&self, query: &ListQuery<T::Filters>) -> Page<T> {
        self.fetch(query).unwrap_or_else(Page::empty)
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.backend.get(id).unwrap_or_else(|e| {
            warn!(feature = self.feature, id, error = %e, "lookup failed");
            None
        })
    }

    /// Inserts the entry `build` makes from the next free id, then republishes.
    pub fn insert(&mut self, build: impl FnOnce(u64) -> T) -> Option<T> {
        let id = match self.backend.next_id() {
            Ok(id) => id,
            Err(e) => {
                warn!(feature = self.feature, error = %e, "could not allocate id");
                return None;
            }
        };
        let entry = build(id);
        if let Err(e) = self.backend.insert(entry.clone()) {
            warn!(feature = self.feature, id, error = %e, "insert failed");
            return None;
        }
        self.republish();
        Some(entry)
    }

    /// Writes back a modified entry, then republishes.
    pub fn replace(&mut self, entry: T) -> bool {
        let id = entry.id();
        if let Err(e) = self.backend.replace(entry) {
            warn!(feature = self.feature, id, error = %e, "update failed");
            return false;
        }
        self.republish();
        true
    }

    pub fn published(&self) -> Arc<Vec<T>> {
        self.published.latest()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Arc<Vec<T>>) + 'static) -> Subscription {
        self.published.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, key: Subscription) -> bool {
        self.published.unsubscribe(key)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn republish(&mut self) {
        match self.backend.snapshot() {
            Ok(entries) => self.published.publish(entries),
            Err(e) => warn!(feature = self.feature, error = %e, "failed to republish collection"),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Backend doubles shared by service and controller tests.

    use std::cell::Cell;

    use crate::backend::{Backend, BackendError, MemoryBackend, Result};
    use crate::model::{Entry, ListQuery, Page};

    /// Wraps a [`MemoryBackend`] and fails every call while `down` is set.
    pub struct FlakyBackend<T> {
        pub inner: MemoryBackend<T>,
        pub down: Cell<bool>,
    }

    impl<T: Entry> FlakyBackend<T> {
        pub fn up(entries: Vec<T>) -> Self {
            Self {
                inner: MemoryBackend::with_entries(entries),
                down: Cell::new(false),
            }
        }

        pub fn down(entries: Vec<T>) -> Self {
            let backend = Self::up(entries);
            backend.down.set(true);
            backend
        }

        fn check(&self) -> Result<()> {
            if self.down.get() {
                Err(BackendError::Unavailable("backend offline".into()))
            } else {
                Ok(())
            }
        }
    }

    impl<T: Entry> Backend<T> for FlakyBackend<T> {
        fn query(&self, query: &ListQuery<T::Filters>) -> Result<Page<T>> {
            self.check()?;
            self.inner.query(query)
        }

        fn get(&self, id: u64) -> Result<Option<T>> {
            self.check()?;
            self.inner.get(id)
        }

        fn next_id(&self) -> Result<u64> {
            self.check()?;
            self.inner.next_id()
        }

        fn insert(&mut self, entry: T) -> Result<()> {
            self.check()?;
            self.inner.insert(entry)
        }

        fn replace(&mut self, entry: T) -> Result<()> {
            self.check()?;
            self.inner.replace(entry)
        }

        fn snapshot(&self) -> Result<Vec<T>> {
            self.check()?;
            self.inner.snapshot()
        }
    }
}
