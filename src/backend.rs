//! Backends: where a feature's canonical collection lives.
//!
//! Every feature talks to its data through [`Backend`], a uniform
//! `{filters, offset, limit} -> {items, total_count}` contract plus point
//! lookups and writes. [`MemoryBackend`] holds the seeded mock data; a remote
//! backend implements the same trait without changing any caller.

pub mod seed;

use crate::model::{Entry, ListQuery, Page};

/// Errors that can occur in a backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("entry not found: {0}")]
    NotFound(u64),

    #[error("entry already exists: {0}")]
    Duplicate(u64),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = core::result::Result<T, BackendError>;

/// The contract a feature's data source must honor.
///
/// `query` filters by case-insensitive substring on the entry's search fields
/// and by equality on every enum filter not set to `All`, then returns the
/// `[offset, offset + limit)` slice and the filtered total. Identical queries
/// against unchanged data must return identical pages.
pub trait Backend<T: Entry> {
    fn query(&self, query: &ListQuery<T::Filters>) -> Result<Page<T>>;

    /// Point lookup. `Ok(None)` means not found.
    fn get(&self, id: u64) -> Result<Option<T>>;

    /// The id the next inserted entry should take.
    fn next_id(&self) -> Result<u64>;

    fn insert(&mut self, entry: T) -> Result<()>;

    /// Replaces the entry with the same id.
    fn replace(&mut self, entry: T) -> Result<()>;

    /// Every entry, in canonical order.
    fn snapshot(&self) -> Result<Vec<T>>;
}

/// An in-memory canonical collection, kept in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryBackend<T> {
    entries: Vec<T>,
}

impl<T> Default for MemoryBackend<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Entry> MemoryBackend<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<T>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Entry> Backend<T> for MemoryBackend<T> {
    fn query(&self, query: &ListQuery<T::Filters>) -> Result<Page<T>> {
        let filtered: Vec<&T> = self.entries.iter().filter(|e| e.matches(query)).collect();
        let total_count = filtered.len();
        let items = filtered
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect();
        Ok(Page { items, total_count })
    }

    fn get(&self, id: u64) -> Result<Option<T>> {
        Ok(self.entries.iter().find(|e| e.id() == id).cloned())
    }

    fn next_id(&self) -> Result<u64> {
        Ok(self.entries.iter().map(Entry::id).max().map_or(1, |max| max + 1))
    }

    fn insert(&mut self, entry: T) -> Result<()> {
        if self.entries.iter().any(|e| e.id() == entry.id()) {
            return Err(BackendError::Duplicate(entry.id()));
        }
        self.entries.push(entry);
        Ok(())
    }

    fn replace(&mut self, entry: T) -> Result<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id() == entry.id())
            .ok_or(BackendError::NotFound(entry.id()))?;
        *slot = entry;
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<T>> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Filter, Resource, ResourceFilters, ResourceKind};

    fn resources() -> MemoryBackend<Resource> {
        MemoryBackend::with_entries(seed::resources())
    }

    fn query(offset: usize, limit: usize) -> ListQuery<ResourceFilters> {
        ListQuery::window(offset, limit)
    }

    #[test]
    fn query_returns_slice_and_filtered_total() {
        let backend = resources();
        let page = backend.query(&query(0, 10)).unwrap();

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_count, backend.len());
        assert_eq!(page.items[0].id, 1);
    }

    #[test]
    fn query_never_exceeds_limit() {
        let backend = resources();
        for limit in [1, 3, 7, 10, 100] {
            for offset in [0, 5, 20, 24, 30] {
                let page = backend.query(&query(offset, limit)).unwrap();
                assert!(page.items.len() <= limit);
            }
        }
    }

    #[test]
    fn short_final_page() {
        let backend = resources();
        let total = backend.len();
        let page = backend.query(&query(total - 3, 10)).unwrap();

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_count, total);
    }

    #[test]
    fn offset_past_end_is_empty_not_error() {
        let backend = resources();
        let page = backend.query(&query(1_000, 10)).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, backend.len());
    }

    #[test]
    fn unmatched_search_yields_empty_page() {
        let backend = resources();
        let mut q = query(0, 10);
        q.search = "xyz-not-present".into();

        assert_eq!(backend.query(&q).unwrap(), Page::empty());
    }

    #[test]
    fn filters_apply_before_slicing() {
        let backend = resources();
        let mut q = query(0, 100);
        q.filters.kind = Filter::Only(ResourceKind::Video);
        let page = backend.query(&q).unwrap();

        assert!(page.items.iter().all(|r| r.kind == ResourceKind::Video));
        assert_eq!(page.items.len(), page.total_count);
        assert!(page.total_count > 0);
    }

    #[test]
    fn query_is_deterministic() {
        let backend = resources();
        let mut q = query(2, 5);
        q.search = "family".into();

        assert_eq!(backend.query(&q).unwrap(), backend.query(&q).unwrap());
    }

    #[test]
    fn next_id_starts_at_one_and_follows_max() {
        let mut backend: MemoryBackend<Resource> = MemoryBackend::new();
        assert_eq!(backend.next_id().unwrap(), 1);

        let mut r = seed::resources().remove(0);
        r.id = 41;
        backend.insert(r).unwrap();
        assert_eq!(backend.next_id().unwrap(), 42);
    }

    #[test]
    fn insert_duplicate_fails() {
        let mut backend = resources();
        let existing = backend.get(1).unwrap().unwrap();
        let err = backend.insert(existing).unwrap_err();

        assert!(matches!(err, BackendError::Duplicate(1)));
    }

    #[test]
    fn replace_missing_fails() {
        let mut backend = resources();
        let mut r = backend.get(1).unwrap().unwrap();
        r.id = 9_999;
        let err = backend.replace(r).unwrap_err();

        assert!(matches!(err, BackendError::NotFound(9_999)));
    }

    #[test]
    fn get_missing_is_none() {
        let backend = resources();
        assert!(backend.get(9_999).unwrap().is_none());
    }
}
