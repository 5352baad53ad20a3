//! Query types: filters, pagination windows, and result pages.

use serde::{Deserialize, Serialize};

/// An enum filter. `All` is the sentinel that disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filter", content = "value", rename_all = "camelCase")]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// Whether `value` passes this filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Filter::All, Filter::Only)
    }
}

/// The filter and pagination parameters for one fetch.
///
/// Built fresh for every fetch; `F` is the feature's own set of enum filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery<F> {
    pub search: String,
    pub filters: F,
    pub offset: usize,
    pub limit: usize,
}

impl<F: Default> ListQuery<F> {
    /// A query with no search term and every filter disabled.
    pub fn window(offset: usize, limit: usize) -> Self {
        Self {
            search: String::new(),
            filters: F::default(),
            offset,
            limit,
        }
    }
}

/// One bounded slice of a filtered collection.
///
/// `total_count` is the size of the whole filtered collection, not of `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// A record in a feature's canonical collection.
pub trait Entry: Clone {
    /// The feature's enum filters.
    type Filters: Clone + Default;

    /// Numeric identity, unique within the collection.
    fn id(&self) -> u64;

    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether this entry passes every enabled filter.
    fn admits(&self, filters: &Self::Filters) -> bool;

    /// Case-insensitive substring match on any search field.
    /// An empty term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Whether this entry belongs in the result of `query`.
    fn matches(&self, query: &ListQuery<Self::Filters>) -> bool {
        self.matches_search(&query.search) && self.admits(&query.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Note {
        id: u64,
        title: String,
        body: String,
        pinned: bool,
    }

    #[derive(Debug, Clone, Default)]
    struct NoteFilters {
        pinned: Filter<bool>,
    }

    impl Entry for Note {
        type Filters = NoteFilters;

        fn id(&self) -> u64 {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.body.as_str()]
        }

        fn admits(&self, filters: &NoteFilters) -> bool {
            filters.pinned.admits(&self.pinned)
        }
    }

    fn note() -> Note {
        Note {
            id: 1,
            title: "Bedtime Routines".into(),
            body: "Keep screens out of the bedroom.".into(),
            pinned: true,
        }
    }

    #[test]
    fn all_sentinel_admits_everything() {
        assert!(Filter::<u8>::All.admits(&3));
        assert!(Filter::Only(3).admits(&3));
        assert!(!Filter::Only(4).admits(&3));
    }

    #[test]
    fn filter_from_option() {
        assert_eq!(Filter::from(None::<u8>), Filter::All);
        assert_eq!(Filter::from(Some(2)), Filter::Only(2));
    }

    #[test]
    fn search_is_case_insensitive_over_any_field() {
        let n = note();
        assert!(n.matches_search("bedtime"));
        assert!(n.matches_search("SCREENS"));
        assert!(n.matches_search(""));
        assert!(n.matches_search("   "));
        assert!(!n.matches_search("homework"));
    }

    #[test]
    fn matches_combines_search_and_filters() {
        let n = note();
        let mut query: ListQuery<NoteFilters> = ListQuery::window(0, 10);
        query.search = "routine".into();
        assert!(n.matches(&query));

        query.filters.pinned = Filter::Only(false);
        assert!(!n.matches(&query));
    }
}
