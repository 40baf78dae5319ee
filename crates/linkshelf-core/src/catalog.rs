//! The view contract presentation layers consume.
//!
//! A [`Catalog`] starts out loading, becomes ready exactly once when the
//! raw entries are grouped, and is read-only afterwards. Every query
//! derives a fresh [`FilteredView`] from the base groups.

use serde::Serialize;

use crate::filter::{count_entries, filter_with, FilteredView, SearchQuery};
use crate::group::{group_entries, EntryError};
use crate::models::{Group, RawEntry};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Option<Vec<Group>>,
    rejected: Vec<EntryError>,
}

/// What a listing should show for a given query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingStatus {
    /// Data has not been grouped yet.
    Loading,
    /// The data source holds no usable entries.
    Empty,
    /// Data exists but the query excluded all of it.
    NoMatches,
    Results { groups: usize, entries: usize },
}

impl Catalog {
    /// A catalog whose data has not been loaded yet.
    pub fn loading() -> Self {
        Self::default()
    }

    /// Group `raw` and return a ready catalog.
    pub fn from_entries(raw: &[RawEntry]) -> Self {
        let grouping = group_entries(raw);
        tracing::debug!(
            groups = grouping.groups.len(),
            rejected = grouping.rejected.len(),
            "catalog grouped"
        );
        Self {
            groups: Some(grouping.groups),
            rejected: grouping.rejected,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.groups.is_none()
    }

    /// Base groups, newest first. Empty while loading.
    pub fn groups(&self) -> &[Group] {
        self.groups.as_deref().unwrap_or(&[])
    }

    pub fn total_entries(&self) -> usize {
        count_entries(self.groups())
    }

    /// Entries dropped during grouping.
    pub fn rejected(&self) -> &[EntryError] {
        &self.rejected
    }

    pub fn search(&self, query: &str) -> FilteredView {
        filter_with(self.groups(), &SearchQuery::new(query))
    }

    /// Classify the listing for `query` without building the view.
    pub fn status(&self, query: &str) -> ListingStatus {
        self.status_of(&self.search(query))
    }

    /// Classify an already-computed view of this catalog.
    pub fn status_of(&self, view: &FilteredView) -> ListingStatus {
        if self.is_loading() {
            ListingStatus::Loading
        } else if self.groups().is_empty() {
            ListingStatus::Empty
        } else if view.is_empty() {
            ListingStatus::NoMatches
        } else {
            ListingStatus::Results {
                groups: view.groups.len(),
                entries: view.total_entries,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_entries(&[
            RawEntry::new("Alpha", "https://alpha.dev", "first", "2024-05-01"),
            RawEntry::new("Beta", "https://beta.dev", "second", "2024-05-02"),
            RawEntry::new("Broken", "https://broken.dev", "bad date", "not-a-date"),
        ])
    }

    #[test]
    fn test_loading_state() {
        let c = Catalog::loading();
        assert!(c.is_loading());
        assert!(c.groups().is_empty());
        assert_eq!(c.total_entries(), 0);
        assert_eq!(c.status(""), ListingStatus::Loading);
        assert_eq!(c.status("alpha"), ListingStatus::Loading);
    }

    #[test]
    fn test_ready_state() {
        let c = catalog();
        assert!(!c.is_loading());
        assert_eq!(c.groups().len(), 2);
        assert_eq!(c.total_entries(), 2);
        assert_eq!(c.rejected().len(), 1);
    }

    #[test]
    fn test_empty_source_is_not_loading() {
        let c = Catalog::from_entries(&[]);
        assert!(!c.is_loading());
        assert_eq!(c.status(""), ListingStatus::Empty);
        assert_eq!(c.status("anything"), ListingStatus::Empty);
    }

    #[test]
    fn test_status_results_and_no_matches() {
        let c = catalog();
        assert_eq!(
            c.status(""),
            ListingStatus::Results {
                groups: 2,
                entries: 2
            }
        );
        assert_eq!(
            c.status("beta"),
            ListingStatus::Results {
                groups: 1,
                entries: 1
            }
        );
        assert_eq!(c.status("nothing here"), ListingStatus::NoMatches);
    }

    #[test]
    fn test_search_does_not_touch_base() {
        let c = catalog();
        let view = c.search("alpha");
        assert_eq!(view.total_entries, 1);
        assert_eq!(c.total_entries(), 2);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(ListingStatus::Results {
            groups: 1,
            entries: 3,
        })
        .unwrap();
        assert_eq!(json["kind"], "results");
        assert_eq!(json["entries"], 3);
        let json = serde_json::to_value(ListingStatus::NoMatches).unwrap();
        assert_eq!(json["kind"], "no_matches");
    }
}
