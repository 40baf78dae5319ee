//! Filter stage: narrow groups by a free-text query.
//!
//! Matching is a case-insensitive substring test, nothing more. A group
//! whose display date, weekday label, or ISO date contains the query is
//! kept whole. Any other group keeps only the entries whose name or
//! description contains the query, and disappears when none do.
//!
//! Filtering never mutates the input and is idempotent: applying the same
//! query to an already-filtered view returns the same view.

use serde::Serialize;

use crate::models::{Entry, Group};

/// A trimmed, case-folded search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the folded `text` contains this query.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }

    fn matches_group_date(&self, group: &Group) -> bool {
        self.matches(&group.display_date)
            || self.matches(&group.weekday_label)
            || group.date_key().contains(&self.0)
    }

    fn matches_entry(&self, entry: &Entry) -> bool {
        self.matches(&entry.name) || self.matches(&entry.description)
    }
}

/// Groups that survived a query, plus their total entry count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    pub groups: Vec<Group>,
    pub total_entries: usize,
}

impl FilteredView {
    fn new(groups: Vec<Group>) -> Self {
        let total_entries = count_entries(&groups);
        Self {
            groups,
            total_entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Total number of entries across `groups`.
pub fn count_entries(groups: &[Group]) -> usize {
    groups.iter().map(|g| g.entries.len()).sum()
}

/// Filter `groups` against a raw query string.
///
/// An empty or whitespace-only query returns every group unchanged.
pub fn filter_groups(groups: &[Group], query: &str) -> FilteredView {
    filter_with(groups, &SearchQuery::new(query))
}

/// Filter `groups` against an already-normalized query.
pub fn filter_with(groups: &[Group], query: &SearchQuery) -> FilteredView {
    if query.is_empty() {
        return FilteredView::new(groups.to_vec());
    }

    let survivors = groups
        .iter()
        .filter_map(|group| {
            if query.matches_group_date(group) {
                return Some(group.clone());
            }
            let entries: Vec<Entry> = group
                .entries
                .iter()
                .filter(|e| query.matches_entry(e))
                .cloned()
                .collect();
            if entries.is_empty() {
                None
            } else {
                Some(Group {
                    entries,
                    ..group.clone()
                })
            }
        })
        .collect();

    FilteredView::new(survivors)
}
