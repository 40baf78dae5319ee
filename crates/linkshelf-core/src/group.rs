//! Grouping stage: flat raw entries to dated, newest-first groups.
//!
//! # Algorithm
//!
//! 1. Parse each entry's date. Entries whose date does not parse are
//!    set aside as [`EntryError::MalformedDate`] and logged.
//! 2. Bucket the remaining entries by date, keeping input order inside
//!    each bucket.
//! 3. For every bucket compute the display date and weekday label, then
//!    assign `id = "{date}-{index}"` and the accent slot from
//!    [`color_for`](crate::palette::color_for).
//! 4. Emit buckets newest date first.
//!
//! The function is pure: the same input always yields the same groups,
//! ids and colors, and the input slice is never modified.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::locale::{display_date, parse_iso_date, weekday_label};
use crate::models::{Entry, Group, RawEntry};
use crate::palette::color_for;

/// A raw entry that could not be placed into a group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("entry '{name}' has malformed date '{date}'")]
    MalformedDate { name: String, date: String },
}

/// Result of the grouping stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Groups ordered by date, most recent first.
    pub groups: Vec<Group>,
    /// Entries excluded from `groups`, in input order.
    pub rejected: Vec<EntryError>,
}

/// Group raw entries by date.
pub fn group_entries(raw: &[RawEntry]) -> Grouping {
    let mut buckets: BTreeMap<NaiveDate, Vec<&RawEntry>> = BTreeMap::new();
    let mut rejected = Vec::new();

    for entry in raw {
        match parse_iso_date(&entry.date) {
            Some(date) => buckets.entry(date).or_default().push(entry),
            None => {
                tracing::warn!(
                    name = %entry.name,
                    date = %entry.date,
                    "skipping entry with malformed date"
                );
                rejected.push(EntryError::MalformedDate {
                    name: entry.name.clone(),
                    date: entry.date.clone(),
                });
            }
        }
    }

    let groups = buckets
        .into_iter()
        .rev()
        .map(|(date, members)| build_group(date, &members))
        .collect();

    Grouping { groups, rejected }
}

fn build_group(date: NaiveDate, members: &[&RawEntry]) -> Group {
    let key = date.format("%Y-%m-%d").to_string();
    let entries = members
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let accent = color_for(&raw.name);
            Entry {
                id: format!("{}-{}", key, index),
                name: raw.name.clone(),
                url: raw.url.clone(),
                description: raw.description.clone(),
                date: key.clone(),
                accent,
                accent_color: accent.gradient(),
            }
        })
        .collect();

    Group {
        date,
        display_date: display_date(date),
        weekday_label: weekday_label(date).to_string(),
        entries,
    }
}
