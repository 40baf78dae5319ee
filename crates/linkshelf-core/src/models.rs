//! Data models shared by the grouping and filter stages.
//!
//! [`RawEntry`] is the record as it appears in the static data file.
//! [`Entry`] and [`Group`] are derived once at load time and are read-only
//! for the rest of the session.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::palette::PaletteIndex;

/// A bookmarked website exactly as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub name: String,
    pub url: String,
    pub description: String,
    /// Date the entry was added, `YYYY-MM-DD`.
    pub date: String,
}

impl RawEntry {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            date: date.into(),
        }
    }
}

/// A [`RawEntry`] enriched with a stable id and accent color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// `{date}-{position}`, unique across the whole catalog.
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub date: String,
    pub accent: PaletteIndex,
    /// Palette value for `accent`, denormalized for JSON consumers.
    pub accent_color: &'static str,
}

impl Entry {
    /// Uppercased first character of the name, or `?` for an empty name.
    pub fn initial(&self) -> String {
        match self.name.chars().next() {
            Some(c) => c.to_uppercase().collect(),
            None => "?".to_string(),
        }
    }
}

/// All entries added on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub date: NaiveDate,
    pub display_date: String,
    pub weekday_label: String,
    pub entries: Vec<Entry>,
}

impl Group {
    /// ISO `YYYY-MM-DD` form of the group date.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// On-disk shape of the static data file.
///
/// Accepts either `{ "websites": [...] }` or a bare array of entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    Wrapped { websites: Vec<RawEntry> },
    Bare(Vec<RawEntry>),
}

impl Dataset {
    pub fn into_entries(self) -> Vec<RawEntry> {
        match self {
            Dataset::Wrapped { websites } => websites,
            Dataset::Bare(entries) => entries,
        }
    }
}

/// Parse the JSON text of a data file into raw entries.
pub fn parse_dataset(json: &str) -> Result<Vec<RawEntry>> {
    let dataset: Dataset =
        serde_json::from_str(json).with_context(|| "Failed to parse website data")?;
    Ok(dataset.into_entries())
}
