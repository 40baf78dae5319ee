//! Loading the static website data file.
//!
//! A missing file or invalid JSON is a hard error. Entries with bad dates
//! are not: they are dropped by the grouping stage and reported through
//! [`Catalog::rejected`].

use anyhow::{Context, Result};
use std::path::Path;

use linkshelf_core::catalog::Catalog;
use linkshelf_core::models::{parse_dataset, RawEntry};

use crate::config::Config;

/// Read and parse the data file at `path`.
pub fn load_entries(path: &Path) -> Result<Vec<RawEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;
    parse_dataset(&content).with_context(|| format!("Invalid data file: {}", path.display()))
}

/// Load the configured data file and group it into a ready [`Catalog`].
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let raw = load_entries(&config.data.path)?;
    let catalog = Catalog::from_entries(&raw);

    tracing::info!(
        path = %config.data.path.display(),
        entries = catalog.total_entries(),
        groups = catalog.groups().len(),
        rejected = catalog.rejected().len(),
        "loaded website data"
    );

    Ok(catalog)
}
