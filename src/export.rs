//! Export the grouped listing as JSON for a static front end.
//!
//! Produces a `data.json` file holding the already-grouped, already-sorted
//! view, so a browser only has to render it. An optional query exports a
//! pre-filtered view instead.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use linkshelf_core::filter::FilteredView;
use linkshelf_core::models::Group;

use crate::config::Config;
use crate::data;

#[derive(Serialize)]
struct ExportData<'a> {
    title: &'a str,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    total_entries: usize,
    groups: &'a [Group],
}

/// Export the catalog as JSON.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub fn run_export(config: &Config, output: Option<&Path>, query: Option<&str>) -> Result<()> {
    let catalog = data::load_catalog(config)?;
    let view = catalog.search(query.unwrap_or(""));
    let json = export_json(config, &view, query)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &json)?;
            tracing::info!(path = %path.display(), "exported listing");
            eprintln!(
                "Exported {} entries in {} groups to {}",
                view.total_entries,
                view.groups.len(),
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

fn export_json(config: &Config, view: &FilteredView, query: Option<&str>) -> Result<String> {
    let data = ExportData {
        title: &config.site.title,
        generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        query: query.map(str::trim).filter(|q| !q.is_empty()),
        total_entries: view.total_entries,
        groups: &view.groups,
    };
    Ok(serde_json::to_string_pretty(&data)?)
}
