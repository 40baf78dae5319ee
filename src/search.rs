//! `shelf list` and `shelf search` output.
//!
//! Both commands print the same grouped layout: one header line per date
//! followed by its entries. `search` prints the filtered view and the
//! number of surviving entries, or `No results.` when nothing matched.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use linkshelf_core::catalog::{Catalog, ListingStatus};
use linkshelf_core::filter::FilteredView;
use linkshelf_core::models::Group;

use crate::config::Config;
use crate::data;

pub fn run_list(config: &Config) -> Result<()> {
    let catalog = data::load_catalog(config)?;
    let mut out = std::io::stdout().lock();

    if catalog.groups().is_empty() {
        writeln!(out, "No entries.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{} entries across {} dates",
        catalog.total_entries(),
        catalog.groups().len()
    )?;
    writeln!(out)?;
    write_groups(&mut out, catalog.groups())?;
    Ok(())
}

/// JSON body printed by `shelf search --json`.
#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    status: ListingStatus,
    total_entries: usize,
    groups: &'a [Group],
}

pub fn run_search(config: &Config, query: &str, json: bool) -> Result<()> {
    let catalog = data::load_catalog(config)?;
    let view = catalog.search(query);
    let mut out = std::io::stdout().lock();

    if json {
        let body = SearchOutput {
            query,
            status: catalog.status_of(&view),
            total_entries: view.total_entries,
            groups: &view.groups,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        return Ok(());
    }

    write_search(&mut out, &catalog, query, &view)?;
    Ok(())
}

fn write_search<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    query: &str,
    view: &FilteredView,
) -> Result<()> {
    match catalog.status_of(view) {
        ListingStatus::Loading => writeln!(out, "Loading...")?,
        ListingStatus::Empty | ListingStatus::NoMatches => writeln!(out, "No results.")?,
        ListingStatus::Results { entries, .. } => {
            if !query.trim().is_empty() {
                writeln!(out, "Found {} entries for \"{}\"", entries, query.trim())?;
                writeln!(out)?;
            }
            write_groups(out, &view.groups)?;
        }
    }
    Ok(())
}

/// Print groups as indented text.
pub fn write_groups<W: Write>(out: &mut W, groups: &[Group]) -> Result<()> {
    for group in groups {
        writeln!(
            out,
            "{} {} ({})  [{}]",
            group.display_date,
            group.weekday_label,
            group.date_key(),
            group.entries.len()
        )?;
        for entry in &group.entries {
            writeln!(out, "  - {}  {}", entry.name, entry.url)?;
            if !entry.description.is_empty() {
                writeln!(out, "      {}", entry.description)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
