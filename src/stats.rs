//! Dataset statistics and health overview.
//!
//! Gives a quick summary of what the data file holds: entry and date
//! counts, the covered date range, the busiest day, and any entries that
//! were dropped because their date did not parse.

use anyhow::Result;
use chrono::NaiveDate;

use linkshelf_core::catalog::Catalog;

use crate::config::Config;
use crate::data;

/// Run the stats command: load the catalog and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    let catalog = data::load_catalog(config)?;
    let today = chrono::Local::now().date_naive();
    print!("{}", format_stats(config, &catalog, today));
    Ok(())
}

fn format_stats(config: &Config, catalog: &Catalog, today: NaiveDate) -> String {
    let mut out = String::new();
    let groups = catalog.groups();

    out.push_str(&format!("{} — Data Stats\n", config.site.title));
    out.push_str("================================\n\n");
    out.push_str(&format!("  Data file:   {}\n", config.data.path.display()));
    out.push_str(&format!("  Entries:     {}\n", catalog.total_entries()));
    out.push_str(&format!("  Dates:       {}\n", groups.len()));

    if let (Some(newest), Some(oldest)) = (groups.first(), groups.last()) {
        out.push_str(&format!(
            "  Newest:      {} ({})\n",
            newest.date_key(),
            format_days_ago(newest.date, today)
        ));
        out.push_str(&format!("  Oldest:      {}\n", oldest.date_key()));
    }

    if let Some(busiest) = groups.iter().max_by(|a, b| {
        a.entries
            .len()
            .cmp(&b.entries.len())
            .then(a.date.cmp(&b.date))
    }) {
        out.push_str(&format!(
            "  Busiest day: {} ({} entries)\n",
            busiest.date_key(),
            busiest.entries.len()
        ));
    }

    let rejected = catalog.rejected();
    out.push_str(&format!("  Rejected:    {}\n", rejected.len()));
    if !rejected.is_empty() {
        out.push('\n');
        out.push_str("  Skipped entries:\n");
        for err in rejected {
            out.push_str(&format!("    - {}\n", err));
        }
    }
    out.push('\n');
    out
}

/// Format the distance from `date` to `today` (e.g. "3 days ago").
fn format_days_ago(date: NaiveDate, today: NaiveDate) -> String {
    let delta = (today - date).num_days();
    match delta {
        d if d < 0 => "in the future".to_string(),
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d => format!("{} days ago", d),
    }
}
