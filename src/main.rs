//! # Link Shelf CLI (`shelf`)
//!
//! ## Usage
//!
//! ```bash
//! shelf --config ./config/shelf.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `shelf list` | Print every date group with its entries |
//! | `shelf search "<query>"` | Print the filtered listing |
//! | `shelf stats` | Summarize the data file |
//! | `shelf export` | Write the grouped listing as JSON |
//! | `shelf render` | Write the static HTML page |
//! | `shelf theme show\|set\|toggle` | Read or change the theme preference |
//! | `shelf serve` | Start the HTTP server |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use linkshelf::theme::{PreferenceStore, Theme};
use linkshelf::{config, export, logging, render, search, server, stats};

/// Link Shelf CLI: a curated website directory grouped by date.
#[derive(Parser)]
#[command(
    name = "shelf",
    about = "Link Shelf — a curated website directory grouped by date",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/shelf.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every date group, newest first.
    List,

    /// Filter the listing by name, description, or date.
    ///
    /// A query matching a group's date (e.g. `2024-05-01`, `5月1日`,
    /// `星期三`) keeps the whole group. Otherwise only matching entries
    /// are shown.
    Search {
        /// The search query string.
        query: String,

        /// Print the filtered view as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Summarize the data file: counts, date range, rejected entries.
    Stats,

    /// Export the grouped listing as JSON.
    Export {
        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Only export entries matching this query.
        #[arg(long)]
        query: Option<String>,
    },

    /// Render the static HTML page.
    Render {
        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Render the page pre-filtered by this query.
        #[arg(long)]
        query: Option<String>,
    },

    /// Read or change the light/dark theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Start the HTTP server.
    Serve,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme.
    Show,
    /// Set the theme to `light` or `dark`.
    Set { theme: Theme },
    /// Switch between light and dark.
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;
    logging::init_tracing(&cfg.logging);

    match cli.command {
        Commands::List => {
            search::run_list(&cfg)?;
        }
        Commands::Search { query, json } => {
            search::run_search(&cfg, &query, json)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
        Commands::Export { output, query } => {
            export::run_export(&cfg, output.as_deref(), query.as_deref())?;
        }
        Commands::Render { output, query } => {
            render::run_render(&cfg, output.as_deref(), query.as_deref())?;
        }
        Commands::Theme { action } => {
            let store = PreferenceStore::new(&cfg.preferences.path);
            let theme = match action {
                ThemeAction::Show => store.load(),
                ThemeAction::Set { theme } => {
                    store.save(theme)?;
                    theme
                }
                ThemeAction::Toggle => store.toggle()?,
            };
            println!("{}", theme.as_str());
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
