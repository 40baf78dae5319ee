//! # Link Shelf
//!
//! A curated directory of websites, grouped by the date each one was added
//! and searchable by name, description, or date.
//!
//! The grouping and filtering pipeline lives in [`linkshelf_core`]. This
//! crate wraps it with configuration, data loading, a CLI, a static HTML
//! renderer, and an HTTP server.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ websites.json│──▶│   Grouping   │──▶│   Catalog    │
//! │  (static)    │   │ (once, load) │   │ (read-only)  │
//! └──────────────┘   └──────────────┘   └──────┬───────┘
//!                                              │ filter per query
//!                       ┌──────────────┬───────┴──────┐
//!                       ▼              ▼              ▼
//!                  ┌─────────┐   ┌───────────┐   ┌─────────┐
//!                  │   CLI   │   │ HTML/JSON │   │  HTTP   │
//!                  │ (shelf) │   │  export   │   │ server  │
//!                  └─────────┘   └───────────┘   └─────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! shelf list                          # every date, newest first
//! shelf search "figma"                # filter by name/description/date
//! shelf render --output site/index.html
//! shelf theme toggle
//! shelf serve                         # HTML page + JSON API
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`data`] | Data file loading |
//! | [`search`] | `list` / `search` output |
//! | [`stats`] | Dataset summary |
//! | [`export`] | JSON export for static front ends |
//! | [`render`] | Static HTML page |
//! | [`server`] | HTTP server |
//! | [`theme`] | Persisted light/dark preference |
//! | [`logging`] | Tracing subscriber setup |

pub mod config;
pub mod data;
pub mod export;
pub mod logging;
pub mod render;
pub mod search;
pub mod server;
pub mod stats;
pub mod theme;
