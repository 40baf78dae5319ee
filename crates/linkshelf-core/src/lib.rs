//! # Link Shelf Core
//!
//! Shared, I/O-free logic for Link Shelf: entry models, the accent
//! palette, the fixed date locale, the grouping stage, the filter stage,
//! and the [`catalog::Catalog`] view that presentation layers query.
//!
//! This crate contains no tokio, filesystem, or network dependencies.
//! Everything here is a pure function of its inputs.
//!
//! ```rust
//! use linkshelf_core::catalog::Catalog;
//! use linkshelf_core::models::RawEntry;
//!
//! let raw = vec![
//!     RawEntry::new("Alpha", "https://alpha.dev", "First", "2024-05-01"),
//!     RawEntry::new("Beta", "https://beta.dev", "Second", "2024-05-02"),
//! ];
//! let catalog = Catalog::from_entries(&raw);
//! assert_eq!(catalog.groups().len(), 2);
//! assert_eq!(catalog.search("alp").total_entries, 1);
//! ```

pub mod catalog;
pub mod filter;
pub mod group;
pub mod locale;
pub mod models;
pub mod palette;
