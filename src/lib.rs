//! # Yearpage
//!
//! Turns a tree of yearly Markdown folders into one self-contained HTML page
//! with a tab per year and a card per topic area.
//!
//! # Architecture: Scan, Then Render
//!
//! ```text
//! 1. Scan      docs/     →  Manifest + Diagnostics   (filesystem → structured data)
//! 2. Generate  Manifest  →  index.html               (single static page)
//! ```
//!
//! The scan stage never prints. Everything noteworthy it finds (a year without
//! an index, a declared section that does not exist, a section folder with no
//! `index.md`) is pushed as a [`types::Diagnostic`] into a sink the caller
//! owns. The CLI decides how to show it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content root, aggregates each year folder into a [`types::YearFolder`] |
//! | [`index`] | Parses a year's `index.md`: tab name and declared section order |
//! | [`order`] | Merges declared order with the sections that actually exist |
//! | [`markdown`] | Card title extraction, Markdown → HTML, topic counting |
//! | [`generate`] | Renders the manifest to HTML with Maud and writes it atomically |
//! | [`config`] | `config.toml` loading, stock defaults, validation, color CSS |
//! | [`types`] | Manifest and diagnostic types shared between stages |
//! | [`naming`] | Year-folder and hidden-entry naming rules |
//! | [`output`] | CLI output formatting for inventories, diagnostics and summaries |
//!
//! # Design Decisions
//!
//! ## Declared Order With Filesystem Fallback
//!
//! A year's `index.md` lists its sections as `- [Label](folder)` lines. Listed
//! folders come first, in list order; unlisted folders follow alphabetically.
//! Listing a folder that does not exist is a warning, never an error, so a
//! half-edited index still produces a page.
//!
//! ## One File Out
//!
//! The result is a single HTML file with inlined CSS and a few lines of
//! vanilla JavaScript for tab switching. It is written to a temp file beside
//! the target and renamed into place, so a failed run leaves the previous
//! page untouched.

pub mod config;
pub mod generate;
pub mod index;
pub mod markdown;
pub mod naming;
pub mod order;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
