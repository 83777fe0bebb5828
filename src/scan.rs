//! Content tree scanning and per-year aggregation.
//!
//! Stage 1 of the build. Walks the content root and produces the
//! [`Manifest`] the page renderer consumes, plus a [`Diagnostics`] log.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                            # Content root
//! ├── config.toml                  # Page configuration (optional)
//! ├── 2025/                        # Year folder (digits only)
//! │   ├── index.md                 # Tab name + declared section order
//! │   ├── betaTalk/
//! │   │   └── index.md             # Card: "# Title" + Markdown body
//! │   ├── alphaTalk/
//! │   │   └── index.md
//! │   ├── gammaTalk/               # Undeclared: appended alphabetically
//! │   │   └── index.md
//! │   ├── draftTalk/               # No index.md: skipped with a warning
//! │   └── .scratch/                # Hidden: ignored
//! ├── 2024/                        # No index.md: tab named "2024"
//! │   ├── kernel/
//! │   │   └── index.md
//! │   └── misc/
//! │       └── index.md             # No heading: card titled "untitled"
//! └── assets/                      # Not digits: not a year
//! ```
//!
//! ## Ordering
//!
//! - Years sort by name, descending, byte-wise. The first year is the active tab.
//! - Sections follow [`crate::order::resolve_order`].
//!
//! ## Failure Model
//!
//! Only a missing or invalid root, or a root without any year folder, is
//! fatal. Everything below the year level degrades to a diagnostic and a
//! fallback; one broken section never takes its siblings down.

use crate::index::{IndexStatus, load_year_index};
use crate::markdown::{count_topics, parse_fragment};
use crate::naming::{INDEX_FILE, is_hidden, is_year_name};
use crate::order::resolve_order;
use crate::types::{Diagnostic, Diagnostics, Manifest, Section, YearFolder};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Content directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("Content path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("No year folders (digit-only names) found in {0}")]
    NoYears(PathBuf),
}

/// Result of a successful scan.
#[derive(Debug)]
pub struct ScanOutput {
    pub manifest: Manifest,
    pub diagnostics: Diagnostics,
}

pub fn scan(root: &Path) -> Result<ScanOutput, ScanError> {
    let year_dirs = collect_years(root)?;
    if year_dirs.is_empty() {
        return Err(ScanError::NoYears(root.to_path_buf()));
    }

    let mut diagnostics = Diagnostics::new();
    let years = year_dirs
        .iter()
        .map(|dir| aggregate_year(dir, &mut diagnostics))
        .collect();

    Ok(ScanOutput {
        manifest: Manifest { years },
        diagnostics,
    })
}

/// List the year folders of `root`, latest first.
///
/// Names compare as strings, so `"9999"` sorts before `"10000"`.
pub fn collect_years(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut years: Vec<(String, PathBuf)> = list_subdirs(root)?
        .into_iter()
        .filter(|(name, _)| is_year_name(name))
        .collect();

    years.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(years.into_iter().map(|(_, path)| path).collect())
}

/// Build one year folder: tab name, section order, then each section.
pub fn aggregate_year(year_dir: &Path, diagnostics: &mut Diagnostics) -> YearFolder {
    let year = dir_name(year_dir);

    let loaded = load_year_index(&year_dir.join(INDEX_FILE), &year);
    match &loaded.status {
        IndexStatus::Parsed => diagnostics.push(Diagnostic::YearIndexParsed {
            year: year.clone(),
            display_name: loaded.index.display_name.clone(),
            declared: loaded.index.declared_order.clone(),
        }),
        IndexStatus::Missing => {
            diagnostics.push(Diagnostic::YearIndexMissing { year: year.clone() })
        }
        IndexStatus::Unreadable(error) => diagnostics.push(Diagnostic::YearIndexUnreadable {
            year: year.clone(),
            error: error.clone(),
        }),
    }

    let actual: BTreeSet<String> = match list_subdirs(year_dir) {
        Ok(dirs) => dirs
            .into_iter()
            .map(|(name, _)| name)
            .filter(|name| !is_hidden(name))
            .collect(),
        Err(e) => {
            diagnostics.push(Diagnostic::YearUnlistable {
                year: year.clone(),
                error: e.to_string(),
            });
            BTreeSet::new()
        }
    };

    let resolution = resolve_order(&actual, &loaded.index.declared_order);
    for section in resolution.missing {
        diagnostics.push(Diagnostic::DeclaredSectionMissing {
            year: year.clone(),
            section,
        });
    }

    let mut sections = Vec::with_capacity(resolution.order.len());
    for identifier in resolution.order {
        match load_section(year_dir, &identifier) {
            Ok(Some(section)) => {
                diagnostics.push(Diagnostic::SectionParsed {
                    year: year.clone(),
                    section: identifier,
                    title: section.title.clone(),
                    topics: section.topic_count,
                });
                sections.push(section);
            }
            Ok(None) => diagnostics.push(Diagnostic::SectionIndexMissing {
                year: year.clone(),
                section: identifier,
            }),
            Err(e) => diagnostics.push(Diagnostic::SectionFailed {
                year: year.clone(),
                section: identifier,
                error: e.to_string(),
            }),
        }
    }

    YearFolder {
        display_name: loaded.index.display_name,
        name: year,
        sections,
    }
}

/// Read and parse `<year_dir>/<identifier>/index.md`.
///
/// `Ok(None)` when the section has no index document.
fn load_section(year_dir: &Path, identifier: &str) -> io::Result<Option<Section>> {
    let path = year_dir.join(identifier).join(INDEX_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let fragment = parse_fragment(&content);
    Ok(Some(Section {
        identifier: identifier.to_string(),
        title: fragment.title,
        body_html: fragment.html,
        topic_count: count_topics(&content),
    }))
}

/// Immediate subdirectories of `dir` as `(name, path)`, symlinks followed.
///
/// Only failing to open `dir` itself is an error. Entries that cannot be
/// inspected, such as dangling symlinks, are not directories and are skipped.
fn list_subdirs(dir: &Path) -> Result<Vec<(String, PathBuf)>, walkdir::Error> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e),
            Err(_) => continue,
        };
        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy().to_string();
            dirs.push((name, entry.into_path()));
        }
    }
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
