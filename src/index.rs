//! Year index parsing: tab name and declared section order.
//!
//! A year folder's `index.md` carries two things:
//!
//! ```text
//! # GTOC Forum 2025          ← tab name (first level-1 heading)
//!
//! - [Kernel](kernel)         ← declared order, by link target
//! - [QEMU](qemu)
//! - [Compilers](compiler)
//! ```
//!
//! Only the link target is load-bearing; the bracketed label is ignored. The
//! declared order is deduplicated, first occurrence wins.
//!
//! Loading never fails: a missing or unreadable file falls back to the folder
//! name and an empty order, and [`IndexStatus`] tells the caller which path
//! was taken.

use crate::naming::level1_heading;
use regex::Regex;
use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

static ORDER_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*\[(.*?)\]\((.*?)\)\s*$").unwrap());

/// Parsed contents of a year's `index.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct YearIndex {
    pub display_name: String,
    pub declared_order: Vec<String>,
}

impl YearIndex {
    fn fallback(default_name: &str) -> Self {
        Self {
            display_name: default_name.to_string(),
            declared_order: Vec::new(),
        }
    }
}

/// How a [`LoadedIndex`] was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexStatus {
    Parsed,
    Missing,
    /// The file exists but reading it failed; carries the error text.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedIndex {
    pub index: YearIndex,
    pub status: IndexStatus,
}

/// Read and parse the index at `path`, falling back to `default_name`.
pub fn load_year_index(path: &Path, default_name: &str) -> LoadedIndex {
    match std::fs::read_to_string(path) {
        Ok(content) => LoadedIndex {
            index: parse_year_index(&content, default_name),
            status: IndexStatus::Parsed,
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => LoadedIndex {
            index: YearIndex::fallback(default_name),
            status: IndexStatus::Missing,
        },
        Err(e) => LoadedIndex {
            index: YearIndex::fallback(default_name),
            status: IndexStatus::Unreadable(e.to_string()),
        },
    }
}

/// Parse a year index document.
///
/// The heading line itself is never treated as an order entry.
pub fn parse_year_index(document: &str, default_name: &str) -> YearIndex {
    let mut display_name = None;
    let mut declared = Vec::new();

    for line in document.lines() {
        let trimmed = line.trim();
        if display_name.is_none()
            && let Some(heading) = level1_heading(trimmed)
        {
            display_name = Some(heading);
            continue;
        }
        if let Some(target) = parse_order_entry(trimmed) {
            declared.push(target);
        }
    }

    YearIndex {
        display_name: display_name.unwrap_or_else(|| default_name.to_string()),
        declared_order: dedup_first(declared),
    }
}

/// Extract the trimmed link target from a `- [label](target)` line.
///
/// Empty targets yield `None`.
fn parse_order_entry(line: &str) -> Option<String> {
    let caps = ORDER_ENTRY.captures(line)?;
    let target = caps.get(2)?.as_str().trim();
    (!target.is_empty()).then(|| target.to_string())
}

/// Drop repeated entries, keeping the first occurrence of each.
pub fn dedup_first(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn order(index: &YearIndex) -> Vec<&str> {
        index.declared_order.iter().map(String::as_str).collect()
    }

    #[test]
    fn heading_and_entries_parsed() {
        let doc = "# Forum 2025\n\n- [Beta talk](betaTalk)\n- [Alpha talk](alphaTalk)\n";
        let index = parse_year_index(doc, "2025");
        assert_eq!(index.display_name, "Forum 2025");
        assert_eq!(order(&index), vec!["betaTalk", "alphaTalk"]);
    }

    #[test]
    fn default_name_without_heading() {
        let index = parse_year_index("- [A](a)\n", "2024");
        assert_eq!(index.display_name, "2024");
        assert_eq!(order(&index), vec!["a"]);
    }

    #[test]
    fn only_first_heading_names_the_tab() {
        let index = parse_year_index("# First\n# Second\n", "2025");
        assert_eq!(index.display_name, "First");
    }

    #[test]
    fn entries_before_heading_count() {
        let doc = "- [Z](zeta)\n# Name\n- [A](alpha)\n";
        let index = parse_year_index(doc, "2025");
        assert_eq!(index.display_name, "Name");
        assert_eq!(order(&index), vec!["zeta", "alpha"]);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let doc = "- [A](a)\n- [B](b)\n- [A again](a)\n- [C](c)\n- [B](b)\n";
        let index = parse_year_index(doc, "2025");
        assert_eq!(order(&index), vec!["a", "b", "c"]);
    }

    #[test]
    fn whitespace_tolerated_around_entries() {
        let doc = "   -   [Label]( spaced )   \n\t-[Tight](tight)\n";
        let index = parse_year_index(doc, "2025");
        assert_eq!(order(&index), vec!["spaced", "tight"]);
    }

    #[test]
    fn label_is_ignored() {
        let doc = "- [Totally different label](kernel)\n- [](qemu)\n";
        let index = parse_year_index(doc, "2025");
        assert_eq!(order(&index), vec!["kernel", "qemu"]);
    }

    #[test]
    fn non_matching_lines_ignored() {
        let doc = "- plain item\n* [Star](star)\n- [Trailing](t) extra\n[No dash](nodash)\n- [Empty]()\n";
        let index = parse_year_index(doc, "2025");
        assert!(index.declared_order.is_empty());
    }

    #[test]
    fn dedup_keeps_order() {
        let items = ["c", "a", "c", "b", "a"].map(String::from).to_vec();
        assert_eq!(dedup_first(items), vec!["c", "a", "b"]);
    }

    #[test]
    fn load_missing_file_falls_back() {
        let tmp = TempDir::new().unwrap();
        let loaded = load_year_index(&tmp.path().join("index.md"), "2023");
        assert_eq!(loaded.status, IndexStatus::Missing);
        assert_eq!(loaded.index.display_name, "2023");
        assert!(loaded.index.declared_order.is_empty());
    }

    #[test]
    fn load_existing_file_parses() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.md");
        fs::write(&path, "# Named\n- [X](x)\n").unwrap();
        let loaded = load_year_index(&path, "2023");
        assert_eq!(loaded.status, IndexStatus::Parsed);
        assert_eq!(loaded.index.display_name, "Named");
        assert_eq!(order(&loaded.index), vec!["x"]);
    }

    #[test]
    fn load_invalid_utf8_reports_unreadable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.md");
        fs::write(&path, [0x23, 0x20, 0xff, 0xfe, 0x0a]).unwrap();
        let loaded = load_year_index(&path, "2023");
        assert!(matches!(loaded.status, IndexStatus::Unreadable(_)));
        assert_eq!(loaded.index.display_name, "2023");
        assert!(loaded.index.declared_order.is_empty());
    }

    #[test]
    fn load_directory_reports_unreadable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.md");
        fs::create_dir(&path).unwrap();
        let loaded = load_year_index(&path, "2023");
        assert!(matches!(loaded.status, IndexStatus::Unreadable(_)));
    }
}
