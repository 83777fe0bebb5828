//! CLI output formatting for the scan and build stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every year and
//! section leads with its positional index and title; the folder or file it
//! came from is shown as an indented `Source:` line.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Years
//! 001 GTOC Forum 2025 (3 sections, 6 topics)
//!     Source: 2025/
//!     001 Beta (2 topics)
//!         Source: 2025/betaTalk/index.md
//!     002 Alpha (3 topics)
//!         Source: 2025/alphaTalk/index.md
//! 002 2024 (no sections)
//!     Source: 2024/
//! ```
//!
//! ## Diagnostics
//!
//! ```text
//! info: 2024: no index.md, using folder name and alphabetical order
//! warning: 2025: declared section 'ghostTalk' does not exist, skipping
//! ```
//!
//! ## Build
//!
//! ```text
//! Generated 2 tabs, 5 cards, 8 topics → index.html
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function is pure and returns lines for testability; the
//! `print_*` wrappers do the I/O. Warnings go to stderr, everything else to
//! stdout.

use crate::types::{Diagnostic, Diagnostics, Manifest, Section, Severity, YearFolder};
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

/// Year header: index, tab name, and section/topic counts.
///
/// ```text
/// 001 GTOC Forum 2025 (3 sections, 6 topics)
/// 002 2024 (no sections)
/// ```
fn year_header(index: usize, year: &YearFolder) -> String {
    let detail = if year.sections.is_empty() {
        "no sections".to_string()
    } else {
        format!(
            "{}, {}",
            plural(year.sections.len(), "section", "sections"),
            plural(year.topic_count(), "topic", "topics")
        )
    };
    format!("{} {} ({})", format_index(index), year.display_name, detail)
}

/// Section line: topic count is omitted when zero.
fn section_line(index: usize, section: &Section) -> String {
    match section.topic_count {
        0 => format!("{} {}", format_index(index), section.title),
        n => format!(
            "{} {} ({})",
            format_index(index),
            section.title,
            plural(n, "topic", "topics")
        ),
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the scanned content inventory.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Years".to_string()];

    for (y, year) in manifest.years.iter().enumerate() {
        lines.push(year_header(y + 1, year));
        lines.push(format!("{}Source: {}/", indent(1), year.name));

        for (s, section) in year.sections.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), section_line(s + 1, section)));
            lines.push(format!(
                "{}Source: {}/{}/index.md",
                indent(2),
                year.name,
                section.identifier
            ));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// One line per diagnostic, prefixed with its severity.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let prefix = match diagnostic.severity() {
        Severity::Info => "info",
        Severity::Warning => "warning",
    };
    let message = match diagnostic {
        Diagnostic::YearIndexMissing { year } => {
            format!("{year}: no index.md, using folder name and alphabetical order")
        }
        Diagnostic::YearIndexUnreadable { year, error } => {
            format!("{year}: could not read index.md ({error}), using defaults")
        }
        Diagnostic::YearIndexParsed {
            year,
            display_name,
            declared,
        } => format!(
            "{year}: tab '{display_name}', declared order [{}]",
            declared.join(", ")
        ),
        Diagnostic::YearUnlistable { year, error } => {
            format!("{year}: could not list sections ({error})")
        }
        Diagnostic::DeclaredSectionMissing { year, section } => {
            format!("{year}: declared section '{section}' does not exist, skipping")
        }
        Diagnostic::SectionIndexMissing { year, section } => {
            format!("{year}/{section}: no index.md, skipping")
        }
        Diagnostic::SectionFailed {
            year,
            section,
            error,
        } => format!("{year}/{section}: failed to load index.md ({error}), skipping"),
        Diagnostic::SectionParsed {
            year,
            section,
            title,
            topics,
        } => format!(
            "{year}/{section}: card '{title}', {}",
            plural(*topics, "topic", "topics")
        ),
    };
    format!("{prefix}: {message}")
}

/// Format every diagnostic, optionally dropping `Info` entries.
pub fn format_diagnostics(diagnostics: &Diagnostics, verbose: bool) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| verbose || d.severity() == Severity::Warning)
        .map(format_diagnostic)
        .collect()
}

/// Print diagnostics: warnings to stderr, info (when verbose) to stdout.
pub fn print_diagnostics(diagnostics: &Diagnostics, verbose: bool) {
    for d in diagnostics.iter() {
        match d.severity() {
            Severity::Warning => eprintln!("{}", format_diagnostic(d)),
            Severity::Info if verbose => println!("{}", format_diagnostic(d)),
            Severity::Info => {}
        }
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Closing summary after the page is written.
pub fn format_build_summary(manifest: &Manifest, output: &Path) -> Vec<String> {
    vec![format!(
        "Generated {}, {}, {} \u{2192} {}",
        plural(manifest.years.len(), "tab", "tabs"),
        plural(manifest.topic_areas(), "card", "cards"),
        plural(manifest.total_topics(), "topic", "topics"),
        output.display()
    )]
}

/// Print build summary to stdout.
pub fn print_build_summary(manifest: &Manifest, output: &Path) {
    for line in format_build_summary(manifest, output) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
