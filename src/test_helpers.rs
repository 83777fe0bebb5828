//! Shared test utilities for the yearpage test suite.
//!
//! Provides fixture setup, lookup helpers and bulk extractors that work with
//! scan-phase data structures (`Manifest`, `YearFolder`, `Section`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let output = scan(tmp.path()).unwrap();
//!
//! let year = find_year(&output.manifest, "2025");
//! assert_eq!(section_ids(year), vec!["betaTalk", "alphaTalk", "gammaTalk"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{Diagnostic, Diagnostics, Manifest, Section, YearFolder};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups: panic with a clear message on miss
// =========================================================================

/// Find a year by folder name. Panics if not found.
pub fn find_year<'a>(manifest: &'a Manifest, name: &str) -> &'a YearFolder {
    manifest
        .years
        .iter()
        .find(|y| y.name == name)
        .unwrap_or_else(|| panic!("year '{name}' not found. Available: {:?}", year_names(manifest)))
}

/// Find a section by identifier within a year. Panics if not found.
pub fn find_section<'a>(year: &'a YearFolder, identifier: &str) -> &'a Section {
    year.sections
        .iter()
        .find(|s| s.identifier == identifier)
        .unwrap_or_else(|| {
            panic!(
                "section '{identifier}' not found in year '{}'. Available: {:?}",
                year.name,
                section_ids(year)
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All year names in manifest order.
pub fn year_names(manifest: &Manifest) -> Vec<&str> {
    manifest.years.iter().map(|y| y.name.as_str()).collect()
}

/// Section identifiers in card order.
pub fn section_ids(year: &YearFolder) -> Vec<&str> {
    year.sections.iter().map(|s| s.identifier.as_str()).collect()
}

/// Section titles in card order.
pub fn section_titles(year: &YearFolder) -> Vec<&str> {
    year.sections.iter().map(|s| s.title.as_str()).collect()
}

// =========================================================================
// Diagnostics helpers
// =========================================================================

/// Section names mentioned by warnings, in emission order.
pub fn warned_sections(diagnostics: &Diagnostics) -> Vec<&str> {
    diagnostics
        .warnings()
        .filter_map(|d| match d {
            Diagnostic::DeclaredSectionMissing { section, .. }
            | Diagnostic::SectionIndexMissing { section, .. }
            | Diagnostic::SectionFailed { section, .. } => Some(section.as_str()),
            _ => None,
        })
        .collect()
}

/// Assert that warnings name exactly these sections, in this order.
pub fn assert_warning_sections(diagnostics: &Diagnostics, expected: &[&str]) {
    assert_eq!(
        warned_sections(diagnostics),
        expected.to_vec(),
        "warned sections mismatch"
    );
}

/// Minimal in-memory manifest for renderer tests.
pub fn sample_manifest() -> Manifest {
    Manifest {
        years: vec![
            YearFolder {
                name: "2025".to_string(),
                display_name: "Forum 2025".to_string(),
                sections: vec![
                    Section {
                        identifier: "qemu".to_string(),
                        title: "QEMU / Devices".to_string(),
                        body_html: "<ul>\n<li>virtio</li>\n</ul>\n".to_string(),
                        topic_count: 1,
                    },
                    Section {
                        identifier: "kernel".to_string(),
                        title: "Kernel".to_string(),
                        body_html: "<p>Schedulers</p>\n".to_string(),
                        topic_count: 2,
                    },
                ],
            },
            YearFolder {
                name: "2024".to_string(),
                display_name: "2024".to_string(),
                sections: vec![],
            },
        ],
    }
}
