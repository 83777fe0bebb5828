//! End-to-end: build a content tree on disk, scan it, render it, read the page back.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use yearpage::config::{self, SiteConfig};
use yearpage::types::Diagnostic;
use yearpage::{generate, scan};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn forum_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(
        root,
        "2025/index.md",
        "# Forum 2025\n\n- [Beta](beta)\n- [Alpha](alpha)\n- [Missing](ghost)\n",
    );
    write(root, "2025/alpha/index.md", "# Alpha\n\n- one\n- two\n");
    write(root, "2025/beta/index.md", "# Beta\n\n- first\n");
    write(root, "2025/gamma/index.md", "# Gamma\n\nNo topics yet.\n");
    write(root, "2025/.hidden/index.md", "# Hidden\n");
    write(root, "2024/old/index.md", "# Old\n\n- archived\n");
    write(root, "notes/index.md", "# Not a year\n");
    tmp
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in page"))
}

#[test]
fn scan_and_generate_page() {
    let tree = forum_tree();
    let scanned = scan::scan(tree.path()).unwrap();

    let years: Vec<&str> = scanned
        .manifest
        .years
        .iter()
        .map(|y| y.name.as_str())
        .collect();
    assert_eq!(years, vec!["2025", "2024"]);

    let latest = &scanned.manifest.years[0];
    assert_eq!(latest.display_name, "Forum 2025");
    let titles: Vec<&str> = latest.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Beta", "Alpha", "Gamma"]);
    assert_eq!(scanned.manifest.total_topics(), 4);

    let missing: Vec<&Diagnostic> = scanned
        .diagnostics
        .warnings()
        .filter(|d| matches!(d, Diagnostic::DeclaredSectionMissing { section, .. } if section == "ghost"))
        .collect();
    assert_eq!(missing.len(), 1);

    let out = TempDir::new().unwrap();
    let page_path = out.path().join("site/index.html");
    generate::generate(&scanned.manifest, &SiteConfig::default(), &page_path).unwrap();

    let html = fs::read_to_string(&page_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(position(&html, r#"data-year="2025""#) < position(&html, r#"data-year="2024""#));
    assert!(position(&html, "section-2025-beta") < position(&html, "section-2025-alpha"));
    assert!(position(&html, "section-2025-alpha") < position(&html, "section-2025-gamma"));
    assert!(!html.contains("Hidden"));
    assert!(!html.contains("Not a year"));
}

#[test]
fn config_from_content_root_reaches_page() {
    let tree = forum_tree();
    write(
        tree.path(),
        "config.toml",
        "[site]\ntitle = \"Systems Forum\"\ncopyright = \"Systems Group\"\n",
    );

    let site_config = config::load_config(tree.path()).unwrap();
    let scanned = scan::scan(tree.path()).unwrap();
    let page_path = tree.path().join("index.html");
    generate::generate(&scanned.manifest, &site_config, &page_path).unwrap();

    let html = fs::read_to_string(&page_path).unwrap();
    assert!(html.contains("<title>Systems Forum</title>"));
    assert!(html.contains("\u{a9} 2025 Systems Group"));
}

#[test]
fn failed_scan_leaves_existing_page() {
    let tmp = TempDir::new().unwrap();
    let page_path = tmp.path().join("index.html");
    fs::write(&page_path, "previous").unwrap();

    let result = scan::scan(&tmp.path().join("does-not-exist"));
    assert!(matches!(result, Err(scan::ScanError::RootNotFound(_))));
    assert_eq!(fs::read_to_string(&page_path).unwrap(), "previous");
}

#[test]
fn root_without_years_is_fatal() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "drafts/index.md", "# Draft\n");
    let result = scan::scan(tmp.path());
    assert!(matches!(result, Err(scan::ScanError::NoYears(_))));
}
