//! Directory and heading naming rules shared by the scanner and parsers.
//!
//! ## Year folders
//!
//! A top-level directory is a year when its name is made of ASCII digits only.
//! There is no length or range check: `2025`, `7` and `000123` all qualify,
//! `2025-old` and `v2025` do not.
//!
//! ## Hidden entries
//!
//! Subdirectories whose name starts with `.` are never turned into sections.
//!
//! ## Level-1 headings
//!
//! Index and section documents name themselves with their first `# ` line.
//! Leading `#` and space characters are stripped from it:
//! - `# QEMU / Devices` → "QEMU / Devices"
//! - `  # Kernel  ` → "Kernel" (the caller trims the line first)

/// File name of the document that names a folder and declares its order.
pub const INDEX_FILE: &str = "index.md";

/// True for names made entirely of ASCII decimal digits.
pub fn is_year_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Extract the text of a level-1 heading from an already-trimmed line.
///
/// Returns `None` unless the line starts with `# `. `## Sub` is not a
/// level-1 heading.
pub fn level1_heading(trimmed: &str) -> Option<String> {
    if !trimmed.starts_with("# ") {
        return None;
    }
    Some(trimmed.trim_start_matches(['#', ' ']).trim().to_string())
}
