//! Shared types passed between the scan and generate stages.
//!
//! The scan stage produces a [`Manifest`] plus a [`Diagnostics`] log; the
//! generate stage only ever reads the manifest. Both are plain data so the
//! `manifest` subcommand can dump them as JSON.

use serde::Serialize;

/// A single topic card inside a year tab.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Subdirectory name. Also the link target used by the year's declared order.
    pub identifier: String,
    /// First `# heading` of the section's `index.md`, or `"untitled"`.
    pub title: String,
    /// Rendered HTML fragment. Inserted verbatim into the page.
    pub body_html: String,
    /// Number of `- ` list items in the section's `index.md`.
    pub topic_count: usize,
}

/// One year tab with its ordered sections.
#[derive(Debug, Clone, Serialize)]
pub struct YearFolder {
    /// Directory name, digits only.
    pub name: String,
    /// Tab label: first `# heading` of the year's `index.md`, or `name`.
    pub display_name: String,
    pub sections: Vec<Section>,
}

impl YearFolder {
    pub fn topic_count(&self) -> usize {
        self.sections.iter().map(|s| s.topic_count).sum()
    }
}

/// Everything the page renderer needs, years ordered latest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Manifest {
    pub years: Vec<YearFolder>,
}

impl Manifest {
    /// Sum of topic list items across every section of every year.
    pub fn total_topics(&self) -> usize {
        self.years.iter().map(YearFolder::topic_count).sum()
    }

    /// Number of section cards across all years.
    pub fn topic_areas(&self) -> usize {
        self.years.iter().map(|y| y.sections.len()).sum()
    }

    /// The year shown when the page opens.
    pub fn active_year(&self) -> Option<&YearFolder> {
        self.years.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// Something worth telling the operator about, recorded while scanning.
///
/// Nothing here aborts a run; fatal conditions are `ScanError`s instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Year has no `index.md`; tab name and order fall back to defaults.
    YearIndexMissing { year: String },
    /// Year `index.md` exists but could not be read.
    YearIndexUnreadable { year: String, error: String },
    YearIndexParsed {
        year: String,
        display_name: String,
        declared: Vec<String>,
    },
    /// Year subdirectories could not be listed.
    YearUnlistable { year: String, error: String },
    /// Declared order names a subdirectory that does not exist.
    DeclaredSectionMissing { year: String, section: String },
    /// Subdirectory has no `index.md`; it gets no card.
    SectionIndexMissing { year: String, section: String },
    /// Reading or parsing a section failed; it gets no card.
    SectionFailed {
        year: String,
        section: String,
        error: String,
    },
    SectionParsed {
        year: String,
        section: String,
        title: String,
        topics: usize,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::YearIndexMissing { .. }
            | Diagnostic::YearIndexParsed { .. }
            | Diagnostic::SectionParsed { .. } => Severity::Info,
            Diagnostic::YearIndexUnreadable { .. }
            | Diagnostic::YearUnlistable { .. }
            | Diagnostic::DeclaredSectionMissing { .. }
            | Diagnostic::SectionIndexMissing { .. }
            | Diagnostic::SectionFailed { .. } => Severity::Warning,
        }
    }
}

/// Ordered log of diagnostics, passed by `&mut` into the scan stage.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
