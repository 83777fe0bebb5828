//! Section document parsing: title/body split and Markdown rendering.
//!
//! A section's `index.md` is split in two phases. The first level-1 heading
//! line becomes the card title and is removed; every other line is kept, in
//! order, and rendered to an HTML fragment.
//!
//! Rendering uses [pulldown-cmark](https://docs.rs/pulldown-cmark) with only
//! fenced code blocks (part of CommonMark) and pipe tables enabled.

use crate::naming::level1_heading;
use pulldown_cmark::{Options, Parser, html};

/// Title used when a document has no level-1 heading.
pub const UNTITLED: &str = "untitled";

/// A parsed section document.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub title: String,
    pub html: String,
}

/// Split off the first `# ` heading as the title and render the rest.
///
/// Later level-1 headings stay in the body and render as `<h1>`.
pub fn parse_fragment(document: &str) -> Fragment {
    let mut title = None;
    let mut body = String::with_capacity(document.len());

    for line in document.split_inclusive('\n') {
        if title.is_none()
            && let Some(heading) = level1_heading(line.trim())
        {
            title = Some(heading);
            continue;
        }
        body.push_str(line);
    }

    Fragment {
        title: title.unwrap_or_else(|| UNTITLED.to_string()),
        html: render_markdown(&body),
    }
}

/// Render Markdown with tables enabled and nothing else beyond CommonMark.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Count topic list items: lines that start with `- ` once trimmed.
pub fn count_topics(document: &str) -> usize {
    document
        .lines()
        .filter(|line| line.trim().starts_with("- "))
        .count()
}
