//! HTML page generation.
//!
//! Stage 2 of the build. Takes the scan [`Manifest`] and renders one
//! self-contained HTML page with a tab per year and a card per section.
//!
//! ## Page Layout
//!
//! - **Header**: site title and tagline from `config.toml`
//! - **Tab bar**: one button per year, latest first and active on load
//! - **Tab panels**: section cards in resolved order, or an empty-state card
//! - **About block**: optional text plus topic statistics
//! - **Footer**: configured links and a copyright line for the latest year
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/tabs.js`: Client-side tab switching
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Everything is escaped except section bodies, which are already HTML.
//!
//! ## Writing
//!
//! The page is written to a temp file beside the target and then renamed
//! over it, so a failed run leaves any previous page untouched.

use crate::config::{self, SiteConfig, SiteInfo};
use crate::types::{Manifest, Section, YearFolder};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Nothing to render: no year folders")]
    EmptyManifest,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/tabs.js");
const ICON_CSS: &str =
    "https://cdn.jsdelivr.net/npm/font-awesome@4.7.0/css/font-awesome.min.css";

/// Render the page and write it to `output_path` in one step.
pub fn generate(
    manifest: &Manifest,
    config: &SiteConfig,
    output_path: &Path,
) -> Result<(), GenerateError> {
    if manifest.years.is_empty() {
        return Err(GenerateError::EmptyManifest);
    }
    let page = render_page(manifest, config);
    write_atomic(output_path, page.into_string().as_bytes())?;
    Ok(())
}

/// Write `data` to `path` through a temp file in the same directory.
pub fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    // Temp files are created 0600; the page has to be world-readable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(ICON_CSS);
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(site: &SiteInfo) -> Markup {
    html! {
        header.site-header {
            div.container {
                h1 { (site.title) }
                @if !site.tagline.is_empty() {
                    p.tagline { (site.tagline) }
                }
            }
        }
    }
}

/// Renders the year buttons. The first year starts active.
fn tab_bar(years: &[YearFolder]) -> Markup {
    html! {
        nav.tab-bar role="tablist" {
            @for (idx, year) in years.iter().enumerate() {
                @let active = idx == 0;
                button.tab-btn.tab-active[active] type="button" role="tab"
                    data-year=(year.name) aria-selected=(active.to_string()) {
                    (year.display_name)
                }
            }
        }
    }
}

fn year_panel(year: &YearFolder, active: bool, config: &SiteConfig) -> Markup {
    html! {
        section.tab-panel role="tabpanel" data-year=(year.name) hidden[!active] {
            @if year.sections.is_empty() {
                (empty_state(year, config))
            } @else {
                @for (idx, section) in year.sections.iter().enumerate() {
                    (section_card(&year.name, section, idx, config))
                }
            }
        }
    }
}

/// Card ids carry the year so equally named sections in different years stay unique.
fn section_card(year: &str, section: &Section, position: usize, config: &SiteConfig) -> Markup {
    let delay = format!("animation-delay: {}ms;", position * 100);
    let icon = config.cards.icon_for(&section.title);

    html! {
        article.card id={ "section-" (year) "-" (section.identifier) } style=(delay) {
            header.card-header {
                span.card-icon {
                    i class={ "fa " (icon) } {}
                }
                h3.card-title { (section.title) }
            }
            div.card-content {
                (PreEscaped(section.body_html.as_str()))
            }
        }
    }
}

fn empty_state(year: &YearFolder, config: &SiteConfig) -> Markup {
    html! {
        div.card.card-empty {
            h3 { "Nothing published for " (year.display_name) " yet" }
            @if !config.site.issues_url.is_empty() {
                a.propose-link href=(config.site.issues_url) target="_blank" rel="noopener noreferrer" {
                    "Propose a topic"
                }
            }
        }
    }
}

fn stat(value: &str, label: &str) -> Markup {
    html! {
        div.stat {
            div.stat-value { (value) }
            div.stat-label { (label) }
        }
    }
}

fn about_block(manifest: &Manifest, config: &SiteConfig) -> Markup {
    html! {
        section.about {
            h2 { "About " (config.site.title) }
            @if !config.site.about.is_empty() {
                p { (config.site.about) }
            }
            @if !config.site.issues_url.is_empty() {
                p {
                    "Want to give a talk? "
                    a href=(config.site.issues_url) target="_blank" rel="noopener noreferrer" {
                        "Open an issue"
                    }
                    "."
                }
            }
            div.stats {
                (stat(&manifest.total_topics().to_string(), "Topics"))
                (stat(&manifest.topic_areas().to_string(), "Topic areas"))
                @for item in &config.stats {
                    (stat(&item.value, &item.label))
                }
            }
        }
    }
}

fn site_footer(manifest: &Manifest, config: &SiteConfig) -> Markup {
    let latest = manifest
        .active_year()
        .map(|y| y.name.as_str())
        .unwrap_or_default();

    html! {
        footer.site-footer {
            div.container {
                @if !config.links.is_empty() {
                    ul.footer-links {
                        @for link in &config.links {
                            li {
                                a href=(link.url) target="_blank" rel="noopener noreferrer" {
                                    @if let Some(icon) = &link.icon {
                                        i class={ "fa " (icon) } {}
                                        " "
                                    }
                                    (link.label)
                                }
                            }
                        }
                    }
                }
                p.copyright {
                    "\u{a9} " (latest)
                    @if !config.site.copyright.is_empty() {
                        " " (config.site.copyright)
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole page.
pub fn render_page(manifest: &Manifest, config: &SiteConfig) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    let content = html! {
        (site_header(&config.site))
        main.container {
            (tab_bar(&manifest.years))
            @for (idx, year) in manifest.years.iter().enumerate() {
                (year_panel(year, idx == 0, config))
            }
            (about_block(manifest, config))
        }
        (site_footer(manifest, config))
        script { (PreEscaped(JS)) }
    };

    base_document(&config.site.title, &css, content)
}

// ============================================================================
// Tests
// ============================================================================
