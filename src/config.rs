//! Page configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root and is optional: stock defaults cover every key, and a
//! user file only overrides the values it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Tech Forum"      # Page <title> and header
//! tagline = ""              # Line under the title
//! about = ""                # Paragraph in the about block
//! issues_url = ""           # "Propose a topic" link (empty = hidden)
//! copyright = ""            # Holder named in the footer
//!
//! [cards]
//! default_icon = "fa-file-text-o"
//!
//! [cards.icons]             # Card title prefix (before '/') → icon class
//! Kernel = "fa-linux"
//!
//! [colors]
//! primary = "#1e3a8a"       # Header, titles
//! accent = "#3b82f6"        # Active tab, links, badges
//! background = "#f8fafc"
//! text = "#1f2937"
//!
//! [[stats]]                 # Extra figures in the about block
//! label = "Members"
//! value = "3600+"
//!
//! [[links]]                 # Footer links
//! label = "GitHub"
//! url = "https://github.com/example"
//! icon = "fa-github"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Page configuration loaded from `config.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Title, tagline and footer text.
    pub site: SiteInfo,
    /// Card icon selection.
    pub cards: CardsConfig,
    /// Page color scheme.
    pub colors: ColorConfig,
    /// Extra figures shown next to the computed topic statistics.
    pub stats: Vec<StatItem>,
    /// Footer links.
    pub links: Vec<LinkItem>,
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        for link in &self.links {
            if !(link.url.starts_with("http://") || link.url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "links: url for '{}' must start with http:// or https://",
                    link.label
                )));
            }
        }
        if !self.site.issues_url.is_empty()
            && !(self.site.issues_url.starts_with("http://")
                || self.site.issues_url.starts_with("https://"))
        {
            return Err(ConfigError::Validation(
                "site.issues_url must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub tagline: String,
    pub about: String,
    /// Where visitors propose topics. Empty hides the link.
    pub issues_url: String,
    pub copyright: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Tech Forum".to_string(),
            tagline: String::new(),
            about: String::new(),
            issues_url: String::new(),
            copyright: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardsConfig {
    pub default_icon: String,
    /// Keyed by the card title up to the first `/`, trimmed.
    pub icons: BTreeMap<String, String>,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            default_icon: "fa-file-text-o".to_string(),
            icons: BTreeMap::new(),
        }
    }
}

impl CardsConfig {
    /// Icon class for a card title: `"QEMU / Devices"` looks up `"QEMU"`.
    pub fn icon_for(&self, title: &str) -> &str {
        let key = title.split('/').next().unwrap_or(title).trim();
        self.icons
            .get(key)
            .map(String::as_str)
            .unwrap_or(&self.default_icon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#1e3a8a".to_string(),
            accent: "#3b82f6".to_string(),
            background: "#f8fafc".to_string(),
            text: "#1f2937".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkItem {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay (arrays included) replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, deserialize, validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# yearpage configuration
# ======================
# Place this file in the content root (next to the year folders).
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site text
# ---------------------------------------------------------------------------
[site]
# Page <title> and header.
title = "Tech Forum"

# Line shown under the title.
tagline = ""

# Paragraph shown in the about block above the statistics.
about = ""

# Link offered for proposing new topics (empty = no link).
issues_url = ""

# Copyright holder named in the footer, after the latest year.
copyright = ""

# ---------------------------------------------------------------------------
# Cards
# ---------------------------------------------------------------------------
[cards]
# Icon class used when no entry in [cards.icons] matches.
default_icon = "fa-file-text-o"

# Icon per card title prefix (text before the first '/', trimmed).
[cards.icons]
# Kernel = "fa-linux"
# QEMU = "fa-server"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#1e3a8a"       # Header, card titles
accent = "#3b82f6"        # Active tab, links, badges
background = "#f8fafc"
text = "#1f2937"

# ---------------------------------------------------------------------------
# Extra statistics (repeatable)
# ---------------------------------------------------------------------------
# [[stats]]
# label = "Members"
# value = "3600+"

# ---------------------------------------------------------------------------
# Footer links (repeatable)
# ---------------------------------------------------------------------------
# [[links]]
# label = "GitHub"
# url = "https://github.com/example"
# icon = "fa-github"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-accent: {accent};
    --color-bg: {background};
    --color-text: {text};
}}"#,
        primary = colors.primary,
        accent = colors.accent,
        background = colors.background,
        text = colors.text,
    )
}
