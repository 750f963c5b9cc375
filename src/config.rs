//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Configuration is
//! two layers: stock defaults overridden by an optional user file in the
//! source directory.
//!
//! ## Config File Location
//!
//! Place `config.toml` next to the category source files:
//!
//! ```text
//! content/
//! ├── config.toml       # Optional (overrides stock defaults)
//! ├── nice-movie.md
//! ├── nice-music.md
//! └── nice-book.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # Categories drive everything: one source file, one output page, one nav
//! # entry each. Listing any categories replaces the stock set entirely.
//!
//! [[categories]]
//! slug = "nice-movie"          # Reads nice-movie.md, writes nice-movie.html
//! title = "🎬 Nice Movies"     # Page heading and <title>
//! nav_label = "🎬 Movies"      # Navigation bar label
//!
//! [colors]
//! background = "#0d1117"       # Page background
//! surface = "#161b22"          # Link card background
//! border = "#30363d"           # Nav and card borders
//! border_muted = "#21262d"     # Date separators, nav hover fill
//! text = "#e6edf3"             # Body text
//! heading = "#f0f6fc"          # Section headings
//! text_muted = "#8b949e"       # Quotes
//! faint = "#484f58"            # Dates and the empty-state message
//! accent = "#58a6ff"           # Links and quote borders
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want.
//!
//! ```toml
//! # Only override the accent color
//! [colors]
//! accent = "#ff7b72"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have stock defaults. User config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content categories, in navigation order.
    pub categories: Vec<Category>,
    /// Color scheme rendered as CSS custom properties.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            categories: stock_categories(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Validation(
                "categories must not be empty".into(),
            ));
        }
        for category in &self.categories {
            if category.slug.is_empty() {
                return Err(ConfigError::Validation(
                    "category slug must not be empty".into(),
                ));
            }
            if category.slug.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "category slug must not contain path separators: {:?}",
                    category.slug
                )));
            }
        }
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].iter().any(|c| c.slug == category.slug) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category slug: {:?}",
                    category.slug
                )));
            }
        }
        Ok(())
    }
}

/// One content category: a source file, an output page, and its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Identifier naming both files: reads `<slug>.md`, writes `<slug>.html`.
    pub slug: String,
    /// Page heading and `<title>`.
    pub title: String,
    /// Label in the navigation bar.
    pub nav_label: String,
}

impl Category {
    /// Source filename, relative to the source directory.
    pub fn source_file(&self) -> String {
        format!("{}.md", self.slug)
    }

    /// Output filename, relative to the output directory.
    pub fn output_file(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// The stock movie/music/book category set.
fn stock_categories() -> Vec<Category> {
    [
        ("nice-movie", "🎬 Nice Movies", "🎬 Movies"),
        ("nice-music", "🎵 Nice Music", "🎵 Music"),
        ("nice-book", "📚 Nice Books", "📚 Books"),
    ]
    .into_iter()
    .map(|(slug, title, nav_label)| Category {
        slug: slug.to_string(),
        title: title.to_string(),
        nav_label: nav_label.to_string(),
    })
    .collect()
}

/// Color scheme for the generated pages.
///
/// Each value becomes one CSS custom property; the static stylesheet refers
/// to colors only through those properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Link card background.
    pub surface: String,
    /// Nav bottom border and card borders.
    pub border: String,
    /// Date separators and the nav hover fill.
    pub border_muted: String,
    /// Body text.
    pub text: String,
    /// Section headings.
    pub heading: String,
    /// Quote text.
    pub text_muted: String,
    /// Dates and the empty-state message.
    pub faint: String,
    /// Links and quote borders.
    pub accent: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#0d1117".to_string(),
            surface: "#161b22".to_string(),
            border: "#30363d".to_string(),
            border_muted: "#21262d".to_string(),
            text: "#e6edf3".to_string(),
            heading: "#f0f6fc".to_string(),
            text_muted: "#8b949e".to_string(),
            faint: "#484f58".to_string(),
            accent: "#58a6ff".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely. In particular
///   a user `[[categories]]` list replaces the whole stock list.
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# shelflog Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the source directory, next to the category .md files.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Categories
# ---------------------------------------------------------------------------
# One entry per page, in navigation order. Each category reads <slug>.md
# from the source directory and writes <slug>.html to the output directory.
# Listing any categories here replaces the stock set entirely.

[[categories]]
slug = "nice-movie"
title = "🎬 Nice Movies"
nav_label = "🎬 Movies"

[[categories]]
slug = "nice-music"
title = "🎵 Nice Music"
nav_label = "🎵 Music"

[[categories]]
slug = "nice-book"
title = "📚 Nice Books"
nav_label = "📚 Books"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#0d1117"       # Page background
surface = "#161b22"          # Link card background
border = "#30363d"           # Nav and card borders
border_muted = "#21262d"     # Date separators, nav hover fill
text = "#e6edf3"             # Body text
heading = "#f0f6fc"          # Section headings
text_muted = "#8b949e"       # Quotes
faint = "#484f58"            # Dates and the empty-state message
accent = "#58a6ff"           # Links and quote borders
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {bg};
    --color-surface: {surface};
    --color-border: {border};
    --color-border-muted: {border_muted};
    --color-text: {text};
    --color-heading: {heading};
    --color-text-muted: {text_muted};
    --color-faint: {faint};
    --color-accent: {accent};
}}"#,
        bg = colors.background,
        surface = colors.surface,
        border = colors.border,
        border_muted = colors.border_muted,
        text = colors.text,
        heading = colors.heading,
        text_muted = colors.text_muted,
        faint = colors.faint,
        accent = colors.accent,
    )
}
