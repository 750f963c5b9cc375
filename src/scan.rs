//! Source discovery and manifest generation.
//!
//! Stage 1 of the build pipeline. Resolves each configured category against
//! the source directory, reads its source file, and produces the manifest
//! the generate stage consumes.
//!
//! ## Directory Structure
//!
//! The source directory is flat: one markdown file per category, plus an
//! optional config:
//!
//! ```text
//! content/                  # Source root
//! ├── config.toml           # Site configuration (optional)
//! ├── nice-movie.md
//! ├── nice-music.md
//! └── nice-book.md
//! ```
//!
//! ## Missing Files
//!
//! A missing source file is not an error. The category still gets a
//! manifest entry (`found: false`, empty content) and its page renders in
//! the empty state. Any other read failure, such as a permission problem,
//! surfaces as [`ScanError::Io`].
//!
//! ## Output
//!
//! Produces a [`Manifest`] containing:
//! - One [`SourcePage`] per category, in navigation order
//! - The resolved site configuration

use crate::config;
use crate::transform;
use crate::types::{Manifest, SourcePage};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Scan the source directory into a manifest.
///
/// Loads `config.toml` (stock defaults when absent), then reads one source
/// file per category, preserving config order.
pub fn scan(source_dir: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(source_dir)?;

    let mut pages = Vec::with_capacity(config.categories.len());
    for category in &config.categories {
        let source_file = category.source_file();
        let path = source_dir.join(&source_file);

        let (found, content) = match fs::read_to_string(&path) {
            Ok(text) => (true, text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => (false, String::new()),
            Err(err) => return Err(err.into()),
        };

        let entry_count = transform::entry_count(&content);

        pages.push(SourcePage {
            slug: category.slug.clone(),
            title: category.title.clone(),
            nav_label: category.nav_label.clone(),
            source_file,
            found,
            content,
            entry_count,
        });
    }

    Ok(Manifest { pages, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_reads_stock_categories() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("nice-movie.md"), "### 2024\n> good\n").unwrap();
        fs::write(tmp.path().join("nice-music.md"), "# Music\n").unwrap();

        let manifest = scan(tmp.path()).unwrap();

        assert_eq!(manifest.pages.len(), 3);
        let movie = &manifest.pages[0];
        assert_eq!(movie.slug, "nice-movie");
        assert!(movie.found);
        assert!(movie.content.contains("### 2024"));
    }

    #[test]
    fn scan_preserves_config_order() {
        let tmp = TempDir::new().unwrap();

        let manifest = scan(tmp.path()).unwrap();

        let slugs: Vec<&str> = manifest.pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["nice-movie", "nice-music", "nice-book"]);
    }

    #[test]
    fn missing_source_is_not_an_error() {
        let tmp = TempDir::new().unwrap();

        let manifest = scan(tmp.path()).unwrap();

        for page in &manifest.pages {
            assert!(!page.found);
            assert!(page.content.is_empty());
            assert_eq!(page.entry_count, 0);
        }
    }

    #[test]
    fn entry_count_skips_suppressed_lines() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("nice-book.md"),
            "# Books\n### 2024\n\n> quote\n---\n*2024-01-01*\n",
        )
        .unwrap();

        let manifest = scan(tmp.path()).unwrap();

        let book = manifest.pages.iter().find(|p| p.slug == "nice-book").unwrap();
        // Title, blank, and divider produce nothing; h3 + quote + date remain.
        assert_eq!(book.entry_count, 3);
    }

    #[test]
    fn source_file_names_derive_from_slug() {
        let tmp = TempDir::new().unwrap();

        let manifest = scan(tmp.path()).unwrap();

        assert_eq!(manifest.pages[0].source_file, "nice-movie.md");
        assert_eq!(manifest.pages[0].output_file(), "nice-movie.html");
    }

    #[test]
    fn scan_respects_custom_categories() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[[categories]]
slug = "films"
title = "Films"
nav_label = "Films"
"#,
        )
        .unwrap();
        fs::write(tmp.path().join("films.md"), "plain entry\n").unwrap();

        let manifest = scan(tmp.path()).unwrap();

        assert_eq!(manifest.pages.len(), 1);
        assert_eq!(manifest.pages[0].slug, "films");
        assert!(manifest.pages[0].found);
        assert_eq!(manifest.pages[0].entry_count, 1);
    }

    #[test]
    fn scan_carries_config_into_manifest() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[colors]
accent = "#ff7b72"
"##,
        )
        .unwrap();

        let manifest = scan(tmp.path()).unwrap();

        assert_eq!(manifest.config.colors.accent, "#ff7b72");
        // Untouched values stay stock
        assert_eq!(manifest.config.colors.background, "#0d1117");
    }

    #[test]
    fn invalid_config_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not valid toml [[[").unwrap();

        let result = scan(tmp.path());
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn scan_of_nonexistent_directory_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("no-such-dir");

        let manifest = scan(&missing).unwrap();

        assert_eq!(manifest.pages.len(), 3);
        assert!(manifest.pages.iter().all(|p| !p.found));
    }

    #[test]
    fn manifest_roundtrips_through_json() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("nice-movie.md"), "### 2024\n").unwrap();

        let manifest = scan(tmp.path()).unwrap();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let restored: Manifest = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.pages.len(), manifest.pages.len());
        assert_eq!(restored.pages[0].content, manifest.pages[0].content);
        assert_eq!(restored.config.colors.accent, manifest.config.colors.accent);
    }
}
