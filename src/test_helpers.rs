//! Shared test utilities for the shelflog test suite.
//!
//! Provides in-memory manifest builders so generation and output tests can
//! run without touching the scan stage or the filesystem.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let manifest = make_manifest(&[("nice-movie", "### 2024\n> good\n")]);
//! let page = make_page("nice-movie", "🎬 Nice Movies", "🎬 Movies", "");
//! ```

use crate::config::SiteConfig;
use crate::transform;
use crate::types::{Manifest, SourcePage};

/// Build a [`SourcePage`] directly, as the scan stage would from a found
/// source file.
pub fn make_page(slug: &str, title: &str, nav_label: &str, content: &str) -> SourcePage {
    SourcePage {
        slug: slug.to_string(),
        title: title.to_string(),
        nav_label: nav_label.to_string(),
        source_file: format!("{slug}.md"),
        found: true,
        content: content.to_string(),
        entry_count: transform::entry_count(content),
    }
}

/// Build a [`Manifest`] from `(slug, content)` pairs, reusing the slug as
/// title and nav label. Config is stock.
pub fn make_manifest(pages: &[(&str, &str)]) -> Manifest {
    Manifest {
        pages: pages
            .iter()
            .map(|(slug, content)| make_page(slug, slug, slug, content))
            .collect(),
        config: SiteConfig::default(),
    }
}
