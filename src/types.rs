//! Shared types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → generate) and
//! must be identical across both modules.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};

/// Manifest handed from the scan stage to the generate stage.
///
/// Carries everything generation needs: the resolved config and one
/// [`SourcePage`] per category, in navigation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// One entry per configured category, in navigation order.
    pub pages: Vec<SourcePage>,
    /// Config resolved at scan time (stock defaults plus user overrides).
    pub config: SiteConfig,
}

/// One category's source, resolved against the source directory.
///
/// A missing source file is not an error: `found` is false, `content` is
/// empty, and the page renders in its empty state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePage {
    /// Category slug; names both the source and output files.
    pub slug: String,
    /// Page heading and `<title>`.
    pub title: String,
    /// Navigation bar label.
    pub nav_label: String,
    /// Source filename relative to the source directory (`<slug>.md`).
    pub source_file: String,
    /// Whether the source file existed at scan time.
    pub found: bool,
    /// Raw source text (empty when the file was missing).
    pub content: String,
    /// Number of HTML fragments the transform will emit for this page.
    pub entry_count: usize,
}

impl SourcePage {
    /// Output filename, relative to the output directory.
    pub fn output_file(&self) -> String {
        format!("{}.html", self.slug)
    }
}
