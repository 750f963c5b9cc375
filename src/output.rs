//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every page is its semantic identity, positional index plus title,
//! with filesystem paths shown as secondary context via indented `Source:`
//! lines. This keeps the output readable as a content inventory while still
//! letting users trace pages back to specific files.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 🎬 Nice Movies (4 entries)
//!     Source: nice-movie.md
//! 002 🎵 Nice Music (0 entries)
//!     Source: nice-music.md (missing)
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 🎬 Nice Movies → nice-movie.html
//! 002 🎵 Nice Music → nice-music.html
//! Generated 2 category pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O beyond the config existence check, no side
//! effects.

use crate::types::Manifest;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a page header: positional index + title + entry count.
///
/// ```text
/// 001 🎬 Nice Movies (4 entries)
/// ```
fn page_header(index: usize, title: &str, entry_count: usize) -> String {
    format!("{} {} ({} entries)", format_index(index), title, entry_count)
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing discovered pages.
///
/// Missing source files are flagged on their `Source:` line; the page itself
/// is still listed since it will be generated in its empty state.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Pages".to_string());
    for (i, page) in manifest.pages.iter().enumerate() {
        lines.push(page_header(i + 1, &page.title, page.entry_count));
        let missing = if page.found { "" } else { " (missing)" };
        lines.push(format!("    Source: {}{}", page.source_file, missing));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (stock defaults)".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output showing generated HTML files.
///
/// Each page leads with its positional index and title, followed by `→` and
/// the output filename.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home \u{2192} index.html".to_string());
    for (i, page) in manifest.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            page.output_file()
        ));
    }

    lines.push(format!("Generated {} category pages", manifest.pages.len()));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
