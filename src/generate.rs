//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and writes the
//! final static site.
//!
//! ## Generated Pages
//!
//! - **Category pages** (`/{slug}.html`): Navigation bar, page heading, and
//!   the transformed entries, or an empty-state message when the source
//!   produced no fragments.
//! - **Index** (`/index.html`): Zero-delay client-side redirect to the
//!   first category page.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html            # Redirect to the first category
//! ├── nice-movie.html
//! ├── nice-music.html
//! └── nice-book.html
//! ```
//!
//! ## CSS
//!
//! The stylesheet is embedded at compile time (`static/style.css`) and
//! inlined into every page, prefixed with CSS custom properties generated
//! from the color config. No external assets, no JavaScript.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for the page shell. Body fragments
//! arrive pre-rendered from [`crate::transform`] and are spliced in with
//! `PreEscaped`: their interiors carry source text verbatim and are never
//! escaped. Generation is deterministic, so rebuilding from the same
//! manifest reproduces every output file byte for byte.

use crate::config::{self, SiteConfig};
use crate::transform;
use crate::types::{Manifest, SourcePage};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Message shown on a page whose source produced no entries.
const EMPTY_MESSAGE: &str = "No entries yet.";

/// Read a manifest from disk and write the site to `output_dir`.
pub fn generate(manifest_path: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, output_dir)
}

/// Write every category page plus the index redirect.
pub fn generate_site(manifest: &Manifest, output_dir: &Path) -> Result<(), GenerateError> {
    let css = site_css(&manifest.config);
    fs::create_dir_all(output_dir)?;

    for page in &manifest.pages {
        let page_html = render_page(page, &manifest.pages, &css);
        fs::write(output_dir.join(page.output_file()), page_html.into_string())?;
    }

    if let Some(first) = manifest.pages.first() {
        let redirect = render_redirect(&first.output_file());
        fs::write(output_dir.join("index.html"), redirect.into_string())?;
    }

    Ok(())
}

/// Full stylesheet: CSS custom properties from config, then the static rules.
fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
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
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the navigation bar linking every category page.
///
/// The entry whose slug matches `current_slug` is marked `active`.
pub fn render_nav(pages: &[SourcePage], current_slug: &str) -> Markup {
    html! {
        nav {
            @for page in pages {
                @let is_current = page.slug == current_slug;
                a href=(page.output_file()) class=[is_current.then_some("active")] {
                    (page.nav_label)
                }
            }
        }
    }
}

/// Renders one category page: nav, heading, then the transformed entries.
fn render_page(page: &SourcePage, all_pages: &[SourcePage], css: &str) -> Markup {
    let fragments = transform::transform(&page.content);
    let content = html! {
        (render_nav(all_pages, &page.slug))
        h1 { (page.title) }
        @if fragments.is_empty() {
            p.empty { (EMPTY_MESSAGE) }
        } @else {
            @for fragment in &fragments {
                (PreEscaped(fragment.as_str()))
                "\n"
            }
        }
    };
    base_document(&page.title, css, content)
}

/// Renders the minimal document that immediately redirects to `target`.
fn render_redirect(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta http-equiv="refresh" content=(format!("0;url={target}"));
            }
        }
    }
}
