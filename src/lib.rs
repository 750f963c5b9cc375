//! # shelflog
//!
//! A minimal static site generator for personal media logs. Your filesystem
//! is the data source: each category (movies, music, books) is one markdown
//! file of dated entries, and each file becomes one HTML page with a shared
//! navigation bar. Link lines turn into YouTube players, Spotify widgets, or
//! link cards.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! shelflog processes content through two independent stages, joined by a
//! JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (source files → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: generation is a pure function of the manifest, so tests
//!   can exercise page rendering without touching the source directory.
//! - **Composability**: a manifest produced anywhere (another tool, a test)
//!   generates the same site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — reads the category sources, produces the manifest |
//! | [`generate`] | Stage 2 — renders the HTML site from the manifest using Maud |
//! | [`transform`] | Line classifier: the markdown subset → HTML fragments |
//! | [`embed`] | URL resolver: YouTube / Spotify / link card fragments |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared types serialized between stages (`Manifest`, `SourcePage`) |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Line-Oriented Transform
//!
//! The markdown subset is deliberately line-oriented: every source line maps
//! to at most one HTML fragment, independent of its neighbors. There is no
//! inline formatting and no nesting, which keeps [`transform::classify`] a
//! total function over single lines and makes entry files trivially
//! diffable — one line, one fragment.
//!
//! ## Verbatim Body Fragments
//!
//! Entry fragments are plain strings spliced into the Maud shell with
//! `PreEscaped`. Source lines land in the page exactly as written, so
//! authors can drop raw HTML into an entry when they want to. The page
//! shell itself (titles, nav labels) still goes through Maud's
//! auto-escaping.
//!
//! ## Maud Over Template Engines
//!
//! The page shell is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Categories Are Config, Not Code
//!
//! The stock movie/music/book set lives in [`config::SiteConfig::default`],
//! not in match arms. A `config.toml` with a `[[categories]]` table swaps in
//! a completely different set of pages without touching the generator.
//!
//! # The "Forever Stack"
//!
//! The output is plain HTML and established CSS, inlined into each page. No
//! JavaScript, no external assets, no build-time network access. The
//! generated site can be dropped on any file server and will render
//! unchanged for as long as browsers render HTML.

pub mod config;
pub mod embed;
pub mod generate;
pub mod output;
pub mod scan;
pub mod transform;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
