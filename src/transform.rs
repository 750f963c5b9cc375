//! Line classification and HTML fragment emission.
//!
//! The markdown subset recognized here is deliberately tiny: a fixed set of
//! line-prefix patterns, each mapping to at most one HTML fragment. There is
//! no inline formatting, no nesting, and no escaping. Matched text is carried
//! into the output verbatim.
//!
//! ## Recognized lines
//!
//! | Line shape | Output |
//! |---|---|
//! | `# heading` | nothing (pages supply their own heading) |
//! | `### heading` | `<h3>heading</h3>` |
//! | `🔗 url` | embed fragment from [`crate::embed`] |
//! | `> quote` | `<blockquote>quote</blockquote>` |
//! | `*date*` | `<p class="date">date</p>` (asterisks stripped) |
//! | `---` | nothing |
//! | other non-blank | `<p>line</p>` |
//! | blank | nothing |
//!
//! ## Structure
//!
//! [`classify`] is a pure function from one line to a [`LineKind`]; it never
//! touches the filesystem and never fails. [`render`] turns a kind into its
//! fragment, or `None` for suppressed kinds. [`transform`] runs both over a
//! whole source text, emitting fragments in input line order. The scan stage
//! uses [`entry_count`] to report how many fragments a page will produce
//! without rendering any of them.

use crate::embed;

/// Marker prefix for link lines: the link emoji followed by a space.
pub const LINK_MARKER: &str = "🔗 ";

/// Classification of a single source line.
///
/// Payload slices borrow from the input line. Suppressed kinds (page title,
/// divider, blank) carry no payload and produce no fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# ` top-level heading. Suppressed; pages supply their own `<h1>`.
    PageTitle,
    /// `### ` section heading. Payload is the text after the 4-character
    /// prefix, whitespace preserved.
    Section(&'a str),
    /// `🔗 ` link line. Payload is the remainder with surrounding
    /// whitespace trimmed; resolved by [`crate::embed::resolve`].
    Link(&'a str),
    /// `> ` quote line. Payload is the text after the 2-character prefix.
    Quote(&'a str),
    /// Line wrapped in asterisks. Payload is the raw line; every `*` is
    /// stripped at render time.
    Date(&'a str),
    /// A `---` divider, modulo surrounding whitespace. Suppressed.
    Divider,
    /// Any other non-blank line. Payload is the untrimmed original.
    Text(&'a str),
    /// Empty or whitespace-only line. Suppressed.
    Blank,
}

impl LineKind<'_> {
    /// Whether this kind emits a fragment. False exactly for the suppressed
    /// kinds: [`LineKind::PageTitle`], [`LineKind::Divider`] and
    /// [`LineKind::Blank`].
    pub fn emits_fragment(&self) -> bool {
        !matches!(
            self,
            LineKind::PageTitle | LineKind::Divider | LineKind::Blank
        )
    }
}

/// Classify one line. First match wins; the rules are mutually exclusive by
/// construction.
///
/// The date rule inspects the raw line (not a trimmed copy) and requires a
/// length of at least 2, so a lone `*` cannot satisfy it with the same
/// character as both opening and closing marker. Such a line falls through
/// to [`LineKind::Text`].
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with("# ") {
        LineKind::PageTitle
    } else if let Some(rest) = line.strip_prefix("### ") {
        LineKind::Section(rest)
    } else if let Some(rest) = line.strip_prefix(LINK_MARKER) {
        LineKind::Link(rest.trim())
    } else if let Some(rest) = line.strip_prefix("> ") {
        LineKind::Quote(rest)
    } else if line.len() >= 2 && line.starts_with('*') && line.ends_with('*') {
        LineKind::Date(line)
    } else if line.trim() == "---" {
        LineKind::Divider
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(line)
    }
}

/// Render a classified line to its HTML fragment.
///
/// Suppressed kinds yield `None`. Payload text is inserted verbatim; this
/// module performs no escaping anywhere.
pub fn render(kind: LineKind<'_>) -> Option<String> {
    match kind {
        LineKind::PageTitle | LineKind::Divider | LineKind::Blank => None,
        LineKind::Section(text) => Some(format!("<h3>{text}</h3>")),
        LineKind::Link(url) => Some(embed::resolve(url).to_html()),
        LineKind::Quote(text) => Some(format!("<blockquote>{text}</blockquote>")),
        LineKind::Date(raw) => Some(format!(
            r#"<p class="date">{}</p>"#,
            raw.replace('*', "")
        )),
        LineKind::Text(line) => Some(format!("<p>{line}</p>")),
    }
}

/// Transform a whole source text into HTML fragments, one per recognized
/// line, in input line order. Infallible: unrecognized content falls back to
/// a plain paragraph or is suppressed as blank.
pub fn transform(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| render(classify(line)))
        .collect()
}

/// Number of fragments [`transform`] would emit for this content.
pub fn entry_count(content: &str) -> usize {
    content
        .lines()
        .filter(|line| classify(line).emits_fragment())
        .count()
}
