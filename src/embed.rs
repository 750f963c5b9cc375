//! URL classification and embed fragment rendering.
//!
//! Link lines carry a bare URL; this module decides which widget that URL
//! gets on the page. Recognition is pure string pattern matching: no network
//! calls, no reachability checks, no state.
//!
//! ## Classification
//!
//! 1. YouTube URLs carrying an 11-character video id (`watch?v=`, the
//!    `youtu.be` short host, or `/shorts/`) become inline video players.
//! 2. `open.spotify.com` track, album and playlist URLs become compact
//!    audio widgets.
//! 3. Everything else becomes a clickable link card showing the URL itself.
//!
//! Resolution is total: every input string maps to exactly one variant, and
//! anything that fails the first two patterns (wrong id length, unknown
//! resource type, arbitrary text) lands on the link card.

use regex::Regex;
use std::sync::LazyLock;

/// YouTube URL shapes that carry a video id. The id is exactly 11
/// characters from the `[A-Za-z0-9_-]` alphabet; a longer candidate matches
/// on its first 11 characters, a shorter one does not match at all.
static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/shorts/)([A-Za-z0-9_-]{11})")
        .expect("youtube pattern is valid")
});

/// Spotify resource URLs: host, resource type, then an alphanumeric id.
static SPOTIFY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"open\.spotify\.com/(track|album|playlist)/([A-Za-z0-9]+)")
        .expect("spotify pattern is valid")
});

/// Spotify resource kinds the embed player supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyResource {
    Track,
    Album,
    Playlist,
}

impl SpotifyResource {
    /// Path segment used in both the canonical and the embed URL.
    pub fn as_str(self) -> &'static str {
        match self {
            SpotifyResource::Track => "track",
            SpotifyResource::Album => "album",
            SpotifyResource::Playlist => "playlist",
        }
    }

    fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "track" => Some(SpotifyResource::Track),
            "album" => Some(SpotifyResource::Album),
            "playlist" => Some(SpotifyResource::Playlist),
            _ => None,
        }
    }
}

/// One classified URL, borrowing from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Embed<'a> {
    /// Inline YouTube player.
    YouTube { video_id: &'a str },
    /// Compact Spotify player.
    Spotify { resource: SpotifyResource, id: &'a str },
    /// Fallback link card; the URL doubles as the visible text.
    Link { url: &'a str },
}

/// Classify a URL into its embed variant.
pub fn resolve(url: &str) -> Embed<'_> {
    if let Some(caps) = YOUTUBE.captures(url)
        && let Some(id) = caps.get(1)
    {
        return Embed::YouTube {
            video_id: id.as_str(),
        };
    }
    if let Some(caps) = SPOTIFY.captures(url)
        && let (Some(kind), Some(id)) = (caps.get(1), caps.get(2))
        && let Some(resource) = SpotifyResource::from_path_segment(kind.as_str())
    {
        return Embed::Spotify {
            resource,
            id: id.as_str(),
        };
    }
    Embed::Link { url }
}

impl Embed<'_> {
    /// Render the HTML fragment for this embed. URLs and ids are inserted
    /// verbatim, without escaping.
    pub fn to_html(&self) -> String {
        match self {
            Embed::YouTube { video_id } => format!(
                r#"<div class="embed"><iframe src="https://www.youtube.com/embed/{video_id}" frameborder="0" allowfullscreen></iframe></div>"#
            ),
            Embed::Spotify { resource, id } => format!(
                r#"<div class="embed spotify"><iframe src="https://open.spotify.com/embed/{}/{id}" frameborder="0" allow="encrypted-media"></iframe></div>"#,
                resource.as_str()
            ),
            Embed::Link { url } => format!(
                r#"<a href="{url}" class="link-card" target="_blank">{url}</a>"#
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_url() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Embed::YouTube {
                video_id: "dQw4w9WgXcQ"
            }
        );
    }

    #[test]
    fn youtube_short_host() {
        assert_eq!(
            resolve("https://youtu.be/dQw4w9WgXcQ"),
            Embed::YouTube {
                video_id: "dQw4w9WgXcQ"
            }
        );
    }

    #[test]
    fn youtube_shorts_path() {
        assert_eq!(
            resolve("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Embed::YouTube {
                video_id: "dQw4w9WgXcQ"
            }
        );
    }

    #[test]
    fn youtube_id_with_trailing_query() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            Embed::YouTube {
                video_id: "dQw4w9WgXcQ"
            }
        );
    }

    #[test]
    fn youtube_overlong_id_takes_first_eleven() {
        assert_eq!(
            resolve("https://youtu.be/dQw4w9WgXcQX"),
            Embed::YouTube {
                video_id: "dQw4w9WgXcQ"
            }
        );
    }

    #[test]
    fn youtube_short_id_falls_back_to_link() {
        let url = "https://youtu.be/shortid";
        assert_eq!(resolve(url), Embed::Link { url });
    }

    #[test]
    fn youtube_id_alphabet_includes_dash_and_underscore() {
        assert_eq!(
            resolve("https://youtu.be/a-b_c-d_e-f"),
            Embed::YouTube {
                video_id: "a-b_c-d_e-f"
            }
        );
    }

    #[test]
    fn spotify_track() {
        assert_eq!(
            resolve("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
            Embed::Spotify {
                resource: SpotifyResource::Track,
                id: "4uLU6hMCjMI75M1A2tKUQC"
            }
        );
    }

    #[test]
    fn spotify_album() {
        assert_eq!(
            resolve("https://open.spotify.com/album/6dVIqQ8qmQ5GBnJ9shOYGE"),
            Embed::Spotify {
                resource: SpotifyResource::Album,
                id: "6dVIqQ8qmQ5GBnJ9shOYGE"
            }
        );
    }

    #[test]
    fn spotify_playlist() {
        assert_eq!(
            resolve("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"),
            Embed::Spotify {
                resource: SpotifyResource::Playlist,
                id: "37i9dQZF1DXcBWIGoYBM5M"
            }
        );
    }

    #[test]
    fn spotify_id_stops_at_query_string() {
        assert_eq!(
            resolve("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123"),
            Embed::Spotify {
                resource: SpotifyResource::Track,
                id: "4uLU6hMCjMI75M1A2tKUQC"
            }
        );
    }

    #[test]
    fn spotify_artist_falls_back_to_link() {
        let url = "https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF";
        assert_eq!(resolve(url), Embed::Link { url });
    }

    #[test]
    fn plain_url_becomes_link() {
        let url = "https://example.com/a-review";
        assert_eq!(resolve(url), Embed::Link { url });
    }

    #[test]
    fn non_url_text_becomes_link() {
        assert_eq!(resolve("not a url"), Embed::Link { url: "not a url" });
    }

    #[test]
    fn empty_string_becomes_link() {
        assert_eq!(resolve(""), Embed::Link { url: "" });
    }

    #[test]
    fn youtube_html_fragment() {
        let html = resolve("https://youtu.be/dQw4w9WgXcQ").to_html();
        assert_eq!(
            html,
            r#"<div class="embed"><iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ" frameborder="0" allowfullscreen></iframe></div>"#
        );
    }

    #[test]
    fn spotify_html_fragment() {
        let html = resolve("https://open.spotify.com/album/6dVIqQ8qmQ5GBnJ9shOYGE").to_html();
        assert_eq!(
            html,
            r#"<div class="embed spotify"><iframe src="https://open.spotify.com/embed/album/6dVIqQ8qmQ5GBnJ9shOYGE" frameborder="0" allow="encrypted-media"></iframe></div>"#
        );
    }

    #[test]
    fn link_card_html_fragment() {
        let html = resolve("https://example.com").to_html();
        assert_eq!(
            html,
            r#"<a href="https://example.com" class="link-card" target="_blank">https://example.com</a>"#
        );
    }

    #[test]
    fn link_card_shows_url_verbatim() {
        // No escaping anywhere, the href and text mirror the input exactly.
        let html = resolve("https://example.com/?a=1&b=2").to_html();
        assert!(html.contains(r#"href="https://example.com/?a=1&b=2""#));
        assert!(html.contains(">https://example.com/?a=1&b=2</a>"));
    }
}
