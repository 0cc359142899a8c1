use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static BAND_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?([a-z0-9-]+)\.bandcamp\.com(?::\d+)?(/[^?#]*)?(?:[?#].*)?$")
        .unwrap()
});

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UrlKind {
    Channel,
    Playlist,
    Track,
}

impl UrlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Playlist => "playlist",
            Self::Track => "track",
        }
    }
}

/// Classify a Bandcamp URL by shape alone.  `None` for anything that is not
/// a band page.
pub fn classify(url: &str) -> Option<UrlKind> {
    let caps = BAND_URL.captures(url.trim())?;
    if caps[1].eq_ignore_ascii_case("www") {
        return None;
    }
    let mut segments = caps
        .get(2)
        .map_or("", |m| m.as_str())
        .split('/')
        .filter(|s| !s.is_empty());
    match segments.next() {
        Some("album") => segments.next().map(|_| UrlKind::Playlist),
        Some("track") => segments.next().map(|_| UrlKind::Track),
        _ => Some(UrlKind::Channel),
    }
}

pub fn is_channel(url: &str) -> bool {
    classify(url) == Some(UrlKind::Channel)
}

pub fn is_playlist(url: &str) -> bool {
    classify(url) == Some(UrlKind::Playlist)
}

pub fn is_track(url: &str) -> bool {
    classify(url) == Some(UrlKind::Track)
}

/// Root of the band site `url` belongs to, e.g. `https://band.bandcamp.com`.
/// Bands on custom domains get the URL origin instead.
pub fn band_root(url: &str) -> Option<String> {
    if let Some(caps) = BAND_URL.captures(url.trim()) {
        return Some(format!(
            "https://{}.bandcamp.com",
            caps[1].to_ascii_lowercase()
        ));
    }
    let parsed = Url::parse(url).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(parsed.origin().ascii_serialization()),
        _ => None,
    }
}
