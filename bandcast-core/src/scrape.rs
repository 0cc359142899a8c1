//! Best-effort extraction of identifiers from Bandcamp page markup.  Every
//! function answers one question about a page and is pure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

static CONTACT_BAND_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/contact\?b=(\d+)").unwrap());

// The page embeds its data blob HTML-escaped, so the quotes are `&quot;`.
static EMBEDDED_BAND_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"band_id&quot;:(\d+),").unwrap());
static EMBEDDED_TRALBUM_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"tralbum_id&quot;:(\d+),").unwrap());
static NOTABLE_SEQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"bcnt_seq&quot;:\[(\d+),").unwrap());

static DISCOGRAPHY_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(https://[^/"\s.]+\.bandcamp\.com)?(/(track|album)/[^"\s]*)""#).unwrap()
});
static TRACK_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"info_link[^\n]*?"(/track/[^"\s]*)""#).unwrap());

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmbeddedIds {
    pub band_id: u64,
    pub tralbum_id: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkKind {
    Album,
    Track,
}

/// An item link found on a band's music page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiscographyLink {
    /// `/album/...` or `/track/...`.
    pub path: String,
    pub kind: LinkKind,
    /// Scheme and host when the link was absolute.
    pub origin: Option<String>,
}

impl DiscographyLink {
    /// Absolute URL of the item, resolving relative links against `base`.
    pub fn url(&self, base: &str) -> String {
        let origin = self.origin.as_deref().unwrap_or(base);
        format!("{}{}", origin.trim_end_matches('/'), self.path)
    }
}

fn first_number<T: std::str::FromStr>(re: &Regex, html: &str) -> Option<T> {
    re.captures(html)?.get(1)?.as_str().parse().ok()
}

/// Band id from the contact link every band page carries.
pub fn contact_band_id(html: &str) -> Result<u64, Error> {
    first_number(&CONTACT_BAND_ID, html).ok_or(Error::NotFound("band id"))
}

/// Band and release ids from the data blob of an album or track page.
pub fn embedded_ids(html: &str) -> Result<EmbeddedIds, Error> {
    let band_id = first_number(&EMBEDDED_BAND_ID, html).ok_or(Error::NotFound("band id"))?;
    let tralbum_id =
        first_number(&EMBEDDED_TRALBUM_ID, html).ok_or(Error::NotFound("tralbum id"))?;
    Ok(EmbeddedIds {
        band_id,
        tralbum_id,
    })
}

/// Item links of a band's music page, in document order.
pub fn discography_links(html: &str) -> Vec<DiscographyLink> {
    DISCOGRAPHY_LINK
        .captures_iter(html)
        .map(|caps| DiscographyLink {
            path: caps[2].to_string(),
            kind: if &caps[3] == "album" {
                LinkKind::Album
            } else {
                LinkKind::Track
            },
            origin: caps.get(1).map(|m| m.as_str().to_string()),
        })
        .collect()
}

/// Track paths of an album page's tracklist, in document order.
pub fn track_slugs(html: &str) -> Vec<String> {
    TRACK_SLUG
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Newest notable release id advertised by the landing page.
pub fn latest_notable_id(html: &str) -> Option<i64> {
    first_number(&NOTABLE_SEQ, html)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAND_PAGE: &str = r#"
        <a href="/contact?b=3774983561&amp;n=x">Contact</a>
        <ol id="music-grid">
          <li><a href="/album/first-light">First Light</a></li>
          <li><a href="https://other.bandcamp.com/track/guest-spot">Guest Spot</a></li>
          <li><a href="/track/single">Single</a></li>
          <li><a href="/merch">Merch</a></li>
        </ol>
    "#;

    const ALBUM_PAGE: &str = r#"
        <script data-tralbum="{&quot;current&quot;:{&quot;band_id&quot;:3774983561,&quot;tralbum_id&quot;:2096513216,&quot;type&quot;:&quot;album&quot;}}"></script>
        <tr class="track_row_view"><td><div class="info_link"><a href="/track/one?action=download">info</a></div></td></tr>
        <tr class="track_row_view"><td><div class="info_link"><a href="/track/two">info</a></div></td></tr>
        <a href="/track/not-in-tracklist">elsewhere</a>
    "#;

    #[test]
    fn contact_id() {
        assert_eq!(contact_band_id(BAND_PAGE).unwrap(), 3774983561);
        assert!(matches!(
            contact_band_id("<html></html>"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn embedded_ids_need_encoded_quotes() {
        assert_eq!(
            embedded_ids(ALBUM_PAGE).unwrap(),
            EmbeddedIds {
                band_id: 3774983561,
                tralbum_id: 2096513216
            }
        );
        // Plain quotes are a different page format and must not match.
        assert!(embedded_ids(r#"{"band_id":1,"tralbum_id":2,}"#).is_err());
    }

    #[test]
    fn missing_tralbum_id_is_not_found() {
        match embedded_ids("band_id&quot;:5,") {
            Err(Error::NotFound(what)) => assert_eq!(what, "tralbum id"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn discography_links_keep_kind_and_origin() {
        let links = discography_links(BAND_PAGE);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].kind, LinkKind::Album);
        assert_eq!(links[0].origin, None);
        assert_eq!(
            links[0].url("https://band.bandcamp.com/"),
            "https://band.bandcamp.com/album/first-light"
        );
        assert_eq!(links[1].kind, LinkKind::Track);
        assert_eq!(
            links[1].url("https://band.bandcamp.com"),
            "https://other.bandcamp.com/track/guest-spot"
        );
        assert_eq!(links[2].path, "/track/single");
    }

    #[test]
    fn slugs_only_from_tracklist_rows() {
        assert_eq!(
            track_slugs(ALBUM_PAGE),
            vec!["/track/one?action=download", "/track/two"]
        );
    }

    #[test]
    fn notable_seed() {
        let html = r#"<div data-blob="{&quot;bcnt_seq&quot;:[4172,4171,4170]}">"#;
        assert_eq!(latest_notable_id(html), Some(4172));
        assert_eq!(latest_notable_id("<html>"), None);
    }
}
