//! Upstream JSON shapes, kept as close to the wire as possible.  Field names
//! follow the upstream, optional fields are whatever the upstream leaves out
//! or nulls in practice.

use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Deserializer};

/// `band_details` response, also the shape of a `"b"` search hit.
#[derive(Clone, Debug, Deserialize)]
pub struct BandPayload {
    pub id: u64,
    pub name: String,
    pub bio_image_id: Option<u64>,
    pub img_id: Option<u64>,
    pub bio: Option<String>,
    pub bandcamp_url: Option<String>,
    pub item_url_root: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub sites: Vec<Site>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub discography: Vec<DiscographyItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Site {
    pub url: String,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "item_type")]
pub enum DiscographyItem {
    #[serde(rename = "album")]
    Album(DiscographyEntry),
    #[serde(rename = "track")]
    Track(DiscographyEntry),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DiscographyEntry {
    pub item_id: u64,
    pub band_id: u64,
    pub band_name: String,
    pub title: String,
    pub art_id: Option<u64>,
}

/// `tralbum_details` response, for both albums and single tracks.
#[derive(Clone, Debug, Deserialize)]
pub struct TralbumPayload {
    pub id: u64,
    pub title: String,
    pub art_id: Option<u64>,
    pub release_date: Option<i64>,
    pub bandcamp_url: String,
    pub band: TralbumBand,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tracks: Vec<TralbumTrack>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TralbumBand {
    pub band_id: u64,
    pub name: String,
    pub image_id: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TralbumTrack {
    pub track_id: u64,
    pub title: String,
    pub art_id: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_secs")]
    pub duration: Duration,
    /// Codec name to stream URL, absent or null for unstreamable tracks.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub streaming_url: BTreeMap<String, String>,
    #[serde(default)]
    pub is_streamable: bool,
}

/// One entry of the `notabletralbum` batch response.
#[derive(Clone, Debug, Deserialize)]
pub struct NotablePayload {
    pub tralbum_id: u64,
    pub band_id: u64,
    pub artist: String,
    pub title: String,
    pub tralbum_url: String,
    pub art_id: Option<u64>,
    pub tralbum_url_hash: NotableDomain,
    pub mod_date: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NotableDomain {
    pub subdomain: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchPayload {
    pub auto: SearchResults,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchResults {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub results: Vec<SearchHit>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum SearchHit {
    #[serde(rename = "a")]
    Album(SearchItem),
    #[serde(rename = "b")]
    Band(BandPayload),
    #[serde(rename = "t")]
    Track(SearchItem),
    #[serde(other)]
    Unknown,
}

/// Album and track search hits share one shape.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchItem {
    pub id: u64,
    pub name: String,
    pub band_id: u64,
    pub band_name: String,
    pub item_url_root: String,
    pub item_url_path: String,
    pub art_id: Option<u64>,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

fn deserialize_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    // Unknown durations come back as null, occasionally as garbage.
    let secs = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(Duration::try_from_secs_f64(secs).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_tolerates_null_lists_and_unknown_items() {
        let band: BandPayload = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Band",
                "bio_image_id": null,
                "img_id": 42,
                "sites": null,
                "discography": [
                    {"item_type": "album", "item_id": 1, "band_id": 7, "band_name": "Band", "title": "A", "art_id": 11},
                    {"item_type": "merch", "item_id": 2},
                    {"item_type": "track", "item_id": 3, "band_id": 7, "band_name": "Band", "title": "T", "art_id": null}
                ]
            }"#,
        )
        .unwrap();
        assert!(band.sites.is_empty());
        assert_eq!(band.img_id, Some(42));
        assert_eq!(band.bio_image_id, None);
        assert!(matches!(band.discography[0], DiscographyItem::Album(ref e) if e.item_id == 1));
        assert!(matches!(band.discography[1], DiscographyItem::Unknown));
        assert!(matches!(band.discography[2], DiscographyItem::Track(ref e) if e.art_id.is_none()));
    }

    #[test]
    fn track_duration_and_streams_default_when_missing() {
        let track: TralbumTrack = serde_json::from_str(
            r#"{"track_id": 1, "title": "x", "duration": null, "streaming_url": null}"#,
        )
        .unwrap();
        assert_eq!(track.duration, Duration::ZERO);
        assert!(track.streaming_url.is_empty());
        assert!(!track.is_streamable);

        let track: TralbumTrack = serde_json::from_str(
            r#"{"track_id": 1, "title": "x", "duration": 181.5, "is_streamable": true,
                "streaming_url": {"mp3-128": "https://t4.bcbits.com/stream/1"}}"#,
        )
        .unwrap();
        assert_eq!(track.duration, Duration::from_secs_f64(181.5));
        assert_eq!(track.streaming_url.len(), 1);
    }

    #[test]
    fn search_hits_keep_unknown_tags_as_unknown() {
        let payload: SearchPayload = serde_json::from_str(
            r#"{"auto": {"results": [
                {"type": "f", "id": 1, "name": "fan"},
                {"type": "t", "id": 2, "name": "Song", "band_id": 3, "band_name": "B",
                 "item_url_root": "https://b.bandcamp.com",
                 "item_url_path": "https://b.bandcamp.com/track/song", "art_id": 9}
            ]}}"#,
        )
        .unwrap();
        assert!(matches!(payload.auto.results[0], SearchHit::Unknown));
        assert!(matches!(payload.auto.results[1], SearchHit::Track(ref t) if t.id == 2));
    }
}
