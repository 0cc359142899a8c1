use std::time::Duration;

use serde::Serialize;

use crate::model::{utils::serialize_secs, AuthorLink, PlatformId, Thumbnail};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VideoSummary {
    pub id: PlatformId,
    pub name: String,
    pub thumbnails: Vec<Thumbnail>,
    pub author: AuthorLink,
    pub url: String,
    #[serde(serialize_with = "serialize_secs")]
    pub duration: Duration,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VideoDetails {
    pub id: PlatformId,
    pub name: String,
    pub thumbnails: Vec<Thumbnail>,
    pub author: AuthorLink,
    pub url: String,
    #[serde(serialize_with = "serialize_secs")]
    pub duration: Duration,
    /// Release date as a unix timestamp, when the upstream provides one.
    pub datetime: Option<i64>,
    pub audio_sources: Vec<AudioSource>,
}

impl VideoDetails {
    pub fn summary(&self) -> VideoSummary {
        VideoSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnails: self.thumbnails.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            duration: self.duration,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AudioSource {
    /// Codec name as reported upstream, e.g. `mp3-128`.
    pub name: String,
    pub url: String,
    #[serde(serialize_with = "serialize_secs")]
    pub duration: Duration,
}
