use std::fmt;

use serde::Serialize;

use crate::model::{AuthorLink, PlatformId, VideoDetails};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlaylistSummary {
    pub id: PlatformId,
    pub author: AuthorLink,
    pub url: String,
    pub name: String,
    pub thumbnail: String,
}

pub struct PlaylistDetails {
    pub id: PlatformId,
    pub author: AuthorLink,
    pub url: String,
    pub name: String,
    pub thumbnail: String,
    /// Number of tracks on the release, streamable or not.
    pub video_count: usize,
    pub contents: PlaylistContents,
}

impl PlaylistDetails {
    pub fn summary(&self) -> PlaylistSummary {
        PlaylistSummary {
            id: self.id.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            name: self.name.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

impl fmt::Debug for PlaylistDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaylistDetails")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("url", &self.url)
            .field("video_count", &self.video_count)
            .finish_non_exhaustive()
    }
}

/// Streamable tracks of a playlist, converted one at a time as they are
/// pulled.  Consumed by iteration, it cannot be rewound.
pub struct PlaylistContents {
    tracks: Box<dyn Iterator<Item = VideoDetails> + Send>,
}

impl PlaylistContents {
    pub fn new(tracks: impl Iterator<Item = VideoDetails> + Send + 'static) -> Self {
        Self {
            tracks: Box::new(tracks),
        }
    }
}

impl Iterator for PlaylistContents {
    type Item = VideoDetails;

    fn next(&mut self) -> Option<Self::Item> {
        self.tracks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tracks.size_hint()
    }
}
