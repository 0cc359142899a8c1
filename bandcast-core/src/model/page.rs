use serde::{Deserialize, Serialize};

use crate::model::{Channel, PlaylistSummary, VideoSummary};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T, C = ()> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub context: C,
}

impl<T> Page<T> {
    pub fn single(items: Vec<T>) -> Self {
        Self {
            items,
            has_more: false,
            context: (),
        }
    }
}

/// Resume point of the home feed: the largest notable-album id not yet
/// returned.  Opaque to the host, which hands it back verbatim.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FeedCursor {
    pub offset: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Content {
    Channel(Channel),
    Playlist(PlaylistSummary),
    Video(VideoSummary),
}
