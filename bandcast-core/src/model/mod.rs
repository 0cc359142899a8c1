mod channel;
mod id;
mod page;
mod playlist;
mod utils;
mod video;

pub use crate::model::{
    channel::Channel,
    id::{AuthorLink, PlatformId, CLAIM_TYPE},
    page::{Content, FeedCursor, Page},
    playlist::{PlaylistContents, PlaylistDetails, PlaylistSummary},
    utils::{serialize_secs, Thumbnail},
    video::{AudioSource, VideoDetails, VideoSummary},
};
