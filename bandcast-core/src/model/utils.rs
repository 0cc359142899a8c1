use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub quality: u32,
}

impl Thumbnail {
    pub fn new(url: String, quality: u32) -> Self {
        Self { url, quality }
    }
}

pub fn serialize_secs<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(duration.as_secs())
}
