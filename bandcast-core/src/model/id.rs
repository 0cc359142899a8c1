use serde::{Deserialize, Serialize};

use crate::config::SourceConfig;

/// Tag distinguishing Bandcamp identities from other sources in the host.
pub const CLAIM_TYPE: u32 = 16;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PlatformId {
    pub source_name: String,
    pub native_id: String,
    pub source_id: String,
    pub claim_type: u32,
}

impl PlatformId {
    pub fn new(config: &SourceConfig, native_id: impl ToString) -> Self {
        Self {
            source_name: config.name.clone(),
            native_id: native_id.to_string(),
            source_id: config.id.clone(),
            claim_type: CLAIM_TYPE,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AuthorLink {
    pub id: PlatformId,
    pub name: String,
    pub url: String,
    /// Empty when the upstream shape carries no artist image.
    pub thumbnail: String,
}
