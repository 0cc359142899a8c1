use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::PlatformId;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Channel {
    pub id: PlatformId,
    pub name: String,
    pub thumbnail: String,
    pub description: String,
    pub url: String,
    /// External site key (domain without scheme and `www.`) to link URL.
    pub links: BTreeMap<String, String>,
}
