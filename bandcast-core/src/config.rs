use std::{
    env::{self, VarError},
    fs::File,
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

const DEFAULT_SOURCE_NAME: &str = "Bandcamp";
const DEFAULT_SOURCE_ID: &str = "bandcamp";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";

/// Identity namespace of this source inside the host, established once and
/// read-only afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub name: String,
    pub id: String,
    pub proxy_url: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SOURCE_NAME.to_string(),
            id: DEFAULT_SOURCE_ID.to_string(),
            proxy_url: None,
        }
    }
}

impl SourceConfig {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            proxy_url: None,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::info!("loading config: {:?}", path);
        let file = File::open(path)
            .map_err(|err| Error::ConfigError(format!("{}: {err}", path.display())))?;
        let mut config: Self = serde_json::from_reader(file)
            .map_err(|err| Error::ConfigError(format!("{}: {err}", path.display())))?;
        if config.proxy_url.is_none() {
            config.proxy_url = Self::proxy_from_env();
        }
        Ok(config)
    }

    pub fn with_proxy(mut self, proxy_url: Option<String>) -> Self {
        self.proxy_url = proxy_url;
        self
    }

    pub fn proxy_from_env() -> Option<String> {
        env::var(PROXY_ENV_VAR).map_or_else(
            |err| match err {
                VarError::NotPresent => None,
                VarError::NotUnicode(_) => {
                    log::error!("proxy URL is not a valid unicode");
                    None
                }
            },
            Some,
        )
    }
}
