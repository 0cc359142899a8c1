use std::{fmt, str::FromStr};

use crate::{
    config::SourceConfig,
    error::Error,
    model::{Content, Page},
    normalize,
    webapi::{payload::SearchHit, WebApi},
};

/// Narrows a search to one result type.  The upstream always wants one, so
/// an unfiltered search sends `Tracks`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SearchFilter {
    Albums,
    Bands,
    #[default]
    Tracks,
}

impl SearchFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Albums => "a",
            Self::Bands => "b",
            Self::Tracks => "t",
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "album" | "albums" => Ok(Self::Albums),
            "b" | "band" | "bands" => Ok(Self::Bands),
            "t" | "track" | "tracks" => Ok(Self::Tracks),
            _ => Err(Error::ConfigError(format!("unknown search filter {:?}", s))),
        }
    }
}

pub fn search(
    api: &WebApi,
    config: &SourceConfig,
    query: &str,
    filter: Option<SearchFilter>,
) -> Result<Page<Content>, Error> {
    let filter = filter.unwrap_or_default();
    let payload = api.query_search(query, filter.as_str())?;
    let total = payload.auto.results.len();
    let items: Vec<_> = payload
        .auto
        .results
        .iter()
        .filter_map(|hit| demux(hit, config))
        .collect::<Result<_, _>>()?;
    log::info!(
        "search {:?} ({}): {} of {} results kept",
        query,
        filter,
        items.len(),
        total
    );
    Ok(Page::single(items))
}

fn demux(hit: &SearchHit, config: &SourceConfig) -> Option<Result<Content, Error>> {
    Some(match hit {
        SearchHit::Album(item) => Ok(Content::Playlist(normalize::search_album(item, config))),
        SearchHit::Band(band) => normalize::channel(band, config).map(Content::Channel),
        SearchHit::Track(item) => Ok(Content::Video(normalize::search_track(item, config))),
        SearchHit::Unknown => return None,
    })
}
