use crate::{
    config::SourceConfig,
    error::Error,
    home::{self, HomePage, HomePager},
    http::{HttpClient, UreqClient},
    model::{Channel, Content, FeedCursor, Page, PlaylistDetails, VideoDetails},
    normalize, route, scrape,
    search::{self, SearchFilter},
    webapi::WebApi,
};

/// The Bandcamp content source.  Every operation is a blocking sequence of
/// upstream requests, nothing is kept between calls.
pub struct Bandcamp {
    config: SourceConfig,
    api: WebApi,
}

impl Bandcamp {
    pub fn new(config: SourceConfig, http: Box<dyn HttpClient>) -> Self {
        Self {
            config,
            api: WebApi::new(http),
        }
    }

    pub fn with_default_client(config: SourceConfig) -> Self {
        let http = UreqClient::new(config.proxy_url.as_deref());
        Self::new(config, Box::new(http))
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

/// Home feed.
impl Bandcamp {
    pub fn get_home(&self, cursor: Option<FeedCursor>) -> Result<HomePage, Error> {
        home::get_home(&self.api, &self.config, cursor)
    }

    pub fn home_pager(&self) -> HomePager<'_> {
        HomePager::new(&self.api, &self.config)
    }
}

/// Channels.
impl Bandcamp {
    pub fn is_channel_url(&self, url: &str) -> bool {
        route::is_channel(url)
    }

    pub fn get_channel(&self, url: &str) -> Result<Channel, Error> {
        let page = self.api.fetch_page(url)?;
        let band_id = scrape::contact_band_id(&page)?;
        let band = self.api.query_band(band_id)?;
        normalize::channel(&band, &self.config)
    }

    /// Everything the band lists on its music page, as a single page.
    pub fn get_channel_contents(&self, url: &str) -> Result<Page<Content>, Error> {
        let root = route::band_root(url).ok_or(Error::NotFound("band root URL"))?;
        // Some bands show a different page by default, so ask for the music
        // page explicitly.
        let page = self.api.fetch_page(&format!("{}/music", root))?;
        let band_id = scrape::contact_band_id(&page)?;
        let links = scrape::discography_links(&page);
        let band = self.api.query_band(band_id)?;
        let items = normalize::discography(&band, &links, url, &self.config)?;
        log::info!("channel {}: {} items", url, items.len());
        Ok(Page::single(items))
    }
}

/// Playlists (albums).
impl Bandcamp {
    pub fn is_playlist_url(&self, url: &str) -> bool {
        route::is_playlist(url)
    }

    pub fn get_playlist(&self, url: &str) -> Result<PlaylistDetails, Error> {
        let page = self.api.fetch_page(url)?;
        let ids = scrape::embedded_ids(&page)?;
        let slugs = scrape::track_slugs(&page);
        let album = self.api.query_album(ids.band_id, ids.tralbum_id)?;
        normalize::playlist(album, slugs, &self.config)
    }
}

/// Tracks.
impl Bandcamp {
    pub fn is_content_details_url(&self, url: &str) -> bool {
        route::is_track(url)
    }

    pub fn get_content_details(&self, url: &str) -> Result<VideoDetails, Error> {
        let page = self.api.fetch_page(url)?;
        let ids = scrape::embedded_ids(&page)?;
        let track = self.api.query_track(ids.band_id, ids.tralbum_id)?;
        normalize::track_details(&track, &self.config)
    }
}

/// Search.
impl Bandcamp {
    pub fn search(&self, query: &str, filter: Option<SearchFilter>) -> Result<Page<Content>, Error> {
        search::search(&self.api, &self.config, query, filter)
    }

    pub fn search_playlists(&self, query: &str) -> Result<Page<Content>, Error> {
        self.search(query, Some(SearchFilter::Albums))
    }

    pub fn search_channels(&self, query: &str) -> Result<Page<Content>, Error> {
        self.search(query, Some(SearchFilter::Bands))
    }
}
