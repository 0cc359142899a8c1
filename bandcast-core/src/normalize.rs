//! Mapping from the upstream payload shapes to the unified model.  Each
//! fallback between upstream fields is an ordered preference list, first
//! present value wins.

use std::collections::BTreeMap;

use url::Url;

use crate::{
    config::SourceConfig,
    error::Error,
    model::{
        AudioSource, AuthorLink, Channel, Content, PlatformId, PlaylistContents, PlaylistDetails,
        PlaylistSummary, Thumbnail, VideoDetails, VideoSummary,
    },
    route,
    scrape::{DiscographyLink, LinkKind},
    webapi::payload::{
        BandPayload, DiscographyItem, NotablePayload, SearchItem, TralbumPayload, TralbumTrack,
    },
};

const IMAGE_BASE: &str = "https://f4.bcbits.com/img";

pub const LISTING_QUALITY: u32 = 5;
pub const DETAILS_ART_QUALITY: u32 = 10;
pub const DETAILS_AUTHOR_QUALITY: u32 = 3;

pub fn band_image_url(image_id: Option<u64>, quality: u32) -> String {
    image_id.map_or_else(String::new, |id| {
        format!("{}/00{}_{}.jpg", IMAGE_BASE, id, quality)
    })
}

pub fn art_image_url(art_id: Option<u64>, quality: u32) -> String {
    art_id.map_or_else(String::new, |id| {
        format!("{}/a{}_{}.jpg", IMAGE_BASE, id, quality)
    })
}

fn art_thumbnails(art_id: Option<u64>, quality: u32) -> Vec<Thumbnail> {
    art_id
        .map(|_| Thumbnail::new(art_image_url(art_id, quality), quality))
        .into_iter()
        .collect()
}

fn band_image_id(band: &BandPayload) -> Option<u64> {
    band.bio_image_id.or(band.img_id)
}

/// Key for an external site link: the host without `www.`.
pub fn link_key(site_url: &str) -> Option<String> {
    let parsed = if site_url.contains("://") {
        Url::parse(site_url)
    } else {
        Url::parse(&format!("https://{}", site_url))
    }
    .ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

pub fn channel(band: &BandPayload, config: &SourceConfig) -> Result<Channel, Error> {
    let url = band
        .bandcamp_url
        .as_ref()
        .or(band.item_url_root.as_ref())
        .ok_or_else(|| Error::MalformedUpstream(format!("band {} has no URL", band.id)))?;

    let mut links = BTreeMap::new();
    for site in &band.sites {
        match link_key(&site.url) {
            Some(key) => {
                links.insert(key, site.url.clone());
            }
            None => log::debug!("skipping unparseable band link {:?}", site.url),
        }
    }

    Ok(Channel {
        id: PlatformId::new(config, band.id),
        name: band.name.clone(),
        thumbnail: band_image_url(band_image_id(band), LISTING_QUALITY),
        description: band.bio.clone().unwrap_or_default(),
        url: url.clone(),
        links,
    })
}

fn search_author(item: &SearchItem, config: &SourceConfig) -> AuthorLink {
    AuthorLink {
        id: PlatformId::new(config, item.band_id),
        name: item.band_name.clone(),
        url: item.item_url_root.clone(),
        thumbnail: String::new(),
    }
}

pub fn search_album(item: &SearchItem, config: &SourceConfig) -> PlaylistSummary {
    PlaylistSummary {
        id: PlatformId::new(config, item.id),
        author: search_author(item, config),
        url: item.item_url_path.clone(),
        name: item.name.clone(),
        thumbnail: art_image_url(item.art_id, LISTING_QUALITY),
    }
}

pub fn search_track(item: &SearchItem, config: &SourceConfig) -> VideoSummary {
    VideoSummary {
        id: PlatformId::new(config, item.id),
        name: item.name.clone(),
        thumbnails: art_thumbnails(item.art_id, LISTING_QUALITY),
        author: search_author(item, config),
        url: item.item_url_path.clone(),
        duration: Default::default(),
    }
}

pub fn notable(item: &NotablePayload, config: &SourceConfig) -> PlaylistSummary {
    PlaylistSummary {
        id: PlatformId::new(config, item.tralbum_id),
        author: AuthorLink {
            id: PlatformId::new(config, item.band_id),
            name: item.artist.clone(),
            url: format!("https://{}.bandcamp.com", item.tralbum_url_hash.subdomain),
            thumbnail: String::new(),
        },
        url: item.tralbum_url.clone(),
        name: item.title.clone(),
        thumbnail: art_image_url(item.art_id, LISTING_QUALITY),
    }
}

/// Pair the band's discography with the links scraped from its music page.
/// The two lists only correlate by position, so their lengths must agree.
pub fn discography(
    band: &BandPayload,
    links: &[DiscographyLink],
    page_url: &str,
    config: &SourceConfig,
) -> Result<Vec<Content>, Error> {
    if band.discography.len() != links.len() {
        return Err(Error::Misaligned {
            what: "discography links",
            expected: band.discography.len(),
            found: links.len(),
        });
    }
    let base = band
        .bandcamp_url
        .clone()
        .or_else(|| route::band_root(page_url))
        .unwrap_or_else(|| page_url.to_string());
    let thumbnail = band_image_url(band_image_id(band), LISTING_QUALITY);

    let contents = band
        .discography
        .iter()
        .zip(links)
        .filter_map(|(item, link)| {
            let (entry, kind) = match item {
                DiscographyItem::Album(entry) => (entry, LinkKind::Album),
                DiscographyItem::Track(entry) => (entry, LinkKind::Track),
                DiscographyItem::Unknown => return None,
            };
            if kind != link.kind {
                log::warn!(
                    "discography item {} is {:?} but its link {} is {:?}",
                    entry.item_id,
                    kind,
                    link.path,
                    link.kind
                );
            }
            let author = AuthorLink {
                id: PlatformId::new(config, entry.band_id),
                name: entry.band_name.clone(),
                url: page_url.to_string(),
                thumbnail: thumbnail.clone(),
            };
            let url = link.url(&base);
            Some(match kind {
                LinkKind::Album => Content::Playlist(PlaylistSummary {
                    id: PlatformId::new(config, entry.item_id),
                    author,
                    url,
                    name: entry.title.clone(),
                    thumbnail: art_image_url(entry.art_id, LISTING_QUALITY),
                }),
                LinkKind::Track => Content::Video(VideoSummary {
                    id: PlatformId::new(config, entry.item_id),
                    name: entry.title.clone(),
                    thumbnails: art_thumbnails(entry.art_id, LISTING_QUALITY),
                    author,
                    url,
                    duration: Default::default(),
                }),
            })
        })
        .collect();
    Ok(contents)
}

fn tralbum_author(tralbum: &TralbumPayload, config: &SourceConfig) -> Result<AuthorLink, Error> {
    let url = route::band_root(&tralbum.bandcamp_url).ok_or_else(|| {
        Error::MalformedUpstream(format!("unusable release URL {:?}", tralbum.bandcamp_url))
    })?;
    Ok(AuthorLink {
        id: PlatformId::new(config, tralbum.band.band_id),
        name: tralbum.band.name.clone(),
        url,
        thumbnail: band_image_url(tralbum.band.image_id, DETAILS_AUTHOR_QUALITY),
    })
}

fn audio_sources(track: &TralbumTrack) -> Vec<AudioSource> {
    track
        .streaming_url
        .iter()
        .map(|(codec, url)| AudioSource {
            name: codec.clone(),
            url: url.clone(),
            duration: track.duration,
        })
        .collect()
}

/// Line the album's tracks up with the tracklist slugs of its page.  The page
/// either lists every track or only the streamable ones.
fn pair_slugs(
    tracks: Vec<TralbumTrack>,
    slugs: Vec<String>,
) -> Result<Vec<(TralbumTrack, String)>, Error> {
    let streamable = tracks.iter().filter(|t| t.is_streamable).count();
    if slugs.len() == tracks.len() {
        Ok(tracks
            .into_iter()
            .zip(slugs)
            .filter(|(track, _)| track.is_streamable)
            .collect())
    } else if slugs.len() == streamable {
        Ok(tracks
            .into_iter()
            .filter(|track| track.is_streamable)
            .zip(slugs)
            .collect())
    } else {
        Err(Error::Misaligned {
            what: "track slugs",
            expected: tracks.len(),
            found: slugs.len(),
        })
    }
}

pub fn playlist(
    album: TralbumPayload,
    slugs: Vec<String>,
    config: &SourceConfig,
) -> Result<PlaylistDetails, Error> {
    let author = tralbum_author(&album, config)?;
    let video_count = album.tracks.len();
    let id = PlatformId::new(config, album.id);
    let url = album.bandcamp_url.clone();
    let name = album.title.clone();
    let thumbnail = art_image_url(album.art_id, LISTING_QUALITY);

    let paired = pair_slugs(album.tracks, slugs)?;
    let contents = {
        let config = config.clone();
        let author = author.clone();
        let album_art = album.art_id;
        let datetime = album.release_date;
        paired.into_iter().map(move |(track, slug)| VideoDetails {
            id: PlatformId::new(&config, track.track_id),
            name: track.title.clone(),
            thumbnails: art_thumbnails(track.art_id.or(album_art), LISTING_QUALITY),
            author: author.clone(),
            url: format!("{}{}", author.url, slug),
            duration: track.duration,
            datetime,
            audio_sources: audio_sources(&track),
        })
    };

    Ok(PlaylistDetails {
        id,
        author,
        url,
        name,
        thumbnail,
        video_count,
        contents: PlaylistContents::new(contents),
    })
}

/// Details of a single-track release.
pub fn track_details(track: &TralbumPayload, config: &SourceConfig) -> Result<VideoDetails, Error> {
    let details = track.tracks.first().ok_or_else(|| {
        Error::MalformedUpstream(format!("track release {} lists no tracks", track.id))
    })?;
    Ok(VideoDetails {
        id: PlatformId::new(config, track.id),
        name: details.title.clone(),
        thumbnails: art_thumbnails(details.art_id.or(track.art_id), DETAILS_ART_QUALITY),
        author: tralbum_author(track, config)?,
        url: track.bandcamp_url.clone(),
        duration: details.duration,
        datetime: track.release_date,
        audio_sources: audio_sources(details),
    })
}
