use std::{env, process};

use bandcast_core::{
    error::Error,
    model::{FeedCursor, PlaylistSummary, VideoDetails},
    route, Bandcamp, SearchFilter, SourceConfig,
};
use env_logger::{Builder, Env};
use serde::Serialize;

const ENV_LOG: &str = "BANDCAST_LOG";
const ENV_LOG_STYLE: &str = "BANDCAST_LOG_STYLE";
const ENV_CONFIG: &str = "BANDCAST_CONFIG";

const USAGE: &str = "usage: bandcast-cli <command> [args]

commands:
    home [offset]          notable releases, newest first
    channel <url>          band details
    contents <url>         everything on a band's music page
    playlist <url>         album details with its streamable tracks
    track <url>            track details with its audio sources
    search <query> [a|b|t] search albums, bands or tracks (default t)
    classify <url>         what kind of page a URL points at";

/// Playlist details with the track sequence drained, for printing.
#[derive(Serialize)]
struct PlaylistListing {
    #[serde(flatten)]
    summary: PlaylistSummary,
    video_count: usize,
    contents: Vec<VideoDetails>,
}

fn main() {
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn load_config() -> Result<SourceConfig, Error> {
    match env::var_os(ENV_CONFIG) {
        Some(path) => SourceConfig::load(path),
        None => Ok(SourceConfig::default().with_proxy(SourceConfig::proxy_from_env())),
    }
}

fn arg<'a>(args: &'a [String], index: usize, name: &'static str) -> Result<&'a str, Error> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::ConfigError(format!("missing <{name}>\n\n{USAGE}")))
}

fn print(value: &impl Serialize) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(args: &[String]) -> Result<(), Error> {
    let command = arg(args, 0, "command")?;
    if command == "classify" {
        let url = arg(args, 1, "url")?;
        println!("{}", route::classify(url).map_or("none", |kind| kind.as_str()));
        return Ok(());
    }

    let bandcamp = Bandcamp::with_default_client(load_config()?);
    match command {
        "home" => {
            let cursor = match args.get(1) {
                Some(offset) => Some(FeedCursor {
                    offset: offset
                        .parse()
                        .map_err(|_| Error::ConfigError(format!("invalid offset {offset:?}")))?,
                }),
                None => None,
            };
            print(&bandcamp.get_home(cursor)?)
        }
        "channel" => print(&bandcamp.get_channel(arg(args, 1, "url")?)?),
        "contents" => print(&bandcamp.get_channel_contents(arg(args, 1, "url")?)?),
        "playlist" => {
            let details = bandcamp.get_playlist(arg(args, 1, "url")?)?;
            print(&PlaylistListing {
                summary: details.summary(),
                video_count: details.video_count,
                contents: details.contents.collect(),
            })
        }
        "track" => print(&bandcamp.get_content_details(arg(args, 1, "url")?)?),
        "search" => {
            let query = arg(args, 1, "query")?;
            let filter = args
                .get(2)
                .map(|f| f.parse::<SearchFilter>())
                .transpose()?;
            print(&bandcamp.search(query, filter)?)
        }
        _ => Err(Error::ConfigError(format!(
            "unknown command {command:?}\n\n{USAGE}"
        ))),
    }
}
