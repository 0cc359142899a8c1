//! Home feed of notable releases.  The upstream has no paging token, so the
//! feed walks the notable id space downwards from the newest id advertised
//! on the landing page.

use crate::{
    config::SourceConfig,
    error::Error,
    model::{FeedCursor, Page, PlaylistSummary},
    normalize, scrape,
    webapi::{WebApi, BASE_URL},
};

pub const PAGE_SIZE: i64 = 15;

pub type HomePage = Page<PlaylistSummary, Option<FeedCursor>>;

/// Ids requested for the page starting at `offset`, newest first.
pub fn batch_ids(offset: i64) -> Vec<i64> {
    (0..PAGE_SIZE)
        .map(|i| offset - i)
        .filter(|&id| id > 0)
        .collect()
}

pub fn next_offset(offset: i64) -> i64 {
    offset - PAGE_SIZE - 1
}

fn seed(api: &WebApi) -> Result<Option<i64>, Error> {
    let landing = api.fetch_page(BASE_URL)?;
    Ok(scrape::latest_notable_id(&landing))
}

pub fn get_home(
    api: &WebApi,
    config: &SourceConfig,
    cursor: Option<FeedCursor>,
) -> Result<HomePage, Error> {
    let offset = match cursor {
        Some(cursor) => cursor.offset,
        None => match seed(api)? {
            Some(offset) => offset,
            None => {
                log::warn!("landing page has no notable sequence, home feed is empty");
                return Ok(Page {
                    items: Vec::new(),
                    has_more: false,
                    context: None,
                });
            }
        },
    };

    let ids = batch_ids(offset);
    let items = if ids.is_empty() {
        Vec::new()
    } else {
        // Keyed ascending, the feed shows the newest first.
        api.query_notable(&ids)?
            .into_values()
            .rev()
            .map(|item| normalize::notable(&item, config))
            .collect()
    };

    let next = next_offset(offset);
    log::info!(
        "home page at {}: {} releases, next offset {}",
        offset,
        items.len(),
        next
    );
    Ok(Page {
        items,
        has_more: next > 0,
        context: Some(FeedCursor { offset: next }),
    })
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeedState {
    Start,
    Active(FeedCursor),
    Exhausted,
}

/// Walks the home feed page by page until it runs out or a request fails.
pub struct HomePager<'a> {
    api: &'a WebApi,
    config: &'a SourceConfig,
    state: FeedState,
}

impl<'a> HomePager<'a> {
    pub fn new(api: &'a WebApi, config: &'a SourceConfig) -> Self {
        Self {
            api,
            config,
            state: FeedState::Start,
        }
    }

    pub fn resume(api: &'a WebApi, config: &'a SourceConfig, cursor: FeedCursor) -> Self {
        Self {
            api,
            config,
            state: FeedState::Active(cursor),
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }
}

impl Iterator for HomePager<'_> {
    type Item = Result<Vec<PlaylistSummary>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = match self.state {
            FeedState::Start => None,
            FeedState::Active(cursor) => Some(cursor),
            FeedState::Exhausted => return None,
        };
        match get_home(self.api, self.config, cursor) {
            Ok(page) => {
                self.state = match page.context {
                    Some(next) if page.has_more => FeedState::Active(next),
                    _ => FeedState::Exhausted,
                };
                Some(Ok(page.items))
            }
            Err(err) => {
                self.state = FeedState::Exhausted;
                Some(Err(err))
            }
        }
    }
}
