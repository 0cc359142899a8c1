use std::collections::BTreeMap;

use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    error::Error,
    http::{Headers, HttpClient},
    webapi::payload::{BandPayload, NotablePayload, SearchPayload, TralbumPayload},
};

pub const BASE_URL: &str = "https://bandcamp.com";

const BAND_DETAILS_PATH: &str = "/api/mobile/22/band_details";
const TRALBUM_DETAILS_PATH: &str = "/api/mobile/22/tralbum_details";
const SEARCH_PATH: &str = "/api/bcsearch_public_api/1/autocomplete_elastic";
const NOTABLE_PATH: &str = "/api/notabletralbum/2/get";

const HEADERS: Headers = &[("Connection", "keep-alive")];

/// Upstream request shapes.  Nothing here looks inside a response beyond
/// decoding it.
pub struct WebApi {
    http: Box<dyn HttpClient>,
}

impl WebApi {
    pub fn new(http: Box<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Fetch `url` and return the raw body.  Used for HTML pages.
    pub fn fetch_page(&self, url: &str) -> Result<String, Error> {
        log::debug!("fetching page {}", url);
        self.http.get(url, HEADERS)?.into_body(url)
    }

    /// GET `path` from the API and decode the JSON body.
    fn load<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = format!("{}{}", BASE_URL, path);
        let body = self.fetch_page(&url)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST `body` to `path` and decode the JSON response.
    fn send<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, Error> {
        let url = format!("{}{}", BASE_URL, path);
        log::debug!("posting to {}: {}", url, body);
        let body = self.http.post_json(&url, &body, HEADERS)?.into_body(&url)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Band endpoints.
impl WebApi {
    pub fn query_band(&self, band_id: u64) -> Result<BandPayload, Error> {
        self.send(BAND_DETAILS_PATH, json!({ "band_id": band_id }))
    }
}

/// Album and track endpoints.
impl WebApi {
    pub fn query_album(&self, band_id: u64, album_id: u64) -> Result<TralbumPayload, Error> {
        self.query_tralbum(band_id, album_id, "a")
    }

    pub fn query_track(&self, band_id: u64, track_id: u64) -> Result<TralbumPayload, Error> {
        self.query_tralbum(band_id, track_id, "t")
    }

    fn query_tralbum(
        &self,
        band_id: u64,
        tralbum_id: u64,
        tralbum_type: &str,
    ) -> Result<TralbumPayload, Error> {
        self.send(
            TRALBUM_DETAILS_PATH,
            json!({
                "band_id": band_id,
                "tralbum_id": tralbum_id,
                "tralbum_type": tralbum_type,
            }),
        )
    }
}

/// Notable (home feed) endpoints.
impl WebApi {
    /// Batch lookup of notable releases.  Ids the upstream doesn't know are
    /// missing from the result.
    pub fn query_notable(&self, ids: &[i64]) -> Result<BTreeMap<u64, NotablePayload>, Error> {
        let ids = ids.iter().join(",");
        self.load(&format!("{}?id={}", NOTABLE_PATH, ids))
    }
}

/// Search endpoints.
impl WebApi {
    pub fn query_search(&self, text: &str, filter: &str) -> Result<SearchPayload, Error> {
        self.send(
            SEARCH_PATH,
            json!({
                "search_text": text,
                "search_filter": filter,
                "full_page": true,
                "fan_id": null,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHttp;

    #[test]
    fn tralbum_query_sends_type_tag() {
        let (api, http) = FakeHttp::default().route("tralbum", "{}").into_api();
        let _ = api.query_track(1, 2);
        let request = &http.requests()[0];
        assert_eq!(
            request.url,
            "https://bandcamp.com/api/mobile/22/tralbum_details"
        );
        assert_eq!(
            request.body.as_ref().unwrap(),
            &json!({"band_id": 1, "tralbum_id": 2, "tralbum_type": "t"})
        );
        assert_eq!(
            request.headers,
            vec![("Connection".to_string(), "keep-alive".to_string())]
        );
    }

    #[test]
    fn notable_query_joins_ids_and_keys_by_number() {
        let (api, http) = FakeHttp::default()
            .route(
                "notabletralbum",
                r#"{"9": {"tralbum_id": 9, "band_id": 1, "artist": "A", "title": "T",
                          "tralbum_url": "https://a.bandcamp.com/album/t", "art_id": 5,
                          "tralbum_url_hash": {"subdomain": "a"}}}"#,
            )
            .into_api();
        let result = api.query_notable(&[10, 9, 8]).unwrap();
        assert_eq!(
            http.requests()[0].url,
            "https://bandcamp.com/api/notabletralbum/2/get?id=10,9,8"
        );
        assert_eq!(result.keys().copied().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn search_query_body() {
        let (api, http) = FakeHttp::default()
            .route("autocomplete", r#"{"auto": {"results": []}}"#)
            .into_api();
        let result = api.query_search("lofi", "b").unwrap();
        assert!(result.auto.results.is_empty());
        assert_eq!(
            http.requests()[0].body.as_ref().unwrap(),
            &json!({"search_text": "lofi", "search_filter": "b", "full_page": true, "fan_id": null})
        );
    }

    #[test]
    fn undecodable_body_is_malformed_upstream() {
        let (api, _) = FakeHttp::default().route("band_details", "<html>").into_api();
        assert!(matches!(api.query_band(1), Err(Error::MalformedUpstream(_))));
    }

    #[test]
    fn error_status_is_reported_with_url() {
        let (api, _) = FakeHttp::default().into_api();
        match api.fetch_page("https://x.bandcamp.com/music") {
            Err(Error::HttpStatus { status, url }) => {
                assert_eq!(status, 404);
                assert_eq!(url, "https://x.bandcamp.com/music");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
