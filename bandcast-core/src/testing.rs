use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::{
    error::Error,
    http::{Headers, HttpClient, HttpResponse},
    webapi::WebApi,
};

#[derive(Clone, Debug)]
pub struct Request {
    pub url: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

/// Serves canned bodies by URL substring, first route wins, 404 otherwise.
#[derive(Default)]
pub struct FakeHttp {
    routes: Vec<(String, String)>,
    requests: Mutex<Vec<Request>>,
}

impl FakeHttp {
    pub fn route(mut self, url_part: &str, body: impl Into<String>) -> Self {
        self.routes.push((url_part.to_string(), body.into()));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn into_api(self) -> (WebApi, Arc<FakeHttp>) {
        let http = Arc::new(self);
        (WebApi::new(Box::new(http.clone())), http)
    }

    fn respond(&self, url: &str, body: Option<&Value>, headers: Headers) -> HttpResponse {
        self.requests.lock().unwrap().push(Request {
            url: url.to_string(),
            body: body.cloned(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        match self.routes.iter().find(|(part, _)| url.contains(part.as_str())) {
            Some((_, body)) => HttpResponse {
                status: 200,
                body: body.clone(),
            },
            None => HttpResponse {
                status: 404,
                body: String::new(),
            },
        }
    }
}

impl HttpClient for Arc<FakeHttp> {
    fn get(&self, url: &str, headers: Headers) -> Result<HttpResponse, Error> {
        Ok(self.respond(url, None, headers))
    }

    fn post_json(&self, url: &str, body: &Value, headers: Headers) -> Result<HttpResponse, Error> {
        Ok(self.respond(url, Some(body), headers))
    }
}
