use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use crate::error::Error;

pub const NET_CONNECT_TIMEOUT: Duration = Duration::from_millis(8 * 1000);

pub const NET_IO_TIMEOUT: Duration = Duration::from_millis(16 * 1000);

pub type Headers<'a> = &'a [(&'a str, &'a str)];

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into `Error::HttpStatus`, returning the body
    /// otherwise.
    pub fn into_body(self, url: &str) -> Result<String, Error> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(Error::HttpStatus {
                url: url.to_string(),
                status: self.status,
            })
        }
    }
}

/// Blocking HTTP primitives the source is built on.  Implementations must not
/// retry on their own.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str, headers: Headers) -> Result<HttpResponse, Error>;

    fn post_json(&self, url: &str, body: &Value, headers: Headers)
        -> Result<HttpResponse, Error>;
}

pub struct UreqClient {
    agent: Agent,
}

impl UreqClient {
    pub fn new(proxy_url: Option<&str>) -> Self {
        let mut config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(20)))
            .timeout_connect(Some(NET_CONNECT_TIMEOUT))
            .timeout_recv_response(Some(NET_IO_TIMEOUT))
            .timeout_send_request(Some(NET_IO_TIMEOUT))
            .http_status_as_error(false);

        if let Some(proxy_url) = proxy_url {
            let proxy = ureq::Proxy::new(proxy_url).ok();
            if proxy.is_none() {
                log::warn!("ignoring invalid proxy URL {:?}", proxy_url);
            }
            config = config.proxy(proxy);
        }

        Self {
            agent: config.build().into(),
        }
    }
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str, headers: Headers) -> Result<HttpResponse, Error> {
        let mut request = self.agent.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let mut response = request.call()?;
        Ok(HttpResponse {
            status: response.status().as_u16(),
            body: response.body_mut().read_to_string()?,
        })
    }

    fn post_json(
        &self,
        url: &str,
        body: &Value,
        headers: Headers,
    ) -> Result<HttpResponse, Error> {
        let mut request = self.agent.post(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let mut response = request.send_json(body)?;
        Ok(HttpResponse {
            status: response.status().as_u16(),
            body: response.body_mut().read_to_string()?,
        })
    }
}
