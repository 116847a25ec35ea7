use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::DevToConfig;
use crate::error::Error;

const API_KEY_HEADER: &str = "api-key";
const USER_AGENT: &str = concat!("devto/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Dev.to REST API.
///
/// Built once at startup and shared by every operation. Cloning is cheap and
/// reuses the same connection pool.
#[derive(Debug, Clone)]
pub struct DevToClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<HeaderValue>,
}

impl DevToClient {
    pub fn new(config: &DevToConfig) -> Result<Self, Error> {
        let api_key = config
            .api_key
            .as_deref()
            .map(|key| {
                let mut value = HeaderValue::from_str(key).map_err(|_| {
                    Error::InvalidArgument("API key contains invalid header characters".into())
                })?;
                value.set_sensitive(true);
                Ok::<_, Error>(value)
            })
            .transpose()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::UpstreamUnavailable(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fail with [`Error::MissingApiKey`] unless writes can be authenticated.
    pub fn ensure_api_key(&self) -> Result<(), Error> {
        match self.api_key {
            Some(_) => Ok(()),
            None => Err(Error::MissingApiKey),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` with optional query parameters and decode the JSON body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        log::debug!("GET {url} {query:?}");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        send(request, &url).await
    }

    /// Send an authenticated write (`POST`/`PUT`) with a JSON body.
    ///
    /// Fails with [`Error::MissingApiKey`] before sending anything when no key is configured.
    pub async fn submit<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, Error> {
        let api_key = self.api_key.clone().ok_or(Error::MissingApiKey)?;
        let url = self.url(path);
        log::debug!("{method} {url}");

        let request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(body);

        send(request, &url).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> Result<T, Error> {
    let response = request.send().await.map_err(|e| {
        log::warn!("Request to {url} failed: {e}");
        Error::UpstreamUnavailable(format!("Request to {url} failed: {e}"))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::warn!("Dev.to API returned {status} for {url}");
        return Err(Error::UpstreamHttp {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(|e| {
        Error::UpstreamUnavailable(format!("Failed to read response from {url}: {e}"))
    })?;

    serde_json::from_slice(&bytes)
        .map_err(|e| Error::UnexpectedResponse(format!("Failed to parse response from {url}: {e}")))
}
