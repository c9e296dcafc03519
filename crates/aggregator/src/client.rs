//! HTTP client for one breed data provider
//!
//! Both providers share the same request shape: a GET against
//! `<base_url>/<segments...>` with the provider key in `x-api-key` and
//! caching disabled so every page load sees fresh data. Path segments are
//! percent-encoded, so caller-supplied ids cannot add query strings or
//! climb out of the endpoint path.

use pets_core::ProviderConfig;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::error::RequestError;

/// Header carrying the provider API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Client bound to a single provider
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ProviderClient {
    /// Build a client from provider settings.
    pub fn new(config: &ProviderConfig) -> Result<Self, RequestError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| RequestError::Setup(format!("invalid API key header: {e}")))?;
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| RequestError::Setup(format!("invalid base URL {}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(RequestError::Setup(format!(
                "base URL {} cannot carry a path",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RequestError::Setup(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Provider base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint URL with each of `segments` appended as one encoded path segment.
    ///
    /// `.` and `..` segments are dropped rather than resolved.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET the endpoint at `segments` with `query` parameters and decode the JSON body.
    pub async fn get_json<T>(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        debug!(url = %url, ?query, "Upstream request");

        let response = self
            .http
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(RequestError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "Upstream non-success status");
            return Err(RequestError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(RequestError::Decode)
    }
}
