//! HTTP transport shared by joke clients.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, CACHE_CONTROL};
use reqwest::StatusCode;
use url::Url;

use crate::cache::{cache_lifetime, ResponseCache, DEFAULT_CACHE_BYTES};
use crate::Error;

/// Default bound on a whole request, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("joker/", env!("CARGO_PKG_VERSION"));

/// What came back from one GET.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    /// `None` when the body was empty, unreadable, or not UTF-8.
    pub body: Option<String>,
    pub from_cache: bool,
}

/// GET-only HTTP capability with an optional response cache.
///
/// Clones share the underlying connection pool and cache, so one
/// `HttpClient` can back any number of joke clients.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    cache: Option<Arc<ResponseCache>>,
}

impl HttpClient {
    /// Creates a client with the default timeout and a 1 MiB response cache.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// The response cache, if one is configured.
    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_deref()
    }

    /// Issues a GET to `url`, consulting the response cache first.
    ///
    /// Only failures to obtain a response are errors. A body that cannot be
    /// read is reported as `body: None`, unless the read failed because the
    /// timeout elapsed.
    pub async fn get(&self, url: &Url) -> Result<RawResponse, Error> {
        if let Some(body) = self.cache.as_ref().and_then(|c| c.get(url.as_str())) {
            tracing::debug!("Serving {} from response cache", url);
            return Ok(RawResponse {
                status: StatusCode::OK,
                body: Some(body),
                from_cache: true,
            });
        }

        tracing::debug!("GET {}", url);
        let resp = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let lifetime = cache_lifetime(cache_control(resp.headers()).as_deref());

        let body = match resp.bytes().await {
            Ok(bytes) if bytes.is_empty() => None,
            Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!("Response body is not UTF-8: {}", e);
                    None
                }
            },
            Err(e) if e.is_timeout() => {
                tracing::error!("Timed out reading response body: {}", e);
                return Err(Error::Transport(e));
            }
            Err(e) => {
                tracing::warn!("Failed to read response body: {}", e);
                None
            }
        };

        if status.is_success() {
            if let (Some(cache), Some(ttl), Some(body)) = (&self.cache, lifetime, &body) {
                tracing::debug!("Caching response for {} ({}s)", url, ttl.as_secs());
                cache.set(url.as_str().to_string(), body.clone(), ttl);
            }
        }

        Ok(RawResponse {
            status,
            body,
            from_cache: false,
        })
    }
}

/// All `Cache-Control` lines of a response, joined into one directive list.
fn cache_control(headers: &HeaderMap) -> Option<String> {
    let lines: Vec<&str> = headers
        .get_all(CACHE_CONTROL)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    (!lines.is_empty()).then(|| lines.join(","))
}

/// Builder for [`HttpClient`].
#[derive(Clone, Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    cache_bytes: u64,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            cache_bytes: DEFAULT_CACHE_BYTES,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Response cache capacity in bytes. `0` disables the cache.
    pub fn cache_bytes(mut self, cache_bytes: u64) -> Self {
        self.cache_bytes = cache_bytes;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> Result<HttpClient, Error> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        let cache =
            (self.cache_bytes > 0).then(|| Arc::new(ResponseCache::new(self.cache_bytes)));
        Ok(HttpClient { client, cache })
    }
}
