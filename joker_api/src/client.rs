//! HTTP client for the random joke service.

use std::time::Duration;

use url::Url;

use crate::{
    cache::DEFAULT_CACHE_BYTES,
    http::{HttpClient, DEFAULT_TIMEOUT},
    parser::{parse_value, Parser},
    Error, FetchResult,
};

/// Base URL of the production joke service.
pub const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io";
/// Path of the random joke resource.
pub const RANDOM_JOKE_PATH: &str = "/jokes/random";
/// Full URL of the production random joke endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.chucknorris.io/jokes/random";

/// Client for the random joke service.
///
/// The endpoint, transport, and parser are fixed at construction. Each call
/// to [`Client::fetch_joke`] is independent, so a client can be shared
/// across tasks and called concurrently.
#[derive(Clone)]
pub struct Client {
    endpoint: Url,
    http: HttpClient,
    parser: Parser,
}

impl Client {
    /// Creates a client pointing at the production joke service.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Creates a client for the random joke resource under `base_url`. Used
    /// for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), RANDOM_JOKE_PATH);
        Self::builder().endpoint(&endpoint).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Fetches one random joke.
    ///
    /// Non-2xx statuses, missing bodies, and empty joke text yield
    /// `Ok(FetchResult::Empty)`. Failures to reach the service and bodies
    /// of the wrong shape are errors. Dropping the returned future aborts
    /// the request.
    pub async fn fetch_joke(&self) -> Result<FetchResult, Error> {
        let resp = self.http.get(&self.endpoint).await?;

        if !resp.status.is_success() {
            let snippet = resp.body.as_deref().map(truncate_body).unwrap_or_default();
            tracing::warn!("Request failed with status {}: {}", resp.status, snippet);
            return Ok(FetchResult::Empty);
        }

        let Some(body) = resp.body else {
            tracing::warn!("Joke service returned status {} with no body", resp.status);
            return Ok(FetchResult::Empty);
        };

        let text = (self.parser)(&body).map_err(|e| {
            tracing::error!("Failed to parse joke: {} | body: {}", e, truncate_body(&body));
            Error::Parse(e)
        })?;

        let result = FetchResult::from_text(text);
        if result.is_empty() {
            tracing::debug!("Joke service returned an empty joke");
        }
        Ok(result)
    }
}

/// Builder for [`Client`].
#[derive(Clone)]
pub struct ClientBuilder {
    endpoint: String,
    http: Option<HttpClient>,
    parser: Parser,
    timeout: Duration,
    cache_bytes: u64,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: None,
            parser: parse_value,
            timeout: DEFAULT_TIMEOUT,
            cache_bytes: DEFAULT_CACHE_BYTES,
        }
    }
}

impl ClientBuilder {
    /// Full URL of the joke resource.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Uses an existing transport. `timeout` and `cache_bytes` are then
    /// ignored in favour of the transport's own settings.
    pub fn http(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Response cache capacity in bytes. `0` disables the cache.
    pub fn cache_bytes(mut self, cache_bytes: u64) -> Self {
        self.cache_bytes = cache_bytes;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let endpoint = Url::parse(&self.endpoint).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder()
                .timeout(self.timeout)
                .cache_bytes(self.cache_bytes)
                .build()?,
        };
        Ok(Client {
            endpoint,
            http,
            parser: self.parser,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let client = Client::new().unwrap();
        assert_eq!(client.endpoint().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(
            DEFAULT_ENDPOINT,
            format!("{}{}", DEFAULT_BASE_URL, RANDOM_JOKE_PATH)
        );
    }

    #[test]
    fn base_url_gets_joke_path() {
        let client = Client::with_base_url("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:8080/jokes/random"
        );
    }

    #[test]
    fn invalid_endpoint_rejected() {
        let result = Client::builder().endpoint("not a url").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(2500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.chars().filter(|c| *c == 'é').count(), 2000);
    }
}
