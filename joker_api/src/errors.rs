//! Error types for the joke client.

/// Errors that can occur when fetching a joke.
///
/// Unsuccessful HTTP statuses are not errors: they fold into
/// [`FetchResult::Empty`](crate::FetchResult::Empty).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (DNS, connection refused,
    /// reset, timeout) or the HTTP client could not be built.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint could not be parsed as a URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The response body did not have the expected shape.
    #[error("Failed to parse joke: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns true if the request was aborted because the timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Ways a response body can fail to yield joke text.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("missing \"value\" field")]
    MissingValue,
    #[error("\"value\" is not a string")]
    NotAString,
}
