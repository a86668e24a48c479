use std::time::Duration;

use url::Url;

use crate::error::JokerError;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Endpoint must be an absolute http(s) URL with a host.
pub fn validate_endpoint(input: &str) -> Result<Url, JokerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(JokerError::InvalidInput("endpoint cannot be empty".into()));
    }
    let url = Url::parse(trimmed)
        .map_err(|e| JokerError::InvalidInput(format!("invalid endpoint '{}': {}", trimmed, e)))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(JokerError::InvalidInput(format!(
                "unsupported endpoint scheme '{}'. Use http or https",
                other
            )))
        }
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(JokerError::InvalidInput(format!(
            "endpoint '{}' has no host",
            trimmed
        )));
    }
    Ok(url)
}

pub fn validate_timeout(secs: u64) -> Result<Duration, JokerError> {
    if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(JokerError::InvalidInput(format!(
            "timeout must be between {} and {} seconds, got {}",
            MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, secs
        )));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses an integer setting read from the environment.
pub fn parse_env_u64(key: &str, value: &str) -> Result<u64, JokerError> {
    value.trim().parse::<u64>().map_err(|_| {
        JokerError::InvalidInput(format!(
            "{} must be a non-negative integer, got '{}'",
            key, value
        ))
    })
}
