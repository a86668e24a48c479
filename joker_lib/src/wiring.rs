//! Builds a ready-to-use joke client from configuration.

use joker_api::{parser::parse_value, Client, HttpClient};

use crate::config::JokerConfig;
use crate::error::JokerError;
use crate::validation::{validate_endpoint, validate_timeout};

/// Validates `config` and wires the transport, cache, and parser into a
/// [`Client`].
pub fn build_client(config: &JokerConfig) -> Result<Client, JokerError> {
    let endpoint = validate_endpoint(&config.endpoint)?;
    let timeout = validate_timeout(config.timeout_secs)?;

    let http = HttpClient::builder()
        .timeout(timeout)
        .cache_bytes(config.cache_bytes)
        .build()?;
    tracing::debug!(
        "Joke client for {} (timeout {}s, cache {} bytes)",
        endpoint,
        timeout.as_secs(),
        config.cache_bytes
    );

    let client = Client::builder()
        .endpoint(endpoint.as_str())
        .http(http)
        .parser(parse_value)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        let client = build_client(&JokerConfig::default()).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.chucknorris.io/jokes/random"
        );
        assert!(client.http().cache().is_some());
    }

    #[test]
    fn zero_cache_bytes_builds_without_cache() {
        let config = JokerConfig {
            cache_bytes: 0,
            ..JokerConfig::default()
        };
        let client = build_client(&config).unwrap();
        assert!(client.http().cache().is_none());
    }

    #[test]
    fn invalid_endpoint_rejected() {
        let config = JokerConfig {
            endpoint: "ftp://example.com".to_string(),
            ..JokerConfig::default()
        };
        assert!(matches!(
            build_client(&config),
            Err(JokerError::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = JokerConfig {
            timeout_secs: 0,
            ..JokerConfig::default()
        };
        assert!(matches!(
            build_client(&config),
            Err(JokerError::InvalidInput(_))
        ));
    }
}
