//! Client configuration: built-in defaults, an optional TOML file, then
//! environment overrides.

use std::path::Path;
use std::time::Duration;

use joker_api::{cache::DEFAULT_CACHE_BYTES, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use serde::Deserialize;

use crate::error::JokerError;
use crate::validation::parse_env_u64;

pub const ENV_ENDPOINT: &str = "JOKER_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "JOKER_TIMEOUT_SECS";
pub const ENV_CACHE_BYTES: &str = "JOKER_CACHE_BYTES";

/// Settings used to wire up a joke client.
///
/// Values are not validated here; see [`crate::wiring::build_client`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JokerConfig {
    /// Full URL of the random joke resource.
    pub endpoint: String,
    /// Bound on a whole request, in seconds.
    pub timeout_secs: u64,
    /// Response cache capacity in bytes. `0` disables the cache.
    pub cache_bytes: u64,
}

impl Default for JokerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            cache_bytes: DEFAULT_CACHE_BYTES,
        }
    }
}

impl JokerConfig {
    /// Loads the file at `path` (or defaults when `None`), then applies
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, JokerError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, JokerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JokerError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parses TOML. Missing keys keep their defaults; unknown keys are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self, JokerError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `JOKER_*` overrides obtained through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, JokerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_env_u64(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(bytes) = lookup(ENV_CACHE_BYTES) {
            self.cache_bytes = parse_env_u64(ENV_CACHE_BYTES, &bytes)?;
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
