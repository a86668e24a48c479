//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping joke client errors
/// and adding configuration and input validation failures.
#[derive(Debug)]
pub enum JokerError {
    /// An error from the underlying joke client.
    Api(joker_api::Error),
    /// A configuration file could not be read or parsed.
    Config(String),
    /// A configuration value failed validation.
    InvalidInput(String),
}

impl fmt::Display for JokerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Config(msg) => write!(f, "Config error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for JokerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<joker_api::Error> for JokerError {
    fn from(e: joker_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<toml::de::Error> for JokerError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
