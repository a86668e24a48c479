//! Library layer for Joker: configuration, client wiring, and the joke feed.
//!
//! Wraps the `joker_api` client with TOML/env configuration, input
//! validation, and a state holder for the joke currently on display.

pub mod config;
pub mod error;
pub mod feed;
pub mod validation;
pub mod wiring;

pub use joker_api;
pub use joker_api::{Client, FetchResult, Joke};

pub use config::JokerConfig;
pub use error::JokerError;
pub use feed::{FeedUpdate, JokeFeed};
pub use wiring::build_client;
