pub mod cache;
mod client;
mod errors;
mod http;
pub mod parser;
mod types;
pub use self::client::{
    Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_ENDPOINT, RANDOM_JOKE_PATH,
};
pub use self::errors::{Error, ParseError};
pub use self::http::{HttpClient, HttpClientBuilder, RawResponse, DEFAULT_TIMEOUT};
pub use self::types::{FetchResult, Joke};
