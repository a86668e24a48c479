//! Holder for the joke currently on display.
//!
//! A refresh only ever replaces the displayed joke with a new one. Empty
//! results and errors leave it as it was, so a consumer keeps showing the
//! previous joke (or nothing, before the first success).

use joker_api::{Client, Error, FetchResult, Joke};

/// What a refresh did to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedUpdate {
    /// A new joke is on display.
    Updated,
    /// The service answered without a joke.
    Unchanged,
    /// The fetch failed.
    Failed,
}

#[derive(Debug, Default)]
pub struct JokeFeed {
    displayed: Option<Joke>,
    refreshing: bool,
}

impl JokeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text on display, `None` until the first successful fetch.
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_ref().map(Joke::text)
    }

    pub fn displayed_joke(&self) -> Option<&Joke> {
        self.displayed.as_ref()
    }

    /// Whether a fetch is in flight (the loading indicator).
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    /// Folds a fetch outcome into the feed. Always ends the refresh.
    pub fn apply(&mut self, outcome: Result<FetchResult, Error>) -> FeedUpdate {
        self.refreshing = false;
        match outcome {
            Ok(FetchResult::Success(joke)) => {
                self.displayed = Some(joke);
                FeedUpdate::Updated
            }
            Ok(FetchResult::Empty) => {
                tracing::debug!("No joke returned, keeping the current one");
                FeedUpdate::Unchanged
            }
            Err(e) => {
                tracing::debug!("Refresh failed, keeping the current joke: {}", e);
                FeedUpdate::Failed
            }
        }
    }

    /// Fetches a joke with `client` and applies the outcome.
    ///
    /// If the returned future is dropped mid-fetch, the refresh still ends
    /// and the displayed joke is left as it was.
    pub async fn refresh(&mut self, client: &Client) -> FeedUpdate {
        self.begin_refresh();
        let outcome = {
            let _refreshing = RefreshGuard(&mut self.refreshing);
            client.fetch_joke().await
        };
        self.apply(outcome)
    }
}

/// Clears the refreshing flag when dropped, including on cancellation.
struct RefreshGuard<'a>(&'a mut bool);

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joker_api::ParseError;

    fn success(text: &str) -> Result<FetchResult, Error> {
        Ok(FetchResult::from_text(text.to_string()))
    }

    #[test]
    fn starts_blank() {
        let feed = JokeFeed::new();
        assert_eq!(feed.displayed(), None);
        assert!(!feed.is_refreshing());
    }

    #[test]
    fn success_replaces_text() {
        let mut feed = JokeFeed::new();
        feed.begin_refresh();
        assert!(feed.is_refreshing());
        assert_eq!(feed.apply(success("first")), FeedUpdate::Updated);
        assert_eq!(feed.displayed(), Some("first"));
        assert!(!feed.is_refreshing());

        assert_eq!(feed.apply(success("second")), FeedUpdate::Updated);
        assert_eq!(feed.displayed(), Some("second"));
    }

    #[test]
    fn empty_keeps_previous_text() {
        let mut feed = JokeFeed::new();
        feed.apply(success("keep me"));
        feed.begin_refresh();
        assert_eq!(feed.apply(Ok(FetchResult::Empty)), FeedUpdate::Unchanged);
        assert_eq!(feed.displayed(), Some("keep me"));
        assert!(!feed.is_refreshing());
    }

    #[test]
    fn error_keeps_previous_text() {
        let mut feed = JokeFeed::new();
        feed.apply(success("keep me"));
        feed.begin_refresh();
        let outcome = Err(Error::Parse(ParseError::MissingValue));
        assert_eq!(feed.apply(outcome), FeedUpdate::Failed);
        assert_eq!(feed.displayed(), Some("keep me"));
        assert!(!feed.is_refreshing());
    }

    #[test]
    fn empty_on_first_load_stays_blank() {
        let mut feed = JokeFeed::new();
        feed.begin_refresh();
        feed.apply(Ok(FetchResult::Empty));
        assert_eq!(feed.displayed(), None);
        assert!(!feed.is_refreshing());
    }
}
