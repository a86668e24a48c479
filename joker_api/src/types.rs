//! Outcome of a single fetch.

use std::fmt;

/// A joke as returned by the service. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Joke {
    text: String,
}

impl Joke {
    /// Returns `None` for empty text.
    pub fn new(text: String) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of one fetch attempt that reached the service.
///
/// `Empty` covers non-2xx statuses, missing or unreadable bodies, and
/// well-formed responses whose joke text is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchResult {
    Success(Joke),
    Empty,
}

impl FetchResult {
    /// Builds a result from parsed text, mapping empty text to `Empty`.
    pub fn from_text(text: String) -> Self {
        match Joke::new(text) {
            Some(joke) => Self::Success(joke),
            None => Self::Empty,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The joke, if any.
    pub fn joke(&self) -> Option<&Joke> {
        match self {
            Self::Success(joke) => Some(joke),
            Self::Empty => None,
        }
    }

    /// The joke text, if any.
    pub fn text(&self) -> Option<&str> {
        self.joke().map(Joke::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_empty_result() {
        assert_eq!(FetchResult::from_text(String::new()), FetchResult::Empty);
        assert!(Joke::new(String::new()).is_none());
    }

    #[test]
    fn non_empty_text_is_success() {
        let result = FetchResult::from_text("knock knock".to_string());
        assert!(result.is_success());
        assert_eq!(result.text(), Some("knock knock"));
        assert_eq!(result.joke().unwrap().to_string(), "knock knock");
    }

    #[test]
    fn whitespace_counts_as_text() {
        assert!(FetchResult::from_text(" ".to_string()).is_success());
    }
}
