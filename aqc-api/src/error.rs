/// Error type for the pollution history fetcher.
use thiserror::Error;

/// A failed fetch, whatever the underlying cause.
///
/// Network failures, non-success HTTP statuses, and unparseable bodies all
/// surface as this one kind; the embedded message carries the diagnostic
/// (the server's own `message` field when it sent one). Fetches are never
/// retried; the caller decides what to do with the failure.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("fetch failed: {message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message, suitable for user-facing display.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn test_display_includes_message() {
        let err = FetchError::new("city not found");
        assert_eq!(err.message(), "city not found");
        assert_eq!(err.to_string(), "fetch failed: city not found");
    }
}
