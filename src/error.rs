use thiserror::Error;

/// Main error type for the ranker
#[derive(Error, Debug)]
pub enum TrendRankError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider errors (malformed payload, missing widget, bad status)
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Provider asked us to slow down (HTTP 429)
    #[error("Provider '{0}' throttled the request")]
    Throttled(String),

    /// Retry budget spent without a successful provider response
    #[error("Gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl TrendRankError {
    /// Whether a retry with penalty spacing can plausibly recover.
    ///
    /// Provider-side failures (throttling, malformed payloads, dropped
    /// connections) clear up on their own; everything else propagates.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TrendRankError::Throttled(_)
                | TrendRankError::Provider { .. }
                | TrendRankError::HttpRequest(_)
                | TrendRankError::Json(_)
        )
    }
}

impl From<String> for TrendRankError {
    fn from(s: String) -> Self {
        TrendRankError::Other(s)
    }
}

impl From<&str> for TrendRankError {
    fn from(s: &str) -> Self {
        TrendRankError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TrendRankError>;
