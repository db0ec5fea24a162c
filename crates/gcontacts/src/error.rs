//! Error types for feed and token operations.

/// Result type alias for feed and token operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the directory client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or connection failure reported by the transport.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response status outside 200-299.
    #[error("bad response status: {0}")]
    HttpStatus(u16),

    /// Response body is not a well-formed feed or token document.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Pagination followed more `"next"` links than the configured ceiling.
    #[error("pagination exceeded {0} pages")]
    TooManyPages(usize),

    /// No refresh token available.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// Continuation link could not be parsed as a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
