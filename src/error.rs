//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// HTTP-layer errors (transport failures and non-success statuses).
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Transport failure reported by a non-reqwest [`PriceSource`](crate::board::PriceSource).
    #[error("Request failed: {0}")]
    Other(String),
}

impl HttpError {
    /// HTTP status carried by the error, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            #[cfg(feature = "http")]
            HttpError::Transport(e) => e.status().map(|s| s.as_u16()),
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Other(_) => None,
        }
    }
}

/// The response body did not match the `RESULT.OIL[]` shape.
#[derive(Error, Debug)]
#[error("unexpected response body: {source}")]
pub struct ParseError {
    #[from]
    source: serde_json::Error,
}

impl ParseError {
    /// Line of the body where decoding stopped.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// Column of the body where decoding stopped.
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

/// Client construction errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No API key configured (set API_KEY at build time or pass one to the builder)")]
    MissingCredential,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
}
