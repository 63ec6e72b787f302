use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by the adapter layer before any request is made.
///
/// These are input errors in the taxonomy: surfaced immediately, never
/// retried. Remote failures are reported through the tree crate's
/// `SourceError` instead.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("environment variable {0} is not set or empty")]
    MissingEnv(&'static str),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unrecognized page locator {0:?} (expected a numeric page id or a Confluence page URL)")]
    InvalidLocator(String),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
