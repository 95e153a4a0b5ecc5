//! Error types for cascade-merge

use thiserror::Error;

/// Errors that can escape the cascade step
#[derive(Debug, Error)]
pub enum Error {
    /// A required action input was absent or blank
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    /// `GITHUB_REPOSITORY` was absent or not of the form `owner/repo`
    #[error("invalid repository: {0}")]
    InvalidRepository(String),

    /// Any other configuration problem (e.g. a malformed API URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// The API answered with a non-success status
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        /// Full request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Message from the API response body, or the status reason
        message: String,
    },

    /// The request never produced a response
    #[error("request to {url} failed: {source}")]
    Network {
        /// Full request URL
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Internal invariant violated
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Request URL and HTTP status, when this error carries both
    pub fn request_details(&self) -> Option<(&str, u16)> {
        match self {
            Self::Http { url, status, .. } => Some((url.as_str(), *status)),
            Self::Network { url, source } => source.status().map(|s| (url.as_str(), s.as_u16())),
            _ => None,
        }
    }

    /// Message surfaced to the operator when the step fails outside the merge call
    pub fn failure_message(&self) -> String {
        match self.request_details() {
            Some((url, status)) => format!("Error fetching {url} - HTTP {status}"),
            None => self.to_string(),
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
