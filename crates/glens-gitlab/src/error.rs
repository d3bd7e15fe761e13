//! Error types for the GitLab client.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the GitLab API.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection settings rejected before any request was made.
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// The API rejected the access token.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The probed resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("GitLab API error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body failed to parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL failed to parse.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The aggregation pipeline had nothing to work with.
    #[error("Failed to fetch data: {0}")]
    Aggregation(String),

    /// The request was cancelled before it completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl Error {
    /// Builds the generic HTTP error for a non-2xx status.
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        Error::Http {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn from_status_carries_code_and_reason() {
        let err = Error::from_status(StatusCode::BAD_GATEWAY);
        match err {
            Error::Http {
                status,
                status_text,
            } => {
                assert_eq!(status, 502);
                assert_eq!(status_text, "Bad Gateway");
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn display_includes_status_line() {
        let err = Error::Http {
            status: 503,
            status_text: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "GitLab API error: 503 Service Unavailable"
        );
    }
}
