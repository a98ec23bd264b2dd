//! Error types for qboard-core
//!
//! Every failure of the single fetch collapses into one user-visible
//! "fetch failure" message at the view level; the variants here keep the
//! transport/status/decode distinction for logs and tests.

use thiserror::Error;

/// Fallback message when an error produces no usable text.
pub const GENERIC_FETCH_FAILURE: &str = "failed to reach the scheduler";

/// Errors from talking to the scheduler API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Human-readable message stored in the failed view state.
    pub fn view_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            GENERIC_FETCH_FAILURE.to_string()
        } else {
            message
        }
    }
}
