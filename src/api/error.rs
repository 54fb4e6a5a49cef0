//! Fetch error taxonomy.
//!
//! The variants keep network, status and decode failures apart for logs,
//! but the user only ever sees [`FETCH_FAILED_MESSAGE`].

use thiserror::Error;

/// The one sentence shown for any failed list fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch Pokémon data. Please try again later.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Connection to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub(crate) fn from_transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                source,
            }
        } else {
            FetchError::Network {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Message for display. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Stable kind string for structured logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "client",
            FetchError::Network { .. } => "network",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}
