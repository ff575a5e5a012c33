//! Error types for specsync-github.

use thiserror::Error;

/// Classified failures from the hosting API and raw-content endpoint.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The repository has no matching release (HTTP 404).
    #[error("no release found for {owner}/{repo}")]
    NotFound { owner: String, repo: String },

    /// Credential rejected (HTTP 401/403).
    #[error("authentication failed (HTTP {status})")]
    Auth { status: u16 },

    /// Any other non-success status code.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Connection, DNS, TLS, or timeout failure before a status was read.
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The response body could not be read or decoded.
    #[error("could not decode response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
