//! Error types for specsync-sync.

use thiserror::Error;

use specsync_core::StoreError;
use specsync_github::GithubError;

/// All errors that can arise while synchronizing a single entry.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A classified failure from the hosting API or raw-content endpoint.
    #[error("hosting API error: {0}")]
    Host(#[from] GithubError),

    /// A registry or layout persistence failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The artifact body decoded fine but contained nothing.
    #[error("empty artifact body from {url}")]
    EmptyArtifact { url: String },
}
