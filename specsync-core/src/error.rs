//! Error types for specsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from registry and layout operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (write/save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parse error on load — includes file path context.
    #[error("failed to parse registry at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The registry file did not exist at the expected path.
    #[error("registry not found at {path}")]
    RegistryNotFound { path: PathBuf },

    /// A registry record with an empty identifier field.
    #[error("registry entry #{index} has an empty identifier field")]
    EmptyIdentifier { index: usize },

    /// Two registry records share a grouping key.
    #[error("duplicate registry key '{key}'")]
    DuplicateKey { key: String },
}
