//! specsync core library — registry schema, persistence, storage layout.
//!
//! Public API surface:
//! - [`types`] — the unified [`TrackedEntry`] record and sidecar payload
//! - [`error`] — [`StoreError`]
//! - [`registry`] — load / validate / atomic save
//! - [`layout`] — version-scoped storage paths and writes

pub mod error;
pub mod layout;
pub mod registry;
pub mod types;

pub use error::StoreError;
pub use layout::SpecLayout;
pub use types::{ApiEntry, RepoEntry, SpecMetadata, TrackedEntry};
