//! # specsync-sync
//!
//! The synchronization engine: change detection, artifact resolution and
//! retrieval, canonical version extraction, and pass-level aggregation.
//!
//! Call [`run_pass`] with a [`specsync_github::ReleaseHost`], the registry
//! entries, and a [`specsync_core::SpecLayout`]; the returned [`Changeset`]
//! carries everything the publisher needs.

pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod version;

pub use error::SyncError;
pub use pipeline::{run_pass, sync_entry, Changeset, EntryOutcome, SkipReason, UpdateResult};
