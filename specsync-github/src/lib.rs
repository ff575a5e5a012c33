//! # specsync-github
//!
//! Hosting-API collaborator: release lookup, raw artifact fetch, and merge
//! proposal creation against api.github.com. The [`ReleaseHost`] trait is
//! the seam the sync engine consumes; [`GithubClient`] is the production
//! implementation.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GithubClient, NewPullRequest, ReleaseHost};
pub use error::GithubError;
pub use types::{PullRequest, Release, ReleaseAsset};
