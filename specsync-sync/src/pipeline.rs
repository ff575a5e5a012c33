//! Per-entry synchronization pipeline and pass-level aggregation.
//!
//! `sync_entry` drives one entry: resolve → eligibility → change test →
//! fetch → extract → save. `run_pass` iterates the registry in order,
//! isolates every per-entry failure, and mutates an entry's version pointer
//! only on full success.

use std::fmt;
use std::path::PathBuf;

use specsync_core::{SpecLayout, TrackedEntry};
use specsync_github::ReleaseHost;

use crate::error::SyncError;
use crate::fetch;
use crate::version::{extract_api_version, has_version_changed, normalize_tag};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why an eligible-looking entry was skipped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Draft,
    Prerelease,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Draft => write!(f, "draft release"),
            SkipReason::Prerelease => write!(f, "prerelease"),
        }
    }
}

/// One successfully synchronized entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    /// Grouping key of the owning entry, snapshotted before mutation.
    pub key: String,
    pub name: String,
    pub old_version: String,
    /// Tag-level version the registry pointer advances to.
    pub new_version: String,
    /// Content-level canonical version; may equal `new_version`.
    pub api_version: String,
    /// Canonical origin URL of the release.
    pub release_url: String,
    /// Final on-disk path of the saved artifact.
    pub spec_path: PathBuf,
}

/// Outcome of driving one entry through the pipeline.
#[derive(Debug)]
pub enum EntryOutcome {
    /// New version detected, fetched, and saved.
    Updated(UpdateResult),
    /// Stored version matches the latest release tag.
    UpToDate,
    /// Latest release is not eligible for synchronization.
    Skipped(SkipReason),
}

/// Aggregate of one pass: ordered successes plus bookkeeping counters.
#[derive(Debug, Default)]
pub struct Changeset {
    /// Per-entry successes, in registry order.
    pub updates: Vec<UpdateResult>,
    pub up_to_date: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Changeset {
    /// An empty changeset means: no writes, no registry mutation, no proposal.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Per-entry pipeline
// ---------------------------------------------------------------------------

/// Drive a single entry through the pipeline.
///
/// Does not mutate the entry — [`run_pass`] owns the `lastVersion` update so
/// a failure after this call cannot leave a half-advanced pointer.
pub fn sync_entry<H: ReleaseHost>(
    host: &H,
    entry: &TrackedEntry,
    layout: &SpecLayout,
) -> Result<EntryOutcome, SyncError> {
    let (owner, repo) = entry.upstream();
    let release = host.latest_release(owner, repo)?;

    if release.draft {
        return Ok(EntryOutcome::Skipped(SkipReason::Draft));
    }
    if release.prerelease {
        return Ok(EntryOutcome::Skipped(SkipReason::Prerelease));
    }
    if !has_version_changed(entry.last_version(), &release.tag_name) {
        return Ok(EntryOutcome::UpToDate);
    }

    let content = fetch::fetch_artifact(host, entry, &release)?;
    let api_version = extract_api_version(&content)
        .unwrap_or_else(|| normalize_tag(&release.tag_name).to_string());

    let spec_path = layout.write_spec(entry, &api_version, &content)?;
    // A saved spec without its sidecar is an acceptable degraded state.
    if let Err(e) = layout.write_metadata(entry, &api_version) {
        tracing::warn!(
            "{}: metadata sidecar not written: {e}",
            entry.grouping_key()
        );
    }

    Ok(EntryOutcome::Updated(UpdateResult {
        key: entry.grouping_key(),
        name: entry.name().to_string(),
        old_version: entry.last_version().to_string(),
        new_version: release.tag_name.clone(),
        api_version,
        release_url: release.origin_url(owner, repo),
        spec_path,
    }))
}

// ---------------------------------------------------------------------------
// Pass
// ---------------------------------------------------------------------------

/// Run one full pass over the registry, strictly in order.
///
/// Every per-entry failure is classified, logged, and counted; it never
/// stops later entries. Only a full success advances `lastVersion`.
pub fn run_pass<H: ReleaseHost>(
    host: &H,
    entries: &mut [TrackedEntry],
    layout: &SpecLayout,
) -> Changeset {
    let mut changeset = Changeset::default();
    for entry in entries.iter_mut() {
        let key = entry.grouping_key();
        match sync_entry(host, entry, layout) {
            Ok(EntryOutcome::Updated(update)) => {
                tracing::info!(
                    "{key}: {} → {} ({})",
                    update.old_version,
                    update.new_version,
                    update.api_version
                );
                entry.set_last_version(update.new_version.clone());
                changeset.updates.push(update);
            }
            Ok(EntryOutcome::UpToDate) => {
                tracing::debug!("{key}: up to date");
                changeset.up_to_date += 1;
            }
            Ok(EntryOutcome::Skipped(reason)) => {
                tracing::info!("{key}: skipped ({reason})");
                changeset.skipped += 1;
            }
            Err(e) => {
                tracing::warn!("{key}: {e}");
                changeset.failed += 1;
            }
        }
    }
    changeset
}
