//! Artifact location resolution and retrieval.
//!
//! Resolution order:
//! 1. a release asset whose name exactly matches the entry's configured
//!    asset name — its direct download URL wins;
//! 2. otherwise the deterministic raw-content URL built from owner, repo,
//!    tag, and the in-repository spec path.
//!
//! Exactly one candidate URL is attempted per entry per pass. No retries,
//! no backoff; any failure is reported for this entry and the pass moves on.

use specsync_core::TrackedEntry;
use specsync_github::{Release, ReleaseAsset, ReleaseHost};

use crate::error::SyncError;

/// Raw-content endpoint root.
const RAW_ROOT: &str = "https://raw.githubusercontent.com";

/// Where a resolved artifact URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactSource {
    ReleaseAsset,
    RawContent,
}

/// A resolved download location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub url: String,
    pub source: ArtifactSource,
}

/// `https://<host>/<owner>/<repo>/<tag>/<path>`.
pub fn raw_content_url(owner: &str, repo: &str, tag: &str, spec_path: &str) -> String {
    format!("{RAW_ROOT}/{owner}/{repo}/{tag}/{spec_path}")
}

/// Pure resolution step: exact asset-name match wins, raw template otherwise.
pub fn resolve_artifact(
    assets: &[ReleaseAsset],
    entry: &TrackedEntry,
    tag: &str,
) -> ResolvedArtifact {
    if let Some(asset) = assets.iter().find(|a| a.name == entry.asset_name()) {
        return ResolvedArtifact {
            url: asset.browser_download_url.clone(),
            source: ArtifactSource::ReleaseAsset,
        };
    }
    let (owner, repo) = entry.upstream();
    ResolvedArtifact {
        url: raw_content_url(owner, repo, tag, entry.spec_path()),
        source: ArtifactSource::RawContent,
    }
}

/// Resolve and retrieve the artifact for `entry` at `release`.
///
/// When the resolver result carried no asset list, the release is re-fetched
/// by tag to recover one. An empty body is a fetch failure.
pub fn fetch_artifact<H: ReleaseHost>(
    host: &H,
    entry: &TrackedEntry,
    release: &Release,
) -> Result<String, SyncError> {
    let (owner, repo) = entry.upstream();
    let assets: Vec<ReleaseAsset> = match &release.assets {
        Some(assets) => assets.clone(),
        None => host
            .release_by_tag(owner, repo, &release.tag_name)?
            .assets
            .unwrap_or_default(),
    };

    let resolved = resolve_artifact(&assets, entry, &release.tag_name);
    tracing::debug!(
        "{}: fetching {} ({:?})",
        entry.grouping_key(),
        resolved.url,
        resolved.source
    );

    let content = host.fetch_text(&resolved.url)?;
    if content.trim().is_empty() {
        return Err(SyncError::EmptyArtifact { url: resolved.url });
    }
    Ok(content)
}
