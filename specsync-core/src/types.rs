//! Domain types for the specsync registry.
//!
//! Two registry schema variants coexist on disk: the richer vendor/api-keyed
//! record carrying presentation metadata, and the flat owner/repo-keyed
//! record. Both deserialize into one [`TrackedEntry`] so the engine stays
//! schema-agnostic; field names are camelCase in the file.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Registry records
// ---------------------------------------------------------------------------

/// Richer registry record: vendor/api grouping key, upstream coordinates,
/// and the presentation block that feeds the `.metadata.json` sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEntry {
    pub vendor: String,
    pub api: String,
    pub owner: String,
    pub repo: String,
    pub name: String,
    #[serde(default)]
    pub last_version: String,
    pub spec_path: String,
    pub asset_name: String,
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Flat registry record keyed by owner/repo alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoEntry {
    pub owner: String,
    pub repo: String,
    pub name: String,
    #[serde(default)]
    pub last_version: String,
    pub spec_path: String,
    pub asset_name: String,
}

/// One tracked upstream repository/specification pairing.
///
/// Untagged: serde must try `Api` first — a flat record is a field-subset of
/// a rich one, so the reverse order would swallow rich records into `Repo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackedEntry {
    Api(ApiEntry),
    Repo(RepoEntry),
}

impl TrackedEntry {
    /// The two grouping-key path segments: `[vendor, api]` or `[owner, repo]`.
    pub fn key_segments(&self) -> [&str; 2] {
        match self {
            TrackedEntry::Api(e) => [&e.vendor, &e.api],
            TrackedEntry::Repo(e) => [&e.owner, &e.repo],
        }
    }

    /// Grouping key rendered as `segment/segment`.
    pub fn grouping_key(&self) -> String {
        self.key_segments().join("/")
    }

    /// Upstream hosting coordinates as `(owner, repo)`.
    pub fn upstream(&self) -> (&str, &str) {
        match self {
            TrackedEntry::Api(e) => (&e.owner, &e.repo),
            TrackedEntry::Repo(e) => (&e.owner, &e.repo),
        }
    }

    /// Human-readable display name.
    pub fn name(&self) -> &str {
        match self {
            TrackedEntry::Api(e) => &e.name,
            TrackedEntry::Repo(e) => &e.name,
        }
    }

    /// The last synchronized version. Empty string for never-synced entries.
    pub fn last_version(&self) -> &str {
        match self {
            TrackedEntry::Api(e) => &e.last_version,
            TrackedEntry::Repo(e) => &e.last_version,
        }
    }

    /// Update the version pointer — the only mutation a pass performs.
    pub fn set_last_version(&mut self, version: String) {
        match self {
            TrackedEntry::Api(e) => e.last_version = version,
            TrackedEntry::Repo(e) => e.last_version = version,
        }
    }

    /// Relative path of the specification inside the upstream repository.
    pub fn spec_path(&self) -> &str {
        match self {
            TrackedEntry::Api(e) => &e.spec_path,
            TrackedEntry::Repo(e) => &e.spec_path,
        }
    }

    /// Expected name of the release-attached asset.
    pub fn asset_name(&self) -> &str {
        match self {
            TrackedEntry::Api(e) => &e.asset_name,
            TrackedEntry::Repo(e) => &e.asset_name,
        }
    }

    /// Sidecar payload for `version`, or `None` for flat entries, which carry
    /// no presentation metadata.
    pub fn metadata(&self, version: &str) -> Option<SpecMetadata> {
        match self {
            TrackedEntry::Api(e) => Some(SpecMetadata {
                name: e.name.clone(),
                base_url: e.base_url.clone(),
                docs_url: e.docs_url.clone(),
                description: e.description.clone(),
                tags: e.tags.clone(),
                version: version.to_string(),
            }),
            TrackedEntry::Repo(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Metadata sidecar
// ---------------------------------------------------------------------------

/// Payload of the `.metadata.json` sidecar written next to each saved spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecMetadata {
    pub name: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub version: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
