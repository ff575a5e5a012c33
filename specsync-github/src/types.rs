//! Wire types for the GitHub REST API.
//!
//! Only the fields the engine reads are modeled; everything else in the
//! response JSON is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A downloadable asset attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// GitHub release metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    /// Asset list; `None` when the resolving endpoint did not include one.
    #[serde(default)]
    pub assets: Option<Vec<ReleaseAsset>>,
}

impl Release {
    /// Draft and prerelease releases are not eligible for synchronization.
    pub fn is_eligible(&self) -> bool {
        !self.draft && !self.prerelease
    }

    /// Canonical origin URL of the release, derived from the tag when the
    /// API response carried no `html_url`.
    pub fn origin_url(&self, owner: &str, repo: &str) -> String {
        self.html_url.clone().unwrap_or_else(|| {
            format!(
                "https://github.com/{owner}/{repo}/releases/tag/{}",
                self.tag_name
            )
        })
    }
}

/// A created pull request, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub html_url: String,
}
