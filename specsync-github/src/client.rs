//! Blocking GitHub client.
//!
//! One `ureq` agent per pass; every request carries the bearer credential.
//! No retries anywhere — each call either succeeds once or is reported as a
//! classified [`GithubError`] for the entry being processed.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::GithubError;
use crate::types::{PullRequest, Release};

/// GitHub REST API root.
const API_ROOT: &str = "https://api.github.com";

// ---------------------------------------------------------------------------
// Host trait
// ---------------------------------------------------------------------------

/// Read access to upstream releases and raw artifact content.
///
/// The sync engine is generic over this trait so it can run against an
/// in-memory host in tests; [`GithubClient`] is the production impl.
pub trait ReleaseHost {
    /// Most recent release for `owner/repo`.
    fn latest_release(&self, owner: &str, repo: &str) -> Result<Release, GithubError>;

    /// The release carrying `tag`; used to recover a missing asset list.
    fn release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Release, GithubError>;

    /// Fetch `url` as text.
    fn fetch_text(&self, url: &str) -> Result<String, GithubError>;
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Authenticated blocking client for api.github.com.
pub struct GithubClient {
    agent: ureq::Agent,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("specsync/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            token: token.into(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GithubError> {
        log::debug!("GET {url}");
        let response = self
            .agent
            .get(url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .call()
            .map_err(|e| classify(url, e))?;
        response.into_json().map_err(|source| GithubError::Body {
            url: url.to_string(),
            source,
        })
    }

    /// Open a pull request against `owner/repo` and return its number/URL.
    pub fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        proposal: &NewPullRequest<'_>,
    ) -> Result<PullRequest, GithubError> {
        let url = format!("{API_ROOT}/repos/{owner}/{repo}/pulls");
        log::debug!("POST {url}");
        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .send_json(serde_json::json!({
                "title": proposal.title,
                "body": proposal.body,
                "head": proposal.head,
                "base": proposal.base,
            }))
            .map_err(|e| classify(&url, e))?;
        response.into_json().map_err(|source| GithubError::Body {
            url: url.clone(),
            source,
        })
    }

    /// Attach labels to a pull request (PRs share the issue label endpoint).
    pub fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[&str],
    ) -> Result<(), GithubError> {
        let url = format!("{API_ROOT}/repos/{owner}/{repo}/issues/{number}/labels");
        log::debug!("POST {url}");
        self.agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .send_json(serde_json::json!({ "labels": labels }))
            .map_err(|e| classify(&url, e))?;
        Ok(())
    }
}

impl ReleaseHost for GithubClient {
    fn latest_release(&self, owner: &str, repo: &str) -> Result<Release, GithubError> {
        self.get_json(&latest_release_url(owner, repo))
            .map_err(|e| not_found_for(owner, repo, e))
    }

    fn release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Release, GithubError> {
        self.get_json(&release_by_tag_url(owner, repo, tag))
            .map_err(|e| not_found_for(owner, repo, e))
    }

    fn fetch_text(&self, url: &str) -> Result<String, GithubError> {
        log::debug!("GET {url}");
        let response = self
            .agent
            .get(url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .call()
            .map_err(|e| classify(url, e))?;
        response.into_string().map_err(|source| GithubError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Content of a merge proposal to open.
#[derive(Debug, Clone)]
pub struct NewPullRequest<'a> {
    pub title: &'a str,
    pub body: &'a str,
    /// Branch carrying the changes.
    pub head: &'a str,
    /// Branch the proposal targets.
    pub base: &'a str,
}

// ---------------------------------------------------------------------------
// URL construction + error classification
// ---------------------------------------------------------------------------

fn latest_release_url(owner: &str, repo: &str) -> String {
    format!("{API_ROOT}/repos/{owner}/{repo}/releases/latest")
}

fn release_by_tag_url(owner: &str, repo: &str, tag: &str) -> String {
    format!("{API_ROOT}/repos/{owner}/{repo}/releases/tags/{tag}")
}

fn classify(url: &str, err: ureq::Error) -> GithubError {
    match err {
        ureq::Error::Status(status @ (401 | 403), _) => GithubError::Auth { status },
        ureq::Error::Status(status, _) => GithubError::Status {
            status,
            url: url.to_string(),
        },
        ureq::Error::Transport(t) => GithubError::Transport {
            url: url.to_string(),
            message: t.to_string(),
        },
    }
}

/// A 404 on a release endpoint means "no such release", not a generic status.
fn not_found_for(owner: &str, repo: &str, err: GithubError) -> GithubError {
    match err {
        GithubError::Status { status: 404, .. } => GithubError::NotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        },
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
