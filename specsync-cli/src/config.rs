//! Run configuration, read once from the process environment.
//!
//! The engine never touches the environment; everything it needs is
//! resolved here at startup and passed in explicitly.

use std::path::PathBuf;

use anyhow::{bail, Result};

use specsync_core::{layout, registry};

/// Environment variable carrying the hosting-API bearer credential.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable naming the registry repository itself (`owner/name`),
/// the target of the merge proposal.
pub const SELF_REPO_VAR: &str = "GITHUB_REPOSITORY";

/// Default relative path of the plain-text change summary.
pub const DEFAULT_SUMMARY_PATH: &str = "sync-summary.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    /// Target of the merge proposal, when known. Absent degrades to printed
    /// manual instructions instead of failing the run.
    pub self_repo: Option<SelfRepo>,
    pub registry_path: PathBuf,
    pub output_root: PathBuf,
    pub summary_path: PathBuf,
}

/// `owner/name` coordinates of the repository running the pass.
#[derive(Debug, Clone)]
pub struct SelfRepo {
    pub owner: String,
    pub name: String,
}

impl Config {
    /// A missing or empty credential is fatal, before any network activity.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_VAR).unwrap_or_default();
        if token.trim().is_empty() {
            bail!("{TOKEN_VAR} is not set; a hosting-API credential is required");
        }
        let self_repo = std::env::var(SELF_REPO_VAR)
            .ok()
            .and_then(|v| parse_self_repo(&v));
        Ok(Self {
            token,
            self_repo,
            registry_path: registry::DEFAULT_REGISTRY_PATH.into(),
            output_root: layout::DEFAULT_ROOT.into(),
            summary_path: DEFAULT_SUMMARY_PATH.into(),
        })
    }
}

fn parse_self_repo(value: &str) -> Option<SelfRepo> {
    let (owner, name) = value.split_once('/')?;
    (!owner.is_empty() && !name.is_empty()).then(|| SelfRepo {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}
