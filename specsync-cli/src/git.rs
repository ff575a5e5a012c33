//! Thin git shell-out used by the publisher.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Run one git command, surfacing stderr on failure.
fn git(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to spawn git {}", args.join(" ")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        bail!(
            "git {} failed (status {}): {stderr}",
            args.join(" "),
            output.status
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Create `branch` from the current head, commit `paths`, push to `origin`.
pub fn push_branch(branch: &str, message: &str, paths: &[&Path]) -> Result<()> {
    git(&["checkout", "-B", branch])?;
    let mut add = vec!["add", "--"];
    add.extend(paths.iter().filter_map(|p| p.to_str()));
    git(&add)?;
    git(&["commit", "-m", message])?;
    git(&["push", "--set-upstream", "origin", branch])?;
    Ok(())
}
