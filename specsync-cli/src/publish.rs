//! Publisher — the final writes and the merge proposal.
//!
//! Runs only when the pass produced a non-empty changeset. Files written
//! here are never rolled back; a failed push or proposal degrades to printed
//! manual instructions and the run still exits cleanly.

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;

use specsync_core::{registry, TrackedEntry};
use specsync_github::{GithubClient, NewPullRequest};
use specsync_sync::{report, Changeset};

use crate::config::Config;
use crate::git;

/// Labels attached to every opened proposal.
const PROPOSAL_LABELS: &[&str] = &["openapi-update", "automated"];

/// Branch the proposal targets.
const BASE_BRANCH: &str = "main";

pub fn publish(
    config: &Config,
    client: &GithubClient,
    entries: &[TrackedEntry],
    changeset: &Changeset,
) -> Result<()> {
    // The registry and summary are written exactly once, after all
    // per-entry work; the registry rewrite is atomic.
    registry::save(&config.registry_path, entries).context("failed to rewrite registry")?;
    let summary = report::render_summary(changeset);
    std::fs::write(&config.summary_path, format!("{summary}\n"))
        .with_context(|| format!("failed to write {}", config.summary_path.display()))?;

    let Some(self_repo) = &config.self_repo else {
        manual_instructions(changeset, "no proposal target configured (GITHUB_REPOSITORY unset)");
        return Ok(());
    };

    let branch = format!("openapi-sync/{}", Utc::now().format("%Y%m%d-%H%M%S"));
    let title = report::proposal_title(changeset);
    let body = report::proposal_body(changeset);

    let paths = [
        config.registry_path.as_path(),
        config.summary_path.as_path(),
        config.output_root.as_path(),
    ];
    if let Err(e) = git::push_branch(&branch, &title, &paths) {
        log::warn!("could not push '{branch}': {e:#}");
        manual_instructions(changeset, "pushing the sync branch failed");
        return Ok(());
    }

    let proposal = NewPullRequest {
        title: &title,
        body: &body,
        head: &branch,
        base: BASE_BRANCH,
    };
    match client.create_pull_request(&self_repo.owner, &self_repo.name, &proposal) {
        Ok(pr) => {
            // Labels are best-effort; the proposal itself already exists.
            if let Err(e) = client.add_labels(&self_repo.owner, &self_repo.name, pr.number, PROPOSAL_LABELS) {
                log::warn!("proposal #{} opened, but labels were not attached: {e}", pr.number);
            }
            println!("{} opened {}", "✓".green().bold(), pr.html_url);
        }
        Err(e) => {
            log::warn!("could not open merge proposal: {e}");
            manual_instructions(changeset, "opening the merge proposal failed");
        }
    }
    Ok(())
}

fn manual_instructions(changeset: &Changeset, reason: &str) {
    println!("{} {reason}; finish manually:", "!".yellow().bold());
    println!("  1. Commit the updated registry, summary, and spec files.");
    println!("  2. Open a pull request covering:");
    for line in report::render_summary(changeset).lines() {
        println!("       {line}");
    }
}
