//! specsync — one-pass OpenAPI specification synchronizer.
//!
//! # Usage
//!
//! ```text
//! specsync    # run one full pass over the registry, then exit
//! ```
//!
//! No flags. Configuration comes from the process environment
//! (`GITHUB_TOKEN`, `GITHUB_REPOSITORY`) and the registry file in the
//! current directory.

mod config;
mod git;
mod publish;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use specsync_core::{registry, SpecLayout};
use specsync_github::GithubClient;
use specsync_sync::{pipeline, report};

#[derive(Parser, Debug)]
#[command(
    name = "specsync",
    version,
    about = "Synchronize tracked OpenAPI specifications with upstream releases",
    long_about = None,
)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let Cli {} = Cli::parse();

    let config = config::Config::from_env()?;
    let mut entries = registry::load(&config.registry_path)
        .with_context(|| format!("failed to load {}", config.registry_path.display()))?;
    println!("checking {} tracked entries", entries.len());

    let client = GithubClient::new(config.token.as_str());
    let layout = SpecLayout::new(&config.output_root);
    let changeset = pipeline::run_pass(&client, &mut entries, &layout);

    if changeset.is_empty() {
        println!(
            "{} everything up to date ({} current, {} skipped, {} failed)",
            "✓".green().bold(),
            changeset.up_to_date,
            changeset.skipped,
            changeset.failed
        );
        return Ok(());
    }

    println!(
        "{} {} updated, {} current, {} skipped, {} failed",
        "✓".green().bold(),
        changeset.updates.len(),
        changeset.up_to_date,
        changeset.skipped,
        changeset.failed
    );
    for update in &changeset.updates {
        println!("  ✎  {}", report::summary_line(update));
    }

    publish::publish(&config, &client, &entries, &changeset)
}
