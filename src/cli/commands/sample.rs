//! sample command - Failure rate over recent commits

use std::path::Path;

use anyhow::{Context as _, Result};

use super::{color_choice, load_config, open_repo, resolve_profile};
use crate::core::profile::ProfileKind;
use crate::engine::{Context, Validator};
use crate::ui::output::{self, Verbosity};
use crate::ui::report;

/// Validate the last `count` non-merge commits of `repo`.
///
/// Always returns 0; failures are summarized, not signalled.
pub fn sample(
    ctx: &Context,
    repo: &Path,
    count: usize,
    profile: Option<ProfileKind>,
) -> Result<u8> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let git = open_repo(repo)?;
    let config = load_config(Some(&git))?;
    let profile = resolve_profile(profile, &config, Some(&git), verbosity)?;
    let validator = Validator::new(&profile);
    let color = color_choice(ctx, &config).enabled();

    let commits = git
        .recent_commits(count)
        .context("failed to list recent commits")?;
    if commits.len() < count {
        output::warn(
            format!("only {} non-merge commits available", commits.len()),
            verbosity,
        );
    }

    let mut failed = 0usize;
    for id in &commits {
        let lines = git
            .message_lines(id)
            .with_context(|| format!("failed to read commit message of {}", id))?;
        let validation = validator.validate(lines.as_slice());
        if validation.is_ok() {
            println!("Pass: {}", id);
        } else {
            failed += 1;
            println!("Fail: {}", id);
        }
        println!("{}", report::render_text(&validation, color));
        println!();
    }

    println!(
        "commit-message-validator identified that {:.2}% commits failed validation.",
        failure_rate(failed, commits.len())
    );
    Ok(0)
}

/// Percentage of failed commits; zero when nothing was sampled.
fn failure_rate(failed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        failed as f64 / total as f64 * 100.0
    }
}
