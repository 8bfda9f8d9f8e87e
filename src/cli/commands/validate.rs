//! validate command - Check a commit message

use std::io::Read;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::{color_choice, load_config, open_repo, resolve_profile};
use crate::core::cleanup;
use crate::core::profile::ProfileKind;
use crate::engine::{Context, Validator};
use crate::git::Git;
use crate::ui::output::{self, Verbosity};
use crate::ui::report::{self, ReportFormat};

/// Validate the message of `rev`, or of `file` when given.
///
/// Returns 0 for a clean message and 1 when violations were found.
pub fn validate(
    ctx: &Context,
    rev: &str,
    file: Option<&Path>,
    profile: Option<ProfileKind>,
    format: ReportFormat,
) -> Result<u8> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let work_dir = ctx.work_dir();

    // A message file can be checked outside a repository.
    let git = match file {
        Some(_) => Git::open(&work_dir).ok(),
        None => Some(open_repo(&work_dir)?),
    };
    let config = load_config(git.as_ref())?;
    let profile = resolve_profile(profile, &config, git.as_ref(), verbosity)?;

    let lines = match (file, git.as_ref()) {
        (Some(path), _) => read_message_file(path)?,
        (None, Some(git)) => git
            .message_lines(rev)
            .with_context(|| format!("failed to read commit message of {}", rev))?,
        (None, None) => anyhow::bail!("not a git repository: {}", work_dir.display()),
    };
    output::debug(format!("read {} lines", lines.len()), verbosity);

    let validation = Validator::new(&profile).validate(lines.as_slice());

    match format {
        ReportFormat::Json => {
            println!(
                "{}",
                report::render_json(&validation).context("failed to render report")?
            );
        }
        ReportFormat::Text => {
            let color = color_choice(ctx, &config).enabled();
            let text = report::render_text(&validation, color);
            if validation.is_ok() {
                output::print(text, verbosity);
            } else {
                println!("{}", text);
            }
        }
    }

    Ok(validation.exit_code())
}

/// Read a message file (`-` for stdin) and apply git's `strip` cleanup.
pub fn read_message_file(path: &Path) -> Result<Vec<String>> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read message from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read message file {}", path.display()))?
    };
    Ok(cleanup::cleanup_strip(&cleanup::message_lines(&text)))
}
