//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the repository, configuration and profile
//! 2. Runs the validator
//! 3. Formats and displays output
//!
//! Handlers return the exit code. Violations are output, not errors.

mod completion;
mod install_hook;
mod profiles;
mod sample;
mod validate;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use install_hook::{install_hook, HOOK_MARKERS, HOOK_NAME};
pub use profiles::profiles;
pub use sample::sample;
pub use validate::{read_message_file, validate};

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::core::profile::{ProfileKind, ValidatorProfile};
use crate::engine::Context;
use crate::forge::{self, ProfileSource};
use crate::git::Git;
use crate::ui::output::{self, Verbosity};
use crate::ui::report::ColorChoice;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<u8> {
    match command {
        Command::Validate {
            rev,
            file,
            profile,
            format,
        } => validate::validate(ctx, &rev, file.as_deref(), profile, format.into()),
        Command::InstallHook => install_hook::install_hook(ctx),
        Command::Sample {
            repo,
            count,
            profile,
        } => sample::sample(ctx, &repo, count, profile),
        Command::Profiles => profiles::profiles(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load configuration for a repository, or global only without one.
fn load_config(git: Option<&Git>) -> Result<Config> {
    let config =
        Config::load(git.and_then(Git::work_dir)).context("failed to load configuration")?;
    if let Some(path) = config.global_config_loaded_from() {
        log::debug!("global config: {}", path.display());
    }
    if let Some(path) = config.repo_config_loaded_from() {
        log::debug!("repo config: {}", path.display());
    }
    Ok(config)
}

/// Choose and build the profile for a run.
fn resolve_profile(
    flag: Option<ProfileKind>,
    config: &Config,
    git: Option<&Git>,
    verbosity: Verbosity,
) -> Result<ValidatorProfile> {
    let (kind, source) =
        forge::select_profile(flag, config, git).context("failed to detect profile")?;
    output::debug(format!("using {} profile ({})", kind, source), verbosity);
    if source == ProfileSource::Default {
        log::debug!("no repository to inspect, defaulting to {}", kind);
    }
    kind.build(&config.profile_options())
        .with_context(|| format!("invalid {} profile configuration", kind))
}

/// Resolve the effective color choice: flag, then configuration.
fn color_choice(ctx: &Context, config: &Config) -> ColorChoice {
    ctx.color
        .as_deref()
        .or(config.color())
        .and_then(ColorChoice::parse)
        .unwrap_or_default()
}

/// Open the repository containing `path`.
fn open_repo(path: &Path) -> Result<Git> {
    Git::open(path).with_context(|| format!("failed to open repository at {}", path.display()))
}
