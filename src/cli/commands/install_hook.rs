//! install-hook command - Run the validator after every commit

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::open_repo;
use crate::engine::Context;
use crate::ui::output::{self, Verbosity};

/// Hook the validator is installed as.
pub const HOOK_NAME: &str = "post-commit";

/// Text whose presence in a hook means the validator is already installed.
pub const HOOK_MARKERS: &[&str] = &["commit-message-validator", "commit_message_validator"];

/// Install the post-commit hook.
///
/// Returns 1 if the hook already runs the validator.
pub fn install_hook(ctx: &Context) -> Result<u8> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let git = open_repo(&ctx.work_dir())?;

    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    let command = format!("{} validate", shell_quote(&exe.display().to_string()));
    output::print(
        format!("Will install a git hook that runs: {}", command),
        verbosity,
    );

    let hooks_dir = git.hooks_dir();
    fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("failed to create {}", hooks_dir.display()))?;
    let path = hooks_dir.join(HOOK_NAME);

    if path.exists() {
        let existing = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if HOOK_MARKERS.iter().any(|marker| existing.contains(marker)) {
            output::print(
                "commit-message-validator git hook is already installed",
                verbosity,
            );
            return Ok(1);
        }
        let mut contents = existing;
        contents.push('\n');
        contents.push_str(&command);
        contents.push('\n');
        fs::write(&path, contents)
            .with_context(|| format!("failed to update {}", path.display()))?;
    } else {
        fs::write(&path, format!("#!/bin/sh\n{}\n", command))
            .with_context(|| format!("failed to write {}", path.display()))?;
        make_executable(&path)?;
    }

    log::debug!("hook written to {}", path.display());
    output::print(
        format!("Installed commit-message-validator in {}", path.display()),
        verbosity,
    );
    Ok(0)
}

/// Quote a path for `/bin/sh` if it needs it.
fn shell_quote(s: &str) -> String {
    if s.chars()
        .all(|c| c.is_ascii_alphanumeric() || "/._-+:@".contains(c))
    {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .with_context(|| format!("failed to make {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_plain_path() {
        assert_eq!(
            shell_quote("/usr/local/bin/commit-message-validator"),
            "/usr/local/bin/commit-message-validator"
        );
    }

    #[test]
    fn quote_path_with_spaces() {
        assert_eq!(shell_quote("/opt/my tools/cmv"), "'/opt/my tools/cmv'");
        assert_eq!(shell_quote("/it's"), r"'/it'\''s'");
    }
}
