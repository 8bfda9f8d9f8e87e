//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--color <when>`: Color the report
//!
//! Running without a command validates `HEAD`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::profile::ProfileKind;
use crate::ui::report::ReportFormat;

/// commit-message-validator - Check commit messages against Gerrit, GitLab
/// and GitHub conventions
#[derive(Parser, Debug)]
#[command(name = "commit-message-validator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if commit-message-validator was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to color the report
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The command to run, defaulting to validating `HEAD`.
    pub fn command_or_default(&mut self) -> Command {
        self.command.take().unwrap_or_default()
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate a commit message
    #[command(
        name = "validate",
        visible_alias = "lint",
        long_about = "Validate the message of a commit, or of a message file.\n\n\
            The profile is chosen by --profile, then configuration, then by \
            inspecting the repository's .gitreview file and remotes. Exits 0 when \
            the message is clean, 1 when violations were found and 2 on error.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Check the last commit
    commit-message-validator validate

    # Check an older commit
    commit-message-validator validate HEAD~2

    # Check a message before committing (e.g. from a commit-msg hook)
    commit-message-validator validate --file .git/COMMIT_EDITMSG

    # Force a profile and get machine-readable output
    commit-message-validator validate --profile github --format json"
    )]
    Validate {
        /// Revision to check
        #[arg(default_value = "HEAD", conflicts_with = "file")]
        rev: String,

        /// Read the message from a file instead (`-` for stdin)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Profile to check against (gerrit, gitlab, github)
        #[arg(long, value_name = "NAME")]
        profile: Option<ProfileKind>,

        /// Report format
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },

    /// Install a post-commit hook that validates every new commit
    #[command(
        name = "install-hook",
        visible_alias = "install",
        long_about = "Install a git post-commit hook running the validator.\n\n\
            A missing hook file is created and made executable. An existing hook \
            gets the command appended, unless it already runs the validator.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Install in the current repository
    commit-message-validator install-hook

    # Install in another repository
    commit-message-validator --cwd ../other install-hook"
    )]
    InstallHook,

    /// Validate recent commits of a repository and report the failure rate
    #[command(
        name = "sample",
        long_about = "Validate the most recent non-merge commits of a repository.\n\n\
            Prints Pass or Fail for each commit with its report, then the \
            percentage of commits that failed.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Sample the last 10 commits
    commit-message-validator sample ../mediawiki

    # Sample 50 commits with the GitLab rules
    commit-message-validator sample ../project 50 --profile gitlab"
    )]
    Sample {
        /// Repository to sample
        repo: PathBuf,

        /// Number of commits to check
        #[arg(default_value = "10")]
        count: usize,

        /// Profile to check against (gerrit, gitlab, github)
        #[arg(long, value_name = "NAME")]
        profile: Option<ProfileKind>,
    },

    /// List the built-in profiles and their rules
    Profiles,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    commit-message-validator completion bash >> ~/.bashrc

    # Fish
    commit-message-validator completion fish > ~/.config/fish/completions/commit-message-validator.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Validate {
            rev: "HEAD".to_string(),
            file: None,
            profile: None,
            format: FormatArg::Text,
        }
    }
}

/// Report format
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable report
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// When to color output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg {
    /// Color when writing to a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorArg {
    /// The value as written on the command line and in configuration.
    pub fn name(self) -> &'static str {
        match self {
            ColorArg::Auto => "auto",
            ColorArg::Always => "always",
            ColorArg::Never => "never",
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
