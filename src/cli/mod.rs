//! cli
//!
//! Command-line interface layer for commit-message-validator.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize diagnostic logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! command handlers, which read messages through [`crate::git`] and check
//! them with [`crate::engine`]. Handlers return the process exit code:
//! 0 for a clean message, 1 for violations. Errors bubble up as
//! `anyhow::Error` and become exit code 2 in `main`.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use crate::engine;
use anyhow::Result;
use log::LevelFilter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<u8> {
    let mut cli = Cli::parse_args();
    init_logging(cli.debug);

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        color: cli.color.map(|c| c.name().to_string()),
    };

    let command = cli.command_or_default();
    log::debug!("dispatching {:?}", command);
    commands::dispatch(command, &ctx)
}

/// Set up `env_logger`.
///
/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to
/// warnings.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.init();
}
