//! commit-message-validator binary
//!
//! Exit codes: 0 clean, 1 violations found, 2 error.

use std::process::ExitCode;

use commit_message_validator::{cli, ui::output};

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::from(2)
        }
    }
}
