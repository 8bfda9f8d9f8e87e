//! engine
//!
//! Runs a profile over commit messages.
//!
//! # Architecture
//!
//! ```text
//! lines ──▶ ContextClassifier ──▶ line rules ─┐
//!   │                                         ├──▶ sort ──▶ Validation
//!   └────────────────────────▶ message rules ─┘
//! ```
//!
//! - [`classify`] assigns SUBJECT, BODY or FOOTER to each line
//! - [`validator`] drives the rules and orders the failures
//!
//! # Invariants
//!
//! - Classifier state lives for exactly one pass
//! - Failures are ordered by rule id, then line number
//! - The exit code is non-zero iff at least one failure was reported

pub mod classify;
pub mod validator;

pub use classify::{classify_all, ContextClassifier};
pub use validator::{Validation, Validator};

use std::path::PathBuf;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Color choice from the command line, if given.
    pub color: Option<String>,
}

impl Context {
    /// The directory commands operate in.
    pub fn work_dir(&self) -> PathBuf {
        self.cwd.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
