//! commit-message-validator - Check git commit messages against Gerrit,
//! GitLab and GitHub conventions
//!
//! A message is a list of lines. Each line is classified as subject, body or
//! footer, checked by the line rules of a profile, and the message as a
//! whole is checked by its message rules. Violations come back ordered by
//! rule id, then line number.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates)
//! - [`engine`] - Line classification and the validator driver
//! - [`core`] - Footer grammar, rules, profiles, configuration
//! - [`git`] - Single interface for reading commits
//! - [`forge`] - Profile detection from `.gitreview` and remotes
//! - [`ui`] - Report rendering and output
//!
//! # Example
//!
//! ```
//! use commit_message_validator::core::profile::{ProfileKind, ProfileOptions};
//! use commit_message_validator::engine::Validator;
//!
//! let profile = ProfileKind::GitHub.build(&ProfileOptions::default()).unwrap();
//! let validation = Validator::new(&profile).validate(&["Fix crash (#42)", "", "Details"]);
//!
//! assert_eq!(validation.failures()[0].rule_id, "G1");
//! assert_eq!(validation.exit_code(), 1);
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod forge;
pub mod git;
pub mod ui;
