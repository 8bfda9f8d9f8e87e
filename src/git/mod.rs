//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. No other module imports
//! `git2`. Everything here is a read: commit messages, the commit walk used
//! for sampling, remotes, and the `.gitreview` file.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Commit message lines (right-most parent for merges)
//! - Recent non-merge commits
//! - Remote URLs and Gerrit review host
//!
//! # Example
//!
//! ```ignore
//! use commit_message_validator::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let lines = git.message_lines("HEAD")?;
//! let recent = git.recent_commits(10)?;
//! ```

mod interface;

pub use interface::{Git, GitError, GITREVIEW_FILE};
