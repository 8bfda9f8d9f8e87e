//! forge
//!
//! Knowledge about code hosting services.
//!
//! The validator does not talk to any hosting service. This module only
//! recognizes where a repository is hosted, from its `.gitreview` file and
//! remote URLs, and maps that to the matching validator profile.
//!
//! # Modules
//!
//! - `detect`: Hosting hints and profile selection
//!
//! # Example
//!
//! ```ignore
//! use commit_message_validator::forge::detect_profile;
//! use commit_message_validator::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let profile = detect_profile(&git, "origin")?;
//! println!("Using the {} profile", profile);
//! ```

mod detect;

pub use detect::{
    detect_profile, select_profile, DetectError, ProfileSource, RepoHints, GERRIT_REMOTES,
    GITHUB_HOST, WIKIMEDIA_GERRIT_HOST, WIKIMEDIA_GITLAB_HOST,
};
