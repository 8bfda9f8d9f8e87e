//! forge::detect
//!
//! Profile selection from repository hints.
//!
//! # Detection
//!
//! 1. `.gitreview` with `gerrit.host` naming the Wikimedia Gerrit host
//!    selects `gerrit`; naming the Wikimedia GitLab host selects `gitlab`.
//! 2. A `wikimedia`, `gerrit` or primary remote whose URL contains the
//!    Gerrit host selects `gerrit`.
//! 3. A primary remote whose URL contains the GitLab host selects `gitlab`;
//!    one containing `github.com` selects `github`.
//! 4. Anything else falls back to `gerrit`.
//!
//! The primary remote is `origin` unless the repo config names another.
//!
//! # Selection
//!
//! An explicit choice always wins over detection:
//! `--profile` flag, then configuration, then detection.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::core::config::Config;
use crate::core::profile::ProfileKind;
use crate::git::{Git, GitError};

/// Wikimedia's Gerrit host.
pub const WIKIMEDIA_GERRIT_HOST: &str = "gerrit.wikimedia.org";

/// Wikimedia's GitLab host.
pub const WIKIMEDIA_GITLAB_HOST: &str = "gitlab.wikimedia.org";

/// GitHub host.
pub const GITHUB_HOST: &str = "github.com";

/// Remotes checked for the Gerrit host besides the primary remote.
pub const GERRIT_REMOTES: &[&str] = &["wikimedia", "gerrit"];

/// Errors from profile detection.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("failed to inspect repository: {0}")]
    Git(#[from] GitError),
}

/// Hosting hints gathered from a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoHints {
    /// `gerrit.host` from `.gitreview`
    pub review_host: Option<String>,
    /// Remote name to URL
    pub remotes: HashMap<String, String>,
}

impl RepoHints {
    /// Gather hints from a repository.
    pub fn collect(git: &Git) -> Result<Self, DetectError> {
        let review_host = git.gitreview_host()?;
        let mut remotes = HashMap::new();
        for name in git.remote_names()? {
            if let Some(url) = git.remote_url(&name)? {
                remotes.insert(name, url);
            }
        }
        Ok(Self {
            review_host,
            remotes,
        })
    }

    fn remote_contains(&self, name: &str, host: &str) -> bool {
        self.remotes.get(name).is_some_and(|url| url.contains(host))
    }

    /// Pick a profile from these hints.
    ///
    /// ```
    /// use commit_message_validator::core::profile::ProfileKind;
    /// use commit_message_validator::forge::RepoHints;
    ///
    /// let mut hints = RepoHints::default();
    /// hints.remotes.insert("origin".into(), "git@github.com:owner/repo.git".into());
    /// assert_eq!(hints.profile("origin"), ProfileKind::GitHub);
    /// assert_eq!(RepoHints::default().profile("origin"), ProfileKind::Gerrit);
    /// ```
    pub fn profile(&self, primary_remote: &str) -> ProfileKind {
        if let Some(host) = &self.review_host {
            if host.contains(WIKIMEDIA_GERRIT_HOST) {
                return ProfileKind::Gerrit;
            }
            if host.contains(WIKIMEDIA_GITLAB_HOST) {
                return ProfileKind::GitLab;
            }
        }

        let gerrit_remote = GERRIT_REMOTES
            .iter()
            .copied()
            .chain(std::iter::once(primary_remote))
            .any(|name| self.remote_contains(name, WIKIMEDIA_GERRIT_HOST));
        if gerrit_remote {
            ProfileKind::Gerrit
        } else if self.remote_contains(primary_remote, WIKIMEDIA_GITLAB_HOST) {
            ProfileKind::GitLab
        } else if self.remote_contains(primary_remote, GITHUB_HOST) {
            ProfileKind::GitHub
        } else {
            ProfileKind::Gerrit
        }
    }
}

/// Detect the profile for a repository.
pub fn detect_profile(git: &Git, primary_remote: &str) -> Result<ProfileKind, DetectError> {
    let hints = RepoHints::collect(git)?;
    let profile = hints.profile(primary_remote);
    log::debug!("detected {} profile from {:?}", profile, hints);
    Ok(profile)
}

/// Where the chosen profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    /// `--profile` on the command line
    Flag,
    /// Repo or global configuration
    Config,
    /// Detected from the repository
    Detected,
    /// No repository to inspect
    Default,
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProfileSource::Flag => "command line",
            ProfileSource::Config => "configuration",
            ProfileSource::Detected => "repository",
            ProfileSource::Default => "default",
        };
        write!(f, "{}", s)
    }
}

/// Choose a profile by precedence: flag, configuration, detection.
///
/// Without a repository to inspect, falls back to `gerrit`.
pub fn select_profile(
    flag: Option<ProfileKind>,
    config: &Config,
    git: Option<&Git>,
) -> Result<(ProfileKind, ProfileSource), DetectError> {
    if let Some(kind) = flag {
        return Ok((kind, ProfileSource::Flag));
    }
    if let Some(kind) = config.profile() {
        return Ok((kind, ProfileSource::Config));
    }
    match git {
        Some(git) => Ok((
            detect_profile(git, config.remote())?,
            ProfileSource::Detected,
        )),
        None => Ok((ProfileKind::Gerrit, ProfileSource::Default)),
    }
}
