//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module is the **single doorway** to the repository. Commit messages,
//! remotes and the `.gitreview` file are all read through [`Git`], which
//! normalizes failures into [`GitError`].
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::RevisionNotFound`]: Revision does not name a commit
//! - [`GitError::Internal`]: Anything else git2 reports
//!
//! # Example
//!
//! ```ignore
//! use commit_message_validator::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! for line in git.message_lines("HEAD")? {
//!     println!("{}", line);
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::cleanup;

/// File name of the Gerrit review configuration in the work tree.
pub const GITREVIEW_FILE: &str = ".gitreview";

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Revision does not resolve to a commit.
    #[error("revision not found: {rev}")]
    RevisionNotFound {
        /// The revision as given
        rev: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with richer context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound
            | git2::ErrorCode::InvalidSpec
            | git2::ErrorCode::Ambiguous => GitError::RevisionNotFound {
                rev: context.to_string(),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// The Git interface.
///
/// Read-only: nothing here writes objects or refs.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Info
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;
        log::debug!("opened repository at {}", repo.path().display());
        Ok(Self { repo })
    }

    /// Get the .git directory path.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Get the work tree root, if the repository has one.
    pub fn work_dir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Get the directory hooks are installed in.
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir().join("hooks")
    }

    // =========================================================================
    // Commit Messages
    // =========================================================================

    /// Read the message of a commit as lines.
    ///
    /// If `rev` names a merge commit, the message of its right-most parent is
    /// read instead. One trailing empty line is dropped.
    ///
    /// # Errors
    ///
    /// - [`GitError::RevisionNotFound`] if `rev` does not name a commit
    pub fn message_lines(&self, rev: &str) -> Result<Vec<String>, GitError> {
        let commit = self.find_commit(rev)?;
        let commit = match commit.parent_count() {
            0 | 1 => commit,
            n => {
                let parent = commit
                    .parent(n - 1)
                    .map_err(|e| GitError::from_git2(e, rev))?;
                log::debug!(
                    "{} is a merge, reading right-most parent {}",
                    commit.id(),
                    parent.id()
                );
                parent
            }
        };
        let message = String::from_utf8_lossy(commit.message_bytes());
        Ok(cleanup::message_lines(&message))
    }

    /// Get the ids of up to `count` most recent non-merge commits reachable
    /// from HEAD, newest first.
    pub fn recent_commits(&self, count: usize) -> Result<Vec<String>, GitError> {
        let mut walk = self.repo.revwalk()?;
        walk.push_head().map_err(|e| GitError::from_git2(e, "HEAD"))?;
        walk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

        let mut ids = Vec::with_capacity(count);
        for oid in walk {
            if ids.len() == count {
                break;
            }
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            if commit.parent_count() > 1 {
                continue;
            }
            ids.push(oid.to_string());
        }
        Ok(ids)
    }

    fn find_commit(&self, rev: &str) -> Result<git2::Commit<'_>, GitError> {
        self.repo
            .revparse_single(rev)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| GitError::from_git2(e, rev))
    }

    // =========================================================================
    // Remote Operations
    // =========================================================================

    /// Get the URL for a remote.
    ///
    /// Returns `None` if the remote doesn't exist.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>, GitError> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(String::from)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) if e.code() == git2::ErrorCode::InvalidSpec => Ok(None),
            Err(e) => Err(GitError::Internal {
                message: e.message().to_string(),
            }),
        }
    }

    /// Get the names of all configured remotes.
    pub fn remote_names(&self) -> Result<Vec<String>, GitError> {
        let remotes = self.repo.remotes()?;
        Ok(remotes.iter().flatten().map(String::from).collect())
    }

    // =========================================================================
    // Review Configuration
    // =========================================================================

    /// Get `gerrit.host` from the work tree's `.gitreview` file.
    ///
    /// Returns `None` if the repository is bare, the file is missing, or the
    /// key is unset.
    pub fn gitreview_host(&self) -> Result<Option<String>, GitError> {
        let Some(work_dir) = self.work_dir() else {
            return Ok(None);
        };
        let path = work_dir.join(GITREVIEW_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let config = git2::Config::open(&path)
            .map_err(|e| GitError::from_git2(e, &path.display().to_string()))?;
        match config.get_string("gerrit.host") {
            Ok(host) => Ok(Some(host)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::Internal {
                message: e.message().to_string(),
            }),
        }
    }
}
