//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! There are two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$COMMIT_MESSAGE_VALIDATOR_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/commit-message-validator/config.toml`
//! 3. `~/.commit-message-validator/config.toml`
//!
//! # Repo Config Location
//!
//! `<work tree>/.commit-message-validator.toml`
//!
//! # Example
//!
//! ```no_run
//! use commit_message_validator::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo"))).unwrap();
//!
//! if let Some(profile) = config.profile() {
//!     println!("Profile: {}", profile);
//! }
//! println!("Remote: {}", config.remote());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::profile::{ProfileKind, ProfileOptions};

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "COMMIT_MESSAGE_VALIDATOR_CONFIG";

/// File name of the repo config, relative to the work tree root.
pub const REPO_CONFIG_FILE: &str = ".commit-message-validator.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence rules. Repo config overrides global
/// config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if in a repo and the file exists)
    pub repo: Option<RepoConfig>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Build a configuration from already parsed scopes.
    pub fn new(global: GlobalConfig, repo: Option<RepoConfig>) -> Self {
        Self {
            global,
            repo,
            global_path: None,
            repo_path: None,
        }
    }

    /// Load configuration from default locations.
    ///
    /// If `work_dir` is provided, also loads the repo config found there.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing config files are not an error.
    pub fn load(work_dir: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(Self::find_global(), work_dir)
    }

    /// Load configuration from an explicit global config path.
    pub fn load_from(
        global_path: Option<PathBuf>,
        work_dir: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let global = match &global_path {
            Some(path) => read_config::<GlobalConfig>(path)?,
            None => GlobalConfig::default(),
        };

        let repo_path = work_dir
            .map(|dir| dir.join(REPO_CONFIG_FILE))
            .filter(|path| path.is_file());
        let repo = match &repo_path {
            Some(path) => Some(read_config::<RepoConfig>(path)?),
            None => None,
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        log::debug!(
            "config loaded: global={:?} repo={:?}",
            global_path,
            repo_path
        );

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path,
        })
    }

    /// Locate the global config file, if one exists.
    fn find_global() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("commit-message-validator/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".commit-message-validator/config.toml"))
            .filter(|path| path.exists())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the configured profile.
    ///
    /// Returns `None` if neither scope chooses one, in which case the
    /// profile is detected from the repository.
    pub fn profile(&self) -> Option<ProfileKind> {
        self.repo
            .as_ref()
            .and_then(|r| r.profile.as_deref())
            .or(self.global.profile.as_deref())
            .and_then(ProfileKind::parse)
    }

    /// Get the configured color choice ("auto", "always" or "never").
    pub fn color(&self) -> Option<&str> {
        self.global.color.as_deref()
    }

    /// Get the remote consulted for hosting detection.
    ///
    /// Defaults to "origin" if not configured.
    pub fn remote(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.remote.as_deref())
            .unwrap_or("origin")
    }

    /// Profile adjustments from the repo config.
    pub fn profile_options(&self) -> ProfileOptions {
        match &self.repo {
            Some(repo) => ProfileOptions {
                extra_footers: repo.extra_footers.clone(),
                subject_max_length: repo.subject_max_length,
                body_max_length: repo.body_max_length,
            },
            None => ProfileOptions::default(),
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

/// Read and parse a TOML config file.
fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_empty_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(None, Some(temp.path())).unwrap();

        assert!(config.profile().is_none());
        assert!(config.color().is_none());
        assert_eq!(config.remote(), "origin");
        assert_eq!(config.profile_options(), ProfileOptions::default());
        assert!(config.repo_config_loaded_from().is_none());
    }

    #[test]
    fn load_global_file() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "config.toml", "profile = \"github\"\n");

        let config = Config::load_from(Some(path.clone()), None).unwrap();

        assert_eq!(config.profile(), Some(ProfileKind::GitHub));
        assert_eq!(config.global_config_loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn load_global_from_env() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "config.toml", "color = \"never\"\n");

        std::env::set_var(CONFIG_ENV, &path);
        let config = Config::load(None).unwrap();
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(config.color(), Some("never"));
    }

    #[test]
    fn load_repo_config() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            REPO_CONFIG_FILE,
            r#"
            profile = "gitlab"
            remote = "upstream"
            extra_footers = ["Story"]
            "#,
        );

        let config = Config::load_from(None, Some(temp.path())).unwrap();

        assert_eq!(config.profile(), Some(ProfileKind::GitLab));
        assert_eq!(config.remote(), "upstream");
        assert_eq!(config.profile_options().extra_footers, vec!["Story"]);
    }

    #[test]
    fn repo_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = write(temp.path(), "global.toml", "profile = \"github\"\n");
        write(temp.path(), REPO_CONFIG_FILE, "profile = \"gerrit\"\n");

        let config = Config::load_from(Some(global), Some(temp.path())).unwrap();

        assert_eq!(config.profile(), Some(ProfileKind::Gerrit));
    }

    #[test]
    fn parse_error_names_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), REPO_CONFIG_FILE, "profile = [");

        let err = Config::load_from(None, Some(temp.path())).unwrap_err();

        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains(REPO_CONFIG_FILE));
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), REPO_CONFIG_FILE, "profile = \"darcs\"\n");

        let err = Config::load_from(None, Some(temp.path())).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            REPO_CONFIG_FILE,
            r#"
            profile = "gerrit"
            unknown_field = true
            "#,
        );

        assert!(Config::load_from(None, Some(temp.path())).is_err());
    }
}
