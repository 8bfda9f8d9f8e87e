//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$COMMIT_MESSAGE_VALIDATOR_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/commit-message-validator/config.toml`
//! 3. `~/.commit-message-validator/config.toml`
//!
//! # Repo Config
//!
//! Located at `.commit-message-validator.toml` in the working tree root, so it
//! can be committed alongside the code it governs.
//!
//! # Validation
//!
//! Config values are validated after parsing: profile names must be known,
//! extra footer names must be valid footer names, limits must be positive.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::footer::is_valid_footer_name;
use crate::core::profile::ProfileKind;

/// Accepted values for `color`.
pub const COLOR_CHOICES: &[&str] = &["auto", "always", "never"];

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// profile = "gerrit"
/// color = "auto"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default profile when a repository does not choose one
    pub profile: Option<String>,

    /// Colored output: "auto", "always" or "never"
    pub color: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(profile) = &self.profile {
            validate_profile(profile)?;
        }

        if let Some(color) = &self.color {
            if !COLOR_CHOICES.contains(&color.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid color '{}', must be one of: {}",
                    color,
                    COLOR_CHOICES.join(", ")
                )));
            }
        }

        Ok(())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// profile = "gitlab"
/// remote = "upstream"
/// extra_footers = ["Phabricator-Revision"]
/// body_max_length = 72
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Profile for this repository
    pub profile: Option<String>,

    /// Remote consulted for hosting detection (default: "origin")
    pub remote: Option<String>,

    /// Footer names recognized in addition to the profile's vocabulary
    pub extra_footers: Vec<String>,

    /// Subject length limit override
    pub subject_max_length: Option<usize>,

    /// Body line length limit override
    pub body_max_length: Option<usize>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(profile) = &self.profile {
            validate_profile(profile)?;
        }

        if let Some(remote) = &self.remote {
            if remote.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "remote cannot be empty".to_string(),
                ));
            }
        }

        if let Some(name) = self
            .extra_footers
            .iter()
            .find(|name| !is_valid_footer_name(name))
        {
            return Err(ConfigError::InvalidValue(format!(
                "invalid footer name '{}'",
                name
            )));
        }

        for (setting, value) in [
            ("subject_max_length", self.subject_max_length),
            ("body_max_length", self.body_max_length),
        ] {
            if value == Some(0) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be greater than zero",
                    setting
                )));
            }
        }

        Ok(())
    }
}

fn validate_profile(profile: &str) -> Result<(), ConfigError> {
    profile
        .parse::<ProfileKind>()
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidValue(e.to_string()))
}
