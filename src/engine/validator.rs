//! engine::validator
//!
//! The validation driver.
//!
//! # Pass
//!
//! 1. Classify each line in order and run every line rule on it.
//! 2. Run every message rule once over the whole message.
//! 3. Sort all failures by rule id, then line number (stable).
//!
//! Validation is total: any sequence of lines, including none, produces a
//! result. Violations are values, never errors.
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
//! assert!(!validation.is_ok());
//! assert_eq!(validation.failures()[0].rule_id, "G1");
//! ```

use crate::core::profile::{ProfileKind, ValidatorProfile};
use crate::core::types::ValidationFailure;

use super::classify::ContextClassifier;

/// Runs a profile's rules over messages.
///
/// Holds no per-message state; one validator can check any number of
/// messages.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'p> {
    profile: &'p ValidatorProfile,
}

impl<'p> Validator<'p> {
    /// Create a validator for a built profile.
    pub fn new(profile: &'p ValidatorProfile) -> Self {
        Self { profile }
    }

    /// The profile this validator runs.
    pub fn profile(&self) -> &'p ValidatorProfile {
        self.profile
    }

    /// Validate the lines of one message.
    ///
    /// Lines carry no terminators; the trailing empty line left by a final
    /// newline is expected to be dropped already.
    pub fn validate<S: AsRef<str>>(&self, lines: &[S]) -> Validation {
        let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
        let mut failures = Vec::new();

        let mut classifier = ContextClassifier::new(self.profile.vocabulary());
        for (idx, line) in lines.iter().enumerate() {
            let context = classifier.classify(idx, lines.as_slice());
            for rule in self.profile.line_rules() {
                failures.extend(rule.validate(idx + 1, line, context));
            }
        }

        for rule in self.profile.message_rules() {
            failures.extend(rule.validate(&lines));
        }

        failures.sort_by(|a, b| a.rule_id.cmp(b.rule_id).then(a.line.cmp(&b.line)));

        log::debug!(
            "{} profile: {} lines, {} failures",
            self.profile.kind(),
            lines.len(),
            failures.len()
        );

        Validation {
            profile: self.profile.kind(),
            failures,
        }
    }
}

/// The outcome of validating one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    profile: ProfileKind,
    failures: Vec<ValidationFailure>,
}

impl Validation {
    /// Profile that produced this result.
    pub fn profile(&self) -> ProfileKind {
        self.profile
    }

    /// Failures sorted by rule id, then line.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Consume the result, returning its failures.
    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }

    /// Whether the message passed every rule.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit code: 0 if clean, 1 if any rule failed.
    pub fn exit_code(&self) -> u8 {
        if self.is_ok() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::ProfileOptions;

    const CHANGE_ID: &str = "Change-Id: I0123456789abcdef0123456789abcdef01234567";

    fn build(kind: ProfileKind) -> ValidatorProfile {
        kind.build(&ProfileOptions::default()).unwrap()
    }

    fn summary(validation: &Validation) -> Vec<(&'static str, usize)> {
        validation
            .failures()
            .iter()
            .map(|f| (f.rule_id, f.line))
            .collect()
    }

    #[test]
    fn clean_gerrit_message() {
        let profile = build(ProfileKind::Gerrit);
        let validation = Validator::new(&profile).validate(&[
            "Add widget frobnication",
            "",
            "Frobnicates widgets on demand.",
            "",
            "Bug: T12345",
            CHANGE_ID,
        ]);
        assert!(validation.is_ok());
        assert_eq!(validation.exit_code(), 0);
        assert_eq!(validation.profile(), ProfileKind::Gerrit);
    }

    #[test]
    fn empty_message_is_total() {
        let profile = build(ProfileKind::Gerrit);
        let lines: [&str; 0] = [];
        let validation = Validator::new(&profile).validate(&lines);
        assert_eq!(summary(&validation), vec![("C2", 0), ("C6", 0)]);
        assert_eq!(validation.exit_code(), 1);
    }

    #[test]
    fn sorted_by_rule_then_line() {
        let profile = build(ProfileKind::Gerrit);
        let long = "x".repeat(120);
        let validation = Validator::new(&profile).validate(&[
            "Subject",
            long.as_str(),
            "",
            long.as_str(),
            "",
            CHANGE_ID,
            CHANGE_ID,
        ]);
        assert_eq!(
            summary(&validation),
            vec![("B1", 2), ("B1", 4), ("C1", 2), ("C4", 7)]
        );
    }

    #[test]
    fn footer_rules_see_classified_context() {
        let profile = build(ProfileKind::Gerrit);
        let validation = Validator::new(&profile).validate(&[
            "Subject",
            "",
            "Body",
            "Bug: T1",
            "",
            CHANGE_ID,
            "",
            "trailing prose",
        ]);
        assert_eq!(
            summary(&validation),
            vec![("F1", 7), ("F2", 4), ("F8", 8)]
        );
    }

    #[test]
    fn accepts_owned_lines() {
        let profile = build(ProfileKind::GitLab);
        let lines = vec!["Subject".to_string(), String::new(), "Body".to_string()];
        assert!(Validator::new(&profile).validate(lines.as_slice()).is_ok());
    }

    #[test]
    fn validator_is_reusable() {
        let profile = build(ProfileKind::GitHub);
        let validator = Validator::new(&profile);
        let first = validator.validate(&["Subject #1", "Body"]);
        let second = validator.validate(&["Subject #1", "Body"]);
        assert_eq!(first, second);
        assert_eq!(first.into_failures().len(), 3);
    }
}
