//! ui::report
//!
//! Rendering of validation results.
//!
//! # Formats
//!
//! - **Text**: the human report printed by `validate` and the post-commit
//!   hook. Failure lines are red when color is enabled.
//! - **JSON**: `{"profile", "ok", "failures"}` for tooling.
//!
//! ```text
//! commit-message-validator
//! Using the gerrit profile to check the commit message
//! The following errors were found:
//! Line 1: Subject must be <=80 characters
//! Line 1: Do not define bug in the subject
//! ```

use std::io::IsTerminal;

use serde::Serialize;

use crate::core::types::ValidationFailure;
use crate::engine::Validation;

/// Program name printed at the top of every text report.
pub const REPORT_TITLE: &str = "commit-message-validator";

/// Line printed when a message passes.
pub const SUCCESS_LINE: &str = "Commit message is formatted properly! Keep up the good work!";

const ERRORS_HEADER: &str = "The following errors were found:";

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// When to color output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// Parse a configuration value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ColorChoice::Auto),
            "always" => Some(ColorChoice::Always),
            "never" => Some(ColorChoice::Never),
            _ => None,
        }
    }

    /// Decide for the current stdout.
    pub fn enabled(self) -> bool {
        self.resolve(std::io::stdout().is_terminal())
    }

    /// Decide given whether output is a terminal.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Render the text report.
///
/// The result has no trailing newline.
pub fn render_text(validation: &Validation, color: bool) -> String {
    let paint = |text: &str| {
        if color {
            format!("{}{}{}", RED, text, RESET)
        } else {
            text.to_string()
        }
    };

    let mut lines = vec![
        REPORT_TITLE.to_string(),
        format!(
            "Using the {} profile to check the commit message",
            validation.profile()
        ),
    ];

    if validation.is_ok() {
        lines.push(SUCCESS_LINE.to_string());
        return lines.join("\n");
    }

    lines.push(paint(ERRORS_HEADER));
    lines.extend(
        validation
            .failures()
            .iter()
            .map(|failure| paint(&failure.to_string())),
    );
    if let Some(remediation) = validation.profile().remediation() {
        lines.push(paint(remediation));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    profile: &'static str,
    ok: bool,
    failures: &'a [ValidationFailure],
}

/// Render the JSON report.
pub fn render_json(validation: &Validation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        profile: validation.profile().name(),
        ok: validation.is_ok(),
        failures: validation.failures(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::{ProfileKind, ProfileOptions};
    use crate::engine::Validator;

    fn validate(kind: ProfileKind, lines: &[&str]) -> Validation {
        let profile = kind.build(&ProfileOptions::default()).unwrap();
        Validator::new(&profile).validate(lines)
    }

    mod color_choice {
        use super::*;

        #[test]
        fn parse_values() {
            assert_eq!(ColorChoice::parse("auto"), Some(ColorChoice::Auto));
            assert_eq!(ColorChoice::parse("always"), Some(ColorChoice::Always));
            assert_eq!(ColorChoice::parse("never"), Some(ColorChoice::Never));
            assert_eq!(ColorChoice::parse("yes"), None);
        }

        #[test]
        fn resolve() {
            assert!(ColorChoice::Auto.resolve(true));
            assert!(!ColorChoice::Auto.resolve(false));
            assert!(ColorChoice::Always.resolve(false));
            assert!(!ColorChoice::Never.resolve(true));
        }
    }

    mod text {
        use super::*;

        #[test]
        fn success() {
            let validation = validate(ProfileKind::GitLab, &["Subject", "", "Body"]);
            insta::assert_snapshot!(render_text(&validation, false), @r###"
            commit-message-validator
            Using the gitlab profile to check the commit message
            Commit message is formatted properly! Keep up the good work!
            "###);
        }

        #[test]
        fn gerrit_failures_include_remediation() {
            let validation = validate(ProfileKind::Gerrit, &["Subject", "", "Body text"]);
            insta::assert_snapshot!(render_text(&validation, false), @r###"
            commit-message-validator
            Using the gerrit profile to check the commit message
            The following errors were found:
            Line 3: Expected Change-Id
            Please review <https://www.mediawiki.org/wiki/Gerrit/Commit_message_guidelines>
            and update your commit message accordingly
            "###);
        }

        #[test]
        fn github_failures_have_no_remediation() {
            let validation = validate(ProfileKind::GitHub, &["Fix crash (#42)", "", "Details"]);
            insta::assert_snapshot!(render_text(&validation, false), @r###"
            commit-message-validator
            Using the github profile to check the commit message
            The following errors were found:
            Line 1: Do not define bug in the subject
            "###);
        }

        #[test]
        fn color_wraps_error_lines() {
            let validation = validate(ProfileKind::GitHub, &["Subject #1", "", "Body"]);
            let text = render_text(&validation, true);
            assert!(text.contains("\x1b[31mLine 1: Do not define bug in the subject\x1b[0m"));
            assert!(text.starts_with("commit-message-validator\n"));
        }

        #[test]
        fn no_color_on_success() {
            let validation = validate(ProfileKind::GitLab, &["Subject", "", "Body"]);
            assert!(!render_text(&validation, true).contains('\x1b'));
        }
    }

    mod json {
        use super::*;

        #[test]
        fn shape() {
            let validation = validate(ProfileKind::GitHub, &["Subject #1", "", "Body"]);
            let value: serde_json::Value =
                serde_json::from_str(&render_json(&validation).unwrap()).unwrap();

            assert_eq!(value["profile"], "github");
            assert_eq!(value["ok"], false);
            assert_eq!(value["failures"][0]["rule_id"], "G1");
            assert_eq!(value["failures"][0]["line"], 1);
        }

        #[test]
        fn ok_report() {
            let validation = validate(ProfileKind::GitLab, &["Subject", "", "Body"]);
            let value: serde_json::Value =
                serde_json::from_str(&render_json(&validation).unwrap()).unwrap();

            assert_eq!(value["ok"], true);
            assert_eq!(value["failures"].as_array().map(Vec::len), Some(0));
        }
    }
}
