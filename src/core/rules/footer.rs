//! Footer line rules.
//!
//! All rules here share a [`FooterVocabulary`] with the profile that built
//! them, so the classifier and the rules agree on which names are footers.
//! Deprecated names are mapped through the vocabulary's fixup table before
//! any lookup, while diagnostics quote the name as written.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::LineRule;
use crate::core::footer::{is_cherry_pick, parse_footer, FooterVocabulary};
use crate::core::types::{MessageContext, RuleInfo, ValidationFailure};

static RE_TASK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^T[0-9]+$").expect("task id pattern is valid"));

static RE_CHANGE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^I[a-f0-9]{40}$").expect("change id pattern is valid"));

/// Check whether a value is a Phabricator task id (`T123`).
pub fn is_valid_task_id(value: &str) -> bool {
    RE_TASK_ID.is_match(value)
}

/// Check whether a value is a Gerrit change id (`I` + 40 lowercase hex).
pub fn is_valid_change_id(value: &str) -> bool {
    RE_CHANGE_ID.is_match(value)
}

/// No blank lines between footer lines.
#[derive(Debug, Clone, Default)]
pub struct FooterNoBlankLines;

impl LineRule for FooterNoBlankLines {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("F1", "footer-no-blanks")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure> {
        if context != MessageContext::Footer || !line.is_empty() {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            "Unexpected blank line",
        )]
    }
}

/// Recognized footers must not appear in the body.
///
/// A recognized `Name: value` line classified as body usually means the blank
/// line separating the body from the footer block is missing.
#[derive(Debug, Clone)]
pub struct FooterInBody {
    vocabulary: Arc<FooterVocabulary>,
}

impl FooterInBody {
    /// Create the rule for a vocabulary.
    pub fn new(vocabulary: Arc<FooterVocabulary>) -> Self {
        Self { vocabulary }
    }
}

impl LineRule for FooterInBody {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("F2", "footer-in-body")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure> {
        if context != MessageContext::Body {
            return vec![];
        }
        match parse_footer(line) {
            Some(footer) if self.vocabulary.recognizes(&footer.normalized_name) => {
                vec![ValidationFailure::new(
                    self.info().id,
                    line_number,
                    format!("Expected '{}:' to be in footer", footer.name),
                )]
            }
            _ => vec![],
        }
    }
}

/// Footers must use a recognized name, its canonical spelling, and exactly
/// one space after the colon.
///
/// Emits `F3` for unknown names in the footer block, `F4` for misspelled
/// names and `F5` for bad separators. Unknown `Word: text` lines outside the
/// footer block are prose and are ignored.
#[derive(Debug, Clone)]
pub struct ExpectedFooters {
    vocabulary: Arc<FooterVocabulary>,
}

impl ExpectedFooters {
    /// Id reported for a recognized name spelled differently.
    pub const MISSPELLED_ID: &'static str = "F4";
    /// Id reported for a separator other than one space.
    pub const SEPARATOR_ID: &'static str = "F5";

    /// Create the rule for a vocabulary.
    pub fn new(vocabulary: Arc<FooterVocabulary>) -> Self {
        Self { vocabulary }
    }
}

impl LineRule for ExpectedFooters {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("F3", "expected-footer-format")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure> {
        let Some(footer) = parse_footer(line) else {
            return vec![];
        };

        let mut failures = Vec::new();
        let resolved = self.vocabulary.resolve(&footer.normalized_name);
        match self.vocabulary.canonical(resolved) {
            None if context != MessageContext::Footer => return failures,
            None => failures.push(ValidationFailure::new(
                self.info().id,
                line_number,
                format!(
                    "Unexpected footer '{}'. Supported footers: {}",
                    footer.name,
                    self.vocabulary.supported_list()
                ),
            )),
            Some(canonical) if canonical != footer.name => {
                failures.push(ValidationFailure::new(
                    Self::MISSPELLED_ID,
                    line_number,
                    format!("Use '{}:' not '{}:'", canonical, footer.name),
                ));
            }
            Some(_) => {}
        }

        if footer.separator != " " {
            failures.push(ValidationFailure::new(
                Self::SEPARATOR_ID,
                line_number,
                format!("Expected one space after '{}:'", footer.name),
            ));
        }

        failures
    }
}

/// Task footers (`Bug:` and its aliases) must hold a single task id.
#[derive(Debug, Clone)]
pub struct TaskIdExpected {
    names: Vec<String>,
    vocabulary: Arc<FooterVocabulary>,
}

impl TaskIdExpected {
    /// Create the rule for normalized footer `names`.
    pub fn new<I, S>(names: I, vocabulary: Arc<FooterVocabulary>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(|n| n.into().to_lowercase()).collect(),
            vocabulary,
        }
    }

    /// Normalized names this rule checks.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl LineRule for TaskIdExpected {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("F6", "phabricator-task-id-expected")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        _context: MessageContext,
    ) -> Vec<ValidationFailure> {
        let Some(footer) = parse_footer(line) else {
            return vec![];
        };
        let resolved = self.vocabulary.resolve(&footer.normalized_name);
        if !self.names.iter().any(|n| n == resolved) || is_valid_task_id(footer.value) {
            return vec![];
        }
        let display = self.vocabulary.canonical(resolved).unwrap_or(footer.name);
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            format!("{}: value must be a single phabricator task ID", display),
        )]
    }

    fn referenced_footers(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }
}

/// Change reference footers must hold a single Gerrit change id.
#[derive(Debug, Clone)]
pub struct ChangeIdExpected {
    names: Vec<String>,
    vocabulary: Arc<FooterVocabulary>,
}

impl ChangeIdExpected {
    /// Create the rule for normalized footer `names`.
    pub fn new<I, S>(names: I, vocabulary: Arc<FooterVocabulary>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(|n| n.into().to_lowercase()).collect(),
            vocabulary,
        }
    }

    /// Normalized names this rule checks.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl LineRule for ChangeIdExpected {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("F7", "change-id-value-expected")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        _context: MessageContext,
    ) -> Vec<ValidationFailure> {
        let Some(footer) = parse_footer(line) else {
            return vec![];
        };
        let resolved = self.vocabulary.resolve(&footer.normalized_name);
        if !self.names.iter().any(|n| n == resolved) || is_valid_change_id(footer.value) {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            format!("{}: value must be a single Gerrit change id", footer.name),
        )]
    }

    fn referenced_footers(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }
}

/// Every non-blank footer block line is a footer or the cherry-pick marker.
#[derive(Debug, Clone, Default)]
pub struct UnexpectedFooterLine;

impl LineRule for UnexpectedFooterLine {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("F8", "unexpected-footer-line")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure> {
        if context != MessageContext::Footer
            || line.is_empty()
            || parse_footer(line).is_some()
            || is_cherry_pick(line)
        {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            "Expected footer line to follow format of 'Name: ...'",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOTER: MessageContext = MessageContext::Footer;
    const BODY: MessageContext = MessageContext::Body;
    const CHANGE_ID: &str = "I0123456789abcdef0123456789abcdef01234567";

    fn vocabulary() -> Arc<FooterVocabulary> {
        Arc::new(
            FooterVocabulary::new(["Bug", "Change-Id", "Depends-On", "Signed-off-by"])
                .with_fixups([("closes", "bug"), ("fixes", "bug"), ("task", "bug")]),
        )
    }

    fn ids(failures: &[ValidationFailure]) -> Vec<&'static str> {
        failures.iter().map(|f| f.rule_id).collect()
    }

    mod no_blank_lines {
        use super::*;

        #[test]
        fn blank_footer_line_fails() {
            assert_eq!(
                FooterNoBlankLines.validate(6, "", FOOTER),
                vec![ValidationFailure::new("F1", 6, "Unexpected blank line")]
            );
        }

        #[test]
        fn blank_body_line_passes() {
            assert!(FooterNoBlankLines.validate(2, "", BODY).is_empty());
        }
    }

    mod in_body {
        use super::*;

        #[test]
        fn recognized_footer_in_body_fails() {
            let rule = FooterInBody::new(vocabulary());
            assert_eq!(
                rule.validate(3, "Bug: T1", BODY),
                vec![ValidationFailure::new(
                    "F2",
                    3,
                    "Expected 'Bug:' to be in footer"
                )]
            );
        }

        #[test]
        fn alias_counts_as_footer() {
            let rule = FooterInBody::new(vocabulary());
            let failures = rule.validate(3, "Fixes: T1", BODY);
            assert_eq!(failures[0].message, "Expected 'Fixes:' to be in footer");
        }

        #[test]
        fn prose_with_colon_passes() {
            let rule = FooterInBody::new(vocabulary());
            assert!(rule.validate(3, "Note: this is prose", BODY).is_empty());
        }

        #[test]
        fn footer_context_passes() {
            let rule = FooterInBody::new(vocabulary());
            assert!(rule.validate(5, "Bug: T1", FOOTER).is_empty());
        }
    }

    mod expected_footers {
        use super::*;

        #[test]
        fn well_formed_passes() {
            let rule = ExpectedFooters::new(vocabulary());
            assert!(rule.validate(5, "Bug: T1", FOOTER).is_empty());
        }

        #[test]
        fn unknown_in_footer_fails() {
            let rule = ExpectedFooters::new(vocabulary());
            assert_eq!(
                rule.validate(5, "Frobnicated-by: me", FOOTER),
                vec![ValidationFailure::new(
                    "F3",
                    5,
                    "Unexpected footer 'Frobnicated-by'. Supported footers: \
                     Bug, Change-Id, Depends-On, Signed-off-by"
                )]
            );
        }

        #[test]
        fn unknown_in_footer_still_checks_separator() {
            let rule = ExpectedFooters::new(vocabulary());
            let failures = rule.validate(5, "Frobnicated-by:me", FOOTER);
            assert_eq!(ids(&failures), vec!["F3", "F5"]);
        }

        #[test]
        fn unknown_in_body_is_ignored() {
            let rule = ExpectedFooters::new(vocabulary());
            assert!(rule.validate(3, "Note:   prose", BODY).is_empty());
        }

        #[test]
        fn misspelled_name() {
            let rule = ExpectedFooters::new(vocabulary());
            assert_eq!(
                rule.validate(5, "Signed-Off-By: me", FOOTER),
                vec![ValidationFailure::new(
                    "F4",
                    5,
                    "Use 'Signed-off-by:' not 'Signed-Off-By:'"
                )]
            );
        }

        #[test]
        fn alias_suggests_canonical() {
            let rule = ExpectedFooters::new(vocabulary());
            let failures = rule.validate(5, "Fixes: T1", FOOTER);
            assert_eq!(failures[0].message, "Use 'Bug:' not 'Fixes:'");
        }

        #[test]
        fn separator_must_be_one_space() {
            let rule = ExpectedFooters::new(vocabulary());
            for line in ["Bug:T1", "Bug:  T1", "Bug:\tT1"] {
                assert_eq!(
                    rule.validate(5, line, FOOTER),
                    vec![ValidationFailure::new(
                        "F5",
                        5,
                        "Expected one space after 'Bug:'"
                    )],
                    "{line}"
                );
            }
        }

        #[test]
        fn recognized_footer_in_body_is_checked() {
            let rule = ExpectedFooters::new(vocabulary());
            let failures = rule.validate(3, "bug:T1", BODY);
            assert_eq!(ids(&failures), vec!["F4", "F5"]);
        }
    }

    mod task_id {
        use super::*;

        #[test]
        fn valid_task_passes() {
            let rule = TaskIdExpected::new(["bug"], vocabulary());
            assert!(rule.validate(5, "Bug: T12345", FOOTER).is_empty());
        }

        #[test]
        fn invalid_task_fails() {
            let rule = TaskIdExpected::new(["bug"], vocabulary());
            for line in ["Bug: 12345", "Bug: T1, T2", "Bug: T", "Bug: https://phabricator"] {
                assert_eq!(
                    rule.validate(5, line, FOOTER),
                    vec![ValidationFailure::new(
                        "F6",
                        5,
                        "Bug: value must be a single phabricator task ID"
                    )],
                    "{line}"
                );
            }
        }

        #[test]
        fn alias_is_checked() {
            let rule = TaskIdExpected::new(["bug"], vocabulary());
            assert_eq!(rule.validate(5, "Closes: 42", FOOTER).len(), 1);
            assert!(rule.validate(5, "Task: T42", FOOTER).is_empty());
        }

        #[test]
        fn other_footers_ignored() {
            let rule = TaskIdExpected::new(["bug"], vocabulary());
            assert!(rule.validate(5, "Signed-off-by: me", FOOTER).is_empty());
        }
    }

    mod change_id {
        use super::*;

        fn rule() -> ChangeIdExpected {
            ChangeIdExpected::new(["depends-on", "needed-by", "change-id"], vocabulary())
        }

        #[test]
        fn valid_change_id_passes() {
            assert!(rule()
                .validate(6, &format!("Change-Id: {}", CHANGE_ID), FOOTER)
                .is_empty());
            assert!(rule()
                .validate(5, &format!("Depends-On: {}", CHANGE_ID), FOOTER)
                .is_empty());
        }

        #[test]
        fn invalid_change_id_quotes_given_name() {
            assert_eq!(
                rule().validate(6, "change-id: I123", FOOTER),
                vec![ValidationFailure::new(
                    "F7",
                    6,
                    "change-id: value must be a single Gerrit change id"
                )]
            );
        }

        #[test]
        fn uppercase_hex_is_rejected() {
            let value = CHANGE_ID.to_uppercase();
            assert_eq!(
                rule()
                    .validate(6, &format!("Change-Id: {}", value), FOOTER)
                    .len(),
                1
            );
        }

        #[test]
        fn unlisted_footer_ignored() {
            assert!(rule().validate(5, "Bug: T1", FOOTER).is_empty());
        }
    }

    mod unexpected_line {
        use super::*;

        #[test]
        fn prose_in_footer_fails() {
            assert_eq!(
                UnexpectedFooterLine.validate(6, "just some words", FOOTER),
                vec![ValidationFailure::new(
                    "F8",
                    6,
                    "Expected footer line to follow format of 'Name: ...'"
                )]
            );
        }

        #[test]
        fn footer_blank_and_cherry_pick_pass() {
            let marker = "(cherry picked from commit 0123456789abcdef0123456789abcdef01234567)";
            assert!(UnexpectedFooterLine.validate(6, "Bug: T1", FOOTER).is_empty());
            assert!(UnexpectedFooterLine.validate(6, "", FOOTER).is_empty());
            assert!(UnexpectedFooterLine.validate(6, marker, FOOTER).is_empty());
        }

        #[test]
        fn body_prose_passes() {
            assert!(UnexpectedFooterLine
                .validate(3, "just some words", BODY)
                .is_empty());
        }
    }

    #[test]
    fn value_formats() {
        assert!(is_valid_task_id("T1"));
        assert!(!is_valid_task_id("t1"));
        assert!(is_valid_change_id(CHANGE_ID));
        assert!(!is_valid_change_id(&CHANGE_ID[1..]));
    }
}
