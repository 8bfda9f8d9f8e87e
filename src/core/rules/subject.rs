//! Subject line rules.

use std::sync::LazyLock;

use regex::Regex;

use super::{char_len, LineRule};
use crate::core::types::{MessageContext, RuleInfo, ValidationFailure};

static RE_REVERT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^Revert ".*"$"#).expect("revert pattern is valid"));

static RE_BUG_OR_TASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(bug|T?\d+)").expect("bug pattern is valid"));

static RE_ISSUE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+").expect("issue pattern is valid"));

/// Subject must not exceed `max_len` characters.
///
/// Subjects of the form `Revert "<original subject>"` are exempt since the
/// quoted subject makes them unavoidably long.
#[derive(Debug, Clone)]
pub struct SubjectMaxLength {
    max_len: usize,
}

impl SubjectMaxLength {
    /// Default limit.
    pub const DEFAULT_MAX_LEN: usize = 80;

    /// Create the rule with a custom limit.
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Default for SubjectMaxLength {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LEN)
    }
}

impl LineRule for SubjectMaxLength {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("S1", "subject-max-length")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure> {
        if context != MessageContext::Subject
            || char_len(line) <= self.max_len
            || RE_REVERT.is_match(line)
        {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            format!("Subject must be <={} characters", self.max_len),
        )]
    }
}

/// Subject must not start with `bug` or a task id; those belong in a footer.
#[derive(Debug, Clone, Default)]
pub struct SubjectNoBugOrTask;

impl LineRule for SubjectNoBugOrTask {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("S2", "subject-no-bug-or-task")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure> {
        if context != MessageContext::Subject || !RE_BUG_OR_TASK.is_match(line) {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            "Do not define bug in the subject",
        )]
    }
}

/// Subject must not reference an issue number like `#123`.
#[derive(Debug, Clone, Default)]
pub struct SubjectNoIssueNumber;

impl LineRule for SubjectNoIssueNumber {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("G1", "subject-no-issue-number")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure> {
        if context != MessageContext::Subject || !RE_ISSUE_NUMBER.is_match(line) {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            "Do not define bug in the subject",
        )]
    }
}
