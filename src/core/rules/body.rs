//! Body line rules.

use std::sync::LazyLock;

use regex::Regex;

use super::{char_len, LineRule};
use crate::core::types::{MessageContext, RuleInfo, ValidationFailure};

static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<?https?://\S+>?$").expect("url pattern is valid"));

static RE_CROSS_REPO_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:close[sd]?|fix(?:e[sd])?|resolve[sd]?)\s+\S+/\S+#\d+")
        .expect("closing keyword pattern is valid")
});

/// Body lines must not exceed `max_len` characters unless the whole line is
/// a URL.
#[derive(Debug, Clone)]
pub struct BodyMaxLength {
    max_len: usize,
}

impl BodyMaxLength {
    /// Default limit.
    pub const DEFAULT_MAX_LEN: usize = 100;

    /// Create the rule with a custom limit.
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Default for BodyMaxLength {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LEN)
    }
}

impl LineRule for BodyMaxLength {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("B1", "body-max-length")
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
        let len = char_len(line);
        if len <= self.max_len || RE_URL.is_match(line) {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            format!("Line exceeds max length ({}>{})", len, self.max_len),
        )]
    }
}

/// Body lines must not use a closing keyword on an issue in another
/// repository (`Fixes owner/repo#12`); the hosting side cannot honor it.
#[derive(Debug, Clone, Default)]
pub struct BodyNoCrossRepoClose;

impl LineRule for BodyNoCrossRepoClose {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("G2", "body-no-cross-repo-close")
    }

    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure> {
        if context != MessageContext::Body || !RE_CROSS_REPO_CLOSE.is_match(line) {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            line_number,
            "Do not write \"closing issue keywords\" for closing an issue \
             that is in another repository",
        )]
    }
}
