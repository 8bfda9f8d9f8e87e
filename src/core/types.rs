//! core::types
//!
//! Domain types shared by the rule engine.
//!
//! # Types
//!
//! - [`MessageContext`] - Structural section a line belongs to
//! - [`ValidationFailure`] - A single rule violation, the unit of output
//! - [`RuleInfo`] - Stable identifier and name of a rule
//!
//! # Examples
//!
//! ```
//! use commit_message_validator::core::types::ValidationFailure;
//!
//! let failure = ValidationFailure::new("C1", 2, "Second line should be empty");
//! assert_eq!(failure.to_string(), "Line 2: Second line should be empty");
//! ```

use std::fmt;

use serde::Serialize;

/// The structural section of a commit message a line belongs to.
///
/// Context is inferred per line by the classifier in
/// [`crate::engine::classify`]. Once a message enters [`MessageContext::Footer`]
/// it stays there until the end of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageContext {
    /// The first line of the message.
    Subject,
    /// Free-form prose between the subject and the footer block.
    Body,
    /// The trailing block of `Name: value` metadata lines.
    Footer,
}

impl MessageContext {
    /// Get the context name for display.
    pub fn name(&self) -> &'static str {
        match self {
            MessageContext::Subject => "subject",
            MessageContext::Body => "body",
            MessageContext::Footer => "footer",
        }
    }
}

impl fmt::Display for MessageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A rule violation found in a commit message.
///
/// Failures are values, not errors: a validation pass collects every failure
/// it finds. `line` is 1-indexed. Whole-message rules that have no single
/// offending line report the total line count instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationFailure {
    /// Short rule code, e.g. `"S1"`
    pub rule_id: &'static str,
    /// 1-indexed line number
    pub line: usize,
    /// Human-readable description
    pub message: String,
}

impl ValidationFailure {
    /// Create a new failure.
    pub fn new(rule_id: &'static str, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Identifier and name of a rule.
///
/// Ids are short codes (`S1`, `F3`, `C4`, ...) that determine report order.
/// Names are kebab-case and meant for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    /// Short rule code
    pub id: &'static str,
    /// Kebab-case rule name
    pub name: &'static str,
}

impl RuleInfo {
    /// Create rule metadata.
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

impl fmt::Display for RuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}
