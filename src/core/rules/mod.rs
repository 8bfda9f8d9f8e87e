//! core::rules
//!
//! Declarative checks applied to commit messages.
//!
//! # Rule Kinds
//!
//! - [`LineRule`] runs once per line and sees the line number, the text and
//!   the [`MessageContext`] the classifier assigned to it.
//! - [`MessageRule`] runs once over the whole message.
//!
//! Rules never observe each other's output and hold no state between calls,
//! so a profile can share one set of rule instances across any number of
//! validation passes and threads.
//!
//! # Identifiers
//!
//! | Prefix | Area |
//! |--------|------|
//! | `S` | subject line |
//! | `B` | body lines |
//! | `F` | footer lines |
//! | `C` | whole commit message |
//! | `G` | GitHub issue keywords |

mod body;
mod commit;
mod footer;
mod subject;

pub use body::{BodyMaxLength, BodyNoCrossRepoClose};
pub use commit::{ChangeIdRequired, CherryPickLast, MinLines, SecondLineEmpty};
pub use footer::{
    ChangeIdExpected, ExpectedFooters, FooterInBody, FooterNoBlankLines, TaskIdExpected,
    UnexpectedFooterLine,
};
pub use subject::{SubjectMaxLength, SubjectNoBugOrTask, SubjectNoIssueNumber};

use std::fmt::Debug;

use super::types::{MessageContext, RuleInfo, ValidationFailure};

/// A check applied to a single line.
pub trait LineRule: Debug + Send + Sync {
    /// Identifier and name of this rule.
    fn info(&self) -> RuleInfo;

    /// Check one line.
    ///
    /// `line_number` is 1-indexed.
    fn validate(
        &self,
        line_number: usize,
        line: &str,
        context: MessageContext,
    ) -> Vec<ValidationFailure>;

    /// Normalized footer names this rule expects the vocabulary to know.
    fn referenced_footers(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// A check applied to the whole message.
pub trait MessageRule: Debug + Send + Sync {
    /// Identifier and name of this rule.
    fn info(&self) -> RuleInfo;

    /// Check all lines of a message.
    fn validate(&self, lines: &[&str]) -> Vec<ValidationFailure>;

    /// Normalized footer names this rule expects the vocabulary to know.
    fn referenced_footers(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Length of a line in characters.
fn char_len(line: &str) -> usize {
    line.chars().count()
}
