//! engine::classify
//!
//! Assigns a [`MessageContext`] to each line of a message.
//!
//! # State Machine
//!
//! ```text
//!            line 0
//!   (none) ─────────▶ Subject
//!                        │
//!                        ▼
//!                      Body ◀──┐  anything else
//!                        │ ────┘
//!                        │ recognized footer or cherry-pick marker
//!                        │ directly after a blank line
//!                        ▼
//!                     Footer ──▶ Footer (absorbing)
//! ```
//!
//! The footer block starts at the first recognized footer (or cherry-pick
//! marker) that follows a blank line, and every later line belongs to it, even
//! blank lines and prose.
//!
//! A classifier carries state, so construct a fresh one per validation pass.

use crate::core::footer::{is_cherry_pick, parse_footer, FooterVocabulary};
use crate::core::types::MessageContext;

/// Per-pass line classifier.
#[derive(Debug)]
pub struct ContextClassifier<'a> {
    vocabulary: &'a FooterVocabulary,
    current: Option<MessageContext>,
}

impl<'a> ContextClassifier<'a> {
    /// Create a classifier for a vocabulary.
    ///
    /// An empty vocabulary never enters the footer state.
    pub fn new(vocabulary: &'a FooterVocabulary) -> Self {
        Self {
            vocabulary,
            current: None,
        }
    }

    /// The context assigned to the most recent line, if any.
    pub fn current(&self) -> Option<MessageContext> {
        self.current
    }

    /// Classify the line at `idx` (0-indexed).
    ///
    /// Lines must be classified in order, starting from 0.
    pub fn classify<S: AsRef<str>>(&mut self, idx: usize, lines: &[S]) -> MessageContext {
        let context = if idx == 0 {
            MessageContext::Subject
        } else if self.current == Some(MessageContext::Footer) {
            MessageContext::Footer
        } else if self.starts_footer(idx, lines) {
            MessageContext::Footer
        } else {
            MessageContext::Body
        };
        self.current = Some(context);
        context
    }

    fn starts_footer<S: AsRef<str>>(&self, idx: usize, lines: &[S]) -> bool {
        if self.vocabulary.is_empty() {
            return false;
        }
        let Some(line) = lines.get(idx) else {
            return false;
        };
        let line: &str = line.as_ref();
        let after_blank = lines
            .get(idx - 1)
            .is_some_and(|prev| prev.as_ref().is_empty());
        if !after_blank {
            return false;
        }
        is_cherry_pick(line)
            || parse_footer(line).is_some_and(|f| self.vocabulary.recognizes(&f.normalized_name))
    }
}

/// Classify every line of a message in one pass.
pub fn classify_all<S: AsRef<str>>(
    vocabulary: &FooterVocabulary,
    lines: &[S],
) -> Vec<MessageContext> {
    let mut classifier = ContextClassifier::new(vocabulary);
    (0..lines.len())
        .map(|idx| classifier.classify(idx, lines))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MessageContext::{Body, Footer, Subject};

    fn vocabulary() -> FooterVocabulary {
        FooterVocabulary::new(["Bug", "Change-Id", "Signed-off-by"])
            .with_fixups([("fixes", "bug"), ("closes", "bug"), ("task", "bug")])
    }

    #[test]
    fn subject_body_footer() {
        let lines = ["Subject", "", "Body text", "", "Bug: T1", "Change-Id: I0"];
        assert_eq!(
            classify_all(&vocabulary(), &lines),
            vec![Subject, Body, Body, Body, Footer, Footer]
        );
    }

    #[test]
    fn footer_needs_preceding_blank() {
        let lines = ["Subject", "", "Body text", "Bug: T1"];
        assert_eq!(
            classify_all(&vocabulary(), &lines),
            vec![Subject, Body, Body, Body]
        );
    }

    #[test]
    fn footer_directly_after_subject_is_body() {
        let lines = ["Subject", "Bug: T1"];
        assert_eq!(classify_all(&vocabulary(), &lines), vec![Subject, Body]);
    }

    #[test]
    fn unknown_name_does_not_start_footer() {
        let lines = ["Subject", "", "Note: prose", "", "Bug: T1"];
        assert_eq!(
            classify_all(&vocabulary(), &lines),
            vec![Subject, Body, Body, Body, Footer]
        );
    }

    #[test]
    fn alias_starts_footer() {
        let lines = ["Subject", "", "Fixes: T1"];
        assert_eq!(
            classify_all(&vocabulary(), &lines),
            vec![Subject, Body, Footer]
        );
    }

    #[test]
    fn cherry_pick_starts_footer() {
        let lines = [
            "Subject",
            "",
            "(cherry picked from commit 0123456789abcdef0123456789abcdef01234567)",
        ];
        assert_eq!(
            classify_all(&vocabulary(), &lines),
            vec![Subject, Body, Footer]
        );
    }

    #[test]
    fn footer_is_absorbing() {
        let lines = ["Subject", "", "Bug: T1", "", "more prose", "Not-Known: x"];
        assert_eq!(
            classify_all(&vocabulary(), &lines),
            vec![Subject, Body, Footer, Footer, Footer, Footer]
        );
    }

    #[test]
    fn empty_vocabulary_never_enters_footer() {
        let lines = ["Subject", "", "Bug: T1"];
        assert_eq!(
            classify_all(&FooterVocabulary::default(), &lines),
            vec![Subject, Body, Body]
        );
    }

    #[test]
    fn tracks_current_state() {
        let vocabulary = vocabulary();
        let lines = ["Subject", ""];
        let mut classifier = ContextClassifier::new(&vocabulary);
        assert_eq!(classifier.current(), None);
        classifier.classify(0, &lines);
        assert_eq!(classifier.current(), Some(Subject));
        classifier.classify(1, &lines);
        assert_eq!(classifier.current(), Some(Body));
    }

    #[test]
    fn empty_message() {
        let lines: [&str; 0] = [];
        assert!(classify_all(&vocabulary(), &lines).is_empty());
    }
}
