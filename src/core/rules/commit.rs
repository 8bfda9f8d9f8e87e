//! Whole-message rules.

use super::MessageRule;
use crate::core::footer::{is_cherry_pick, parse_footer};
use crate::core::types::{RuleInfo, ValidationFailure};

/// The line after the subject must be blank.
#[derive(Debug, Clone, Default)]
pub struct SecondLineEmpty;

impl MessageRule for SecondLineEmpty {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("C1", "commit-second-line-empty")
    }

    fn validate(&self, lines: &[&str]) -> Vec<ValidationFailure> {
        match lines.get(1) {
            Some(line) if !line.is_empty() => vec![ValidationFailure::new(
                self.info().id,
                2,
                "Second line should be empty",
            )],
            _ => vec![],
        }
    }
}

/// The message must have at least `min` lines.
///
/// Reported at the last line of the message.
#[derive(Debug, Clone)]
pub struct MinLines {
    min: usize,
}

impl MinLines {
    /// Subject, blank separator and one more line.
    pub const DEFAULT_MIN: usize = 3;

    /// Create the rule with a custom minimum.
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Default for MinLines {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN)
    }
}

impl MessageRule for MinLines {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("C2", "commit-min-lines")
    }

    fn validate(&self, lines: &[&str]) -> Vec<ValidationFailure> {
        if lines.len() >= self.min {
            return vec![];
        }
        vec![ValidationFailure::new(
            self.info().id,
            lines.len(),
            format!("Expected at least {} lines", self.min),
        )]
    }
}

/// A cherry-pick marker must be the last line of the message.
#[derive(Debug, Clone, Default)]
pub struct CherryPickLast;

impl MessageRule for CherryPickLast {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("C3", "cherry-pick-last-line")
    }

    fn validate(&self, lines: &[&str]) -> Vec<ValidationFailure> {
        let last = lines.len().saturating_sub(1);
        lines
            .iter()
            .enumerate()
            .filter(|(idx, line)| *idx != last && is_cherry_pick(line))
            .map(|(idx, _)| {
                ValidationFailure::new(
                    self.info().id,
                    idx + 1,
                    "Cherry pick line is not the last line",
                )
            })
            .collect()
    }
}

/// Exactly one unique-id footer, with selected footers placed before it.
///
/// Scans every footer-shaped line in the message:
///
/// - the first id footer is the reference point,
/// - later id footers are reported as extras (`C4`),
/// - footers from the `before` set that appear after the id are reported as
///   misordered (`C5`),
/// - a message without an id footer is reported at its last line (`C6`).
#[derive(Debug, Clone)]
pub struct ChangeIdRequired {
    name: String,
    display: String,
    before: Vec<String>,
}

impl ChangeIdRequired {
    /// Id reported for footers placed after the id footer.
    pub const ORDER_ID: &'static str = "C5";
    /// Id reported when the id footer is missing.
    pub const MISSING_ID: &'static str = "C6";

    /// Create the rule for an id footer spelled `display` (e.g. `Change-Id`)
    /// and the normalized names that must precede it.
    pub fn new<I, S>(display: impl Into<String>, before: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let display = display.into();
        Self {
            name: display.to_lowercase(),
            display,
            before: before.into_iter().map(|n| n.into().to_lowercase()).collect(),
        }
    }

    /// Normalized name of the id footer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized names that must come before the id footer.
    pub fn before(&self) -> &[String] {
        &self.before
    }
}

impl MessageRule for ChangeIdRequired {
    fn info(&self) -> RuleInfo {
        RuleInfo::new("C4", "change-id-required")
    }

    fn validate(&self, lines: &[&str]) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        let mut first: Option<usize> = None;

        for (idx, line) in lines.iter().enumerate() {
            let Some(footer) = parse_footer(line) else {
                continue;
            };
            let line_number = idx + 1;

            if footer.normalized_name == self.name {
                match first {
                    None => first = Some(line_number),
                    Some(first) => failures.push(ValidationFailure::new(
                        self.info().id,
                        line_number,
                        format!("Extra {} found, first at {}", self.display, first),
                    )),
                }
            } else if let Some(first) = first {
                if self.before.contains(&footer.normalized_name) {
                    failures.push(ValidationFailure::new(
                        Self::ORDER_ID,
                        line_number,
                        format!(
                            "Expected '{}:' to come before {} on line {}",
                            footer.name, self.display, first
                        ),
                    ));
                }
            }
        }

        if first.is_none() {
            failures.push(ValidationFailure::new(
                Self::MISSING_ID,
                lines.len(),
                format!("Expected {}", self.display),
            ));
        }

        failures
    }

    fn referenced_footers(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.before.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGE_ID: &str = "Change-Id: I0123456789abcdef0123456789abcdef01234567";
    const MARKER: &str = "(cherry picked from commit 0123456789abcdef0123456789abcdef01234567)";

    fn change_id_rule() -> ChangeIdRequired {
        ChangeIdRequired::new("Change-Id", ["bug", "closes", "fixes", "task"])
    }

    mod second_line {
        use super::*;

        #[test]
        fn blank_passes() {
            assert!(SecondLineEmpty.validate(&["Subject", "", "Body"]).is_empty());
        }

        #[test]
        fn non_blank_fails_at_line_two() {
            assert_eq!(
                SecondLineEmpty.validate(&["Subject", "Body"]),
                vec![ValidationFailure::new(
                    "C1",
                    2,
                    "Second line should be empty"
                )]
            );
        }

        #[test]
        fn short_messages_pass() {
            assert!(SecondLineEmpty.validate(&[]).is_empty());
            assert!(SecondLineEmpty.validate(&["Subject"]).is_empty());
        }
    }

    mod min_lines {
        use super::*;

        #[test]
        fn three_lines_pass() {
            assert!(MinLines::default().validate(&["a", "", "b"]).is_empty());
        }

        #[test]
        fn reported_at_line_count() {
            assert_eq!(
                MinLines::default().validate(&["Subject", ""]),
                vec![ValidationFailure::new("C2", 2, "Expected at least 3 lines")]
            );
        }

        #[test]
        fn empty_message_reported_at_zero() {
            let failures = MinLines::default().validate(&[]);
            assert_eq!(failures[0].line, 0);
        }
    }

    mod cherry_pick {
        use super::*;

        #[test]
        fn last_line_passes() {
            assert!(CherryPickLast
                .validate(&["Subject", "", MARKER])
                .is_empty());
        }

        #[test]
        fn earlier_marker_fails() {
            assert_eq!(
                CherryPickLast.validate(&["Subject", "", MARKER, CHANGE_ID]),
                vec![ValidationFailure::new(
                    "C3",
                    3,
                    "Cherry pick line is not the last line"
                )]
            );
        }
    }

    mod change_id_required {
        use super::*;

        #[test]
        fn single_id_passes() {
            assert!(change_id_rule()
                .validate(&["Subject", "", "Bug: T1", CHANGE_ID])
                .is_empty());
        }

        #[test]
        fn missing_id_reported_at_last_line() {
            assert_eq!(
                change_id_rule().validate(&["Subject", "", "Body text"]),
                vec![ValidationFailure::new("C6", 3, "Expected Change-Id")]
            );
        }

        #[test]
        fn extra_id_references_first() {
            let failures = change_id_rule().validate(&["Subject", "", CHANGE_ID, CHANGE_ID]);
            assert_eq!(
                failures,
                vec![ValidationFailure::new(
                    "C4",
                    4,
                    "Extra Change-Id found, first at 3"
                )]
            );
        }

        #[test]
        fn id_name_is_case_insensitive() {
            assert!(change_id_rule()
                .validate(&["Subject", "", "change-ID: whatever"])
                .is_empty());
        }

        #[test]
        fn footer_after_id_is_misordered() {
            let failures =
                change_id_rule().validate(&["Subject", "", CHANGE_ID, "Bug: T1", "Fixes: T2"]);
            assert_eq!(
                failures,
                vec![
                    ValidationFailure::new(
                        "C5",
                        4,
                        "Expected 'Bug:' to come before Change-Id on line 3"
                    ),
                    ValidationFailure::new(
                        "C5",
                        5,
                        "Expected 'Fixes:' to come before Change-Id on line 3"
                    ),
                ]
            );
        }

        #[test]
        fn other_footers_after_id_pass() {
            assert!(change_id_rule()
                .validate(&["Subject", "", CHANGE_ID, "Signed-off-by: me"])
                .is_empty());
        }

        #[test]
        fn custom_id_footer() {
            let rule = ChangeIdRequired::new("Review-Id", Vec::<String>::new());
            assert_eq!(rule.name(), "review-id");
            let failures = rule.validate(&["Subject"]);
            assert_eq!(failures[0].message, "Expected Review-Id");
        }
    }
}
