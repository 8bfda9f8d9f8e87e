//! core::profile
//!
//! Validator profiles: fixed assemblies of rules and footer vocabulary.
//!
//! # Profiles
//!
//! | Profile | Convention | Footer vocabulary | Change-Id |
//! |---------|------------|-------------------|-----------|
//! | `gerrit` | Gerrit code review | full | exactly one, trailing |
//! | `gitlab` | GitLab merge requests | full | not required |
//! | `github` | GitHub pull requests | none | not required |
//!
//! # Construction
//!
//! Profiles are built once and never mutated. Building validates the
//! configuration, so a rule that references an undefined footer or a
//! malformed footer name fails before any message is checked.
//!
//! ```
//! use commit_message_validator::core::profile::{ProfileKind, ProfileOptions};
//!
//! let profile = ProfileKind::Gerrit.build(&ProfileOptions::default()).unwrap();
//! assert_eq!(profile.kind(), ProfileKind::Gerrit);
//! assert!(profile.vocabulary().recognizes("change-id"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use super::footer::{is_valid_footer_name, FooterVocabulary};
use super::rules::{
    BodyMaxLength, BodyNoCrossRepoClose, ChangeIdExpected, ChangeIdRequired, CherryPickLast,
    ExpectedFooters, FooterInBody, FooterNoBlankLines, LineRule, MessageRule, MinLines,
    SecondLineEmpty, SubjectMaxLength, SubjectNoBugOrTask, SubjectNoIssueNumber, TaskIdExpected,
    UnexpectedFooterLine,
};
use super::types::RuleInfo;

/// Footer names recognized by the footer-aware profiles, in canonical spelling.
pub const EXPECTED_FOOTERS: &[&str] = &[
    "Acked-by",
    "Bug",
    "Cc",
    "Change-Id",
    "Co-Authored-by",
    "Depends-On",
    "Hosts",
    "Change-Private",
    "Needed-By",
    "Reported-by",
    "Requested-by",
    "Reviewed-by",
    "Signed-off-by",
    "Suggested-by",
    "Tested-by",
    "Thanks",
];

/// Deprecated footer names and the normalized name they stand for.
pub const FOOTER_FIXUPS: &[(&str, &str)] = &[("closes", "bug"), ("fixes", "bug"), ("task", "bug")];

/// Footers that must come before the Change-Id footer.
pub const BEFORE_CHANGE_ID: &[&str] = &["bug", "closes", "fixes", "task"];

/// Footers whose value must be a task id.
pub const TASK_FOOTERS: &[&str] = &["bug"];

/// Footers whose value must be a Gerrit change id.
pub const CHANGE_ID_FOOTERS: &[&str] = &["depends-on", "needed-by", "change-id"];

/// The unique change id footer.
pub const CHANGE_ID_FOOTER: &str = "Change-Id";

const GERRIT_REMEDIATION: &str = "Please review \
    <https://www.mediawiki.org/wiki/Gerrit/Commit_message_guidelines>\n\
    and update your commit message accordingly";

/// Errors from building a profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("unknown profile '{0}', must be one of: gerrit, gitlab, github")]
    UnknownProfile(String),

    #[error("invalid footer name '{0}'")]
    InvalidFooterName(String),

    #[error("fixup '{from}' maps to undefined footer '{to}'")]
    UnknownFixupTarget { from: String, to: String },

    #[error("rule {rule} references undefined footer '{name}'")]
    UndefinedFooter { rule: &'static str, name: String },

    #[error("{setting} must be greater than zero")]
    InvalidLimit { setting: &'static str },
}

/// The built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    /// Strict Gerrit footer convention with a required trailing Change-Id
    Gerrit,
    /// Gerrit footer vocabulary without Change-Id requirements
    GitLab,
    /// GitHub issue keyword checks, no footers
    GitHub,
}

impl ProfileKind {
    /// Get all profiles.
    pub fn all() -> &'static [ProfileKind] {
        &[ProfileKind::Gerrit, ProfileKind::GitLab, ProfileKind::GitHub]
    }

    /// Get the profile name as used in configuration and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileKind::Gerrit => "gerrit",
            ProfileKind::GitLab => "gitlab",
            ProfileKind::GitHub => "github",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            ProfileKind::Gerrit => "Gerrit footers with exactly one trailing Change-Id",
            ProfileKind::GitLab => "Gerrit footer vocabulary without Change-Id requirements",
            ProfileKind::GitHub => "GitHub issue references and closing keywords",
        }
    }

    /// Text printed after a failed report, if any.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            ProfileKind::Gerrit => Some(GERRIT_REMEDIATION),
            ProfileKind::GitLab | ProfileKind::GitHub => None,
        }
    }

    /// Parse a profile name.
    ///
    /// Accepts the short names and the historical validator names
    /// (`GerritMessageValidator`, ...), ignoring case.
    ///
    /// ```
    /// use commit_message_validator::core::profile::ProfileKind;
    ///
    /// assert_eq!(ProfileKind::parse("GitHub"), Some(ProfileKind::GitHub));
    /// assert_eq!(ProfileKind::parse("GitLabMessageValidator"), Some(ProfileKind::GitLab));
    /// assert_eq!(ProfileKind::parse("svn"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let name = lower.strip_suffix("messagevalidator").unwrap_or(&lower);
        match name {
            "gerrit" => Some(ProfileKind::Gerrit),
            "gitlab" => Some(ProfileKind::GitLab),
            "github" => Some(ProfileKind::GitHub),
            _ => None,
        }
    }

    /// Build the profile's rule set.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if `options` add malformed footer names or
    /// non-positive length limits.
    pub fn build(&self, options: &ProfileOptions) -> Result<ValidatorProfile, ProfileError> {
        let subject_max = positive(
            "subject_max_length",
            options
                .subject_max_length
                .unwrap_or(SubjectMaxLength::DEFAULT_MAX_LEN),
        )?;
        let body_max = positive(
            "body_max_length",
            options
                .body_max_length
                .unwrap_or(BodyMaxLength::DEFAULT_MAX_LEN),
        )?;

        match self {
            ProfileKind::GitHub => ValidatorProfile::new(
                *self,
                FooterVocabulary::default(),
                vec![
                    Box::new(SubjectMaxLength::new(subject_max)),
                    Box::new(BodyMaxLength::new(body_max)),
                    Box::new(SubjectNoIssueNumber),
                    Box::new(BodyNoCrossRepoClose),
                ],
                vec![Box::new(MinLines::default()), Box::new(SecondLineEmpty)],
            ),
            ProfileKind::Gerrit | ProfileKind::GitLab => {
                let mut vocabulary = FooterVocabulary::new(EXPECTED_FOOTERS.iter().copied())
                    .with_fixups(FOOTER_FIXUPS.iter().copied());
                for name in &options.extra_footers {
                    if !is_valid_footer_name(name) {
                        return Err(ProfileError::InvalidFooterName(name.clone()));
                    }
                    vocabulary.insert(name.as_str());
                }
                let vocabulary = Arc::new(vocabulary);

                let mut line_rules: Vec<Box<dyn LineRule>> = vec![
                    Box::new(SubjectMaxLength::new(subject_max)),
                    Box::new(SubjectNoBugOrTask),
                    Box::new(BodyMaxLength::new(body_max)),
                    Box::new(FooterInBody::new(Arc::clone(&vocabulary))),
                    Box::new(FooterNoBlankLines),
                    Box::new(ExpectedFooters::new(Arc::clone(&vocabulary))),
                    Box::new(TaskIdExpected::new(
                        TASK_FOOTERS.iter().copied(),
                        Arc::clone(&vocabulary),
                    )),
                ];
                let message_rules: Vec<Box<dyn MessageRule>>;

                if *self == ProfileKind::Gerrit {
                    line_rules.push(Box::new(ChangeIdExpected::new(
                        CHANGE_ID_FOOTERS.iter().copied(),
                        Arc::clone(&vocabulary),
                    )));
                    message_rules = vec![
                        Box::new(MinLines::default()),
                        Box::new(SecondLineEmpty),
                        Box::new(CherryPickLast),
                        Box::new(ChangeIdRequired::new(
                            CHANGE_ID_FOOTER,
                            BEFORE_CHANGE_ID.iter().copied(),
                        )),
                    ];
                } else {
                    message_rules = vec![Box::new(SecondLineEmpty), Box::new(CherryPickLast)];
                }
                line_rules.push(Box::new(UnexpectedFooterLine));

                ValidatorProfile::from_shared(*self, vocabulary, line_rules, message_rules)
            }
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProfileKind {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ProfileError::UnknownProfile(s.to_string()))
    }
}

fn positive(setting: &'static str, value: usize) -> Result<usize, ProfileError> {
    if value == 0 {
        return Err(ProfileError::InvalidLimit { setting });
    }
    Ok(value)
}

/// Adjustments applied when building a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Additional footer names to recognize (ignored by `github`)
    pub extra_footers: Vec<String>,
    /// Subject length limit override
    pub subject_max_length: Option<usize>,
    /// Body line length limit override
    pub body_max_length: Option<usize>,
}

/// A built profile: ordered line rules, ordered message rules and the footer
/// vocabulary the classifier uses.
///
/// Immutable once built; share it freely across validation passes and
/// threads.
#[derive(Debug)]
pub struct ValidatorProfile {
    kind: ProfileKind,
    vocabulary: Arc<FooterVocabulary>,
    line_rules: Vec<Box<dyn LineRule>>,
    message_rules: Vec<Box<dyn MessageRule>>,
}

impl ValidatorProfile {
    /// Assemble a profile from rules.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if a footer name or fixup is undefined or a
    /// rule references a footer the vocabulary does not recognize.
    pub fn new(
        kind: ProfileKind,
        vocabulary: FooterVocabulary,
        line_rules: Vec<Box<dyn LineRule>>,
        message_rules: Vec<Box<dyn MessageRule>>,
    ) -> Result<Self, ProfileError> {
        Self::from_shared(kind, Arc::new(vocabulary), line_rules, message_rules)
    }

    fn from_shared(
        kind: ProfileKind,
        vocabulary: Arc<FooterVocabulary>,
        line_rules: Vec<Box<dyn LineRule>>,
        message_rules: Vec<Box<dyn MessageRule>>,
    ) -> Result<Self, ProfileError> {
        for name in vocabulary.names() {
            if !is_valid_footer_name(name) {
                return Err(ProfileError::InvalidFooterName(name.to_string()));
            }
        }
        for (from, to) in vocabulary.fixups() {
            if !vocabulary.contains(to) {
                return Err(ProfileError::UnknownFixupTarget {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }

        let line_refs = line_rules
            .iter()
            .map(|rule| (rule.info(), rule.referenced_footers()));
        let message_refs = message_rules
            .iter()
            .map(|rule| (rule.info(), rule.referenced_footers()));
        for (info, names) in line_refs.chain(message_refs) {
            check_references(&vocabulary, info, &names)?;
        }

        Ok(Self {
            kind,
            vocabulary,
            line_rules,
            message_rules,
        })
    }

    /// The profile this rule set was built for.
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// Footer names recognized by the classifier and footer rules.
    pub fn vocabulary(&self) -> &FooterVocabulary {
        &self.vocabulary
    }

    /// Per-line rules in evaluation order.
    pub fn line_rules(&self) -> &[Box<dyn LineRule>] {
        &self.line_rules
    }

    /// Whole-message rules in evaluation order.
    pub fn message_rules(&self) -> &[Box<dyn MessageRule>] {
        &self.message_rules
    }

    /// Metadata of every rule, line rules first.
    pub fn rules(&self) -> Vec<RuleInfo> {
        self.line_rules
            .iter()
            .map(|r| r.info())
            .chain(self.message_rules.iter().map(|r| r.info()))
            .collect()
    }
}

fn check_references(
    vocabulary: &FooterVocabulary,
    info: RuleInfo,
    names: &[&str],
) -> Result<(), ProfileError> {
    match names.iter().find(|name| !vocabulary.recognizes(name)) {
        Some(name) => Err(ProfileError::UndefinedFooter {
            rule: info.id,
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}
