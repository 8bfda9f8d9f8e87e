//! core::footer
//!
//! Footer grammar: `Name: value` lines and the cherry-pick marker.
//!
//! # Grammar
//!
//! A footer line is a name that starts with a letter and contains no
//! whitespace, a colon, any amount of whitespace, and a value running to the
//! end of the line. Matching is case-insensitive; the original spelling of the
//! name is preserved so diagnostics can quote it.
//!
//! ```
//! use commit_message_validator::core::footer::parse_footer;
//!
//! let footer = parse_footer("Signed-Off-By:  Jane <jane@example.org>").unwrap();
//! assert_eq!(footer.name, "Signed-Off-By");
//! assert_eq!(footer.normalized_name, "signed-off-by");
//! assert_eq!(footer.separator, "  ");
//! assert_eq!(footer.value, "Jane <jane@example.org>");
//!
//! assert!(parse_footer("no colon here").is_none());
//! ```
//!
//! # Vocabulary
//!
//! A [`FooterVocabulary`] is the set of footer names a profile recognizes,
//! together with a fixup table that maps deprecated names onto canonical ones
//! (`Fixes:` is treated as `Bug:`). Fixups are applied before any
//! recognized-name test.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static RE_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<name>[a-z]\S+):(?P<ws>\s*)(?P<value>.*)$")
        .expect("footer pattern is valid")
});

static RE_CHERRY_PICK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(cherry picked from commit [0-9a-fA-F]{40}\)$")
        .expect("cherry-pick pattern is valid")
});

/// A line that matched the footer grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLine<'a> {
    /// Name as written in the message
    pub name: &'a str,
    /// Lowercased name
    pub normalized_name: String,
    /// Whitespace between the colon and the value
    pub separator: &'a str,
    /// Everything after the separator (may be empty)
    pub value: &'a str,
}

/// Parse a line as a footer.
///
/// Returns `None` if the line does not have the `Name: value` shape.
pub fn parse_footer(line: &str) -> Option<FooterLine<'_>> {
    let caps = RE_FOOTER.captures(line)?;
    let name = caps.name("name")?.as_str();
    Some(FooterLine {
        name,
        normalized_name: name.to_lowercase(),
        separator: caps.name("ws").map_or("", |m| m.as_str()),
        value: caps.name("value").map_or("", |m| m.as_str()),
    })
}

/// Check whether a line is a `(cherry picked from commit <sha>)` marker.
pub fn is_cherry_pick(line: &str) -> bool {
    RE_CHERRY_PICK.is_match(line)
}

/// Check whether `name` could appear as a footer name.
///
/// Used to reject configured vocabularies that could never match a line.
pub fn is_valid_footer_name(name: &str) -> bool {
    parse_footer(&format!("{}: x", name)).is_some_and(|footer| footer.name == name)
}

/// Footer names recognized by a profile.
///
/// Keeps the canonical spelling of every name in registration order (for the
/// "Supported footers" diagnostic) and a lowercase lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterVocabulary {
    canonical: Vec<String>,
    by_normalized: HashMap<String, usize>,
    fixup: HashMap<String, String>,
}

impl FooterVocabulary {
    /// Create a vocabulary from canonical names.
    ///
    /// Duplicate names (ignoring case) keep their first spelling.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::default();
        for name in names {
            vocabulary.insert(name);
        }
        vocabulary
    }

    /// Add a canonical name.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        let normalized = name.to_lowercase();
        if !self.by_normalized.contains_key(&normalized) {
            self.by_normalized.insert(normalized, self.canonical.len());
            self.canonical.push(name);
        }
    }

    /// Add fixup entries mapping a deprecated normalized name to a canonical
    /// normalized name.
    pub fn with_fixups<I, K, V>(mut self, fixups: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (from, to) in fixups {
            self.fixup
                .insert(from.into().to_lowercase(), to.into().to_lowercase());
        }
        self
    }

    /// Apply the fixup table to a normalized name.
    pub fn resolve<'a>(&'a self, normalized: &'a str) -> &'a str {
        self.fixup
            .get(normalized)
            .map(String::as_str)
            .unwrap_or(normalized)
    }

    /// Get the canonical spelling for an already resolved normalized name.
    pub fn canonical(&self, resolved: &str) -> Option<&str> {
        self.by_normalized
            .get(resolved)
            .map(|&idx| self.canonical[idx].as_str())
    }

    /// Check whether a normalized name is recognized once fixups apply.
    pub fn recognizes(&self, normalized: &str) -> bool {
        self.canonical(self.resolve(normalized)).is_some()
    }

    /// Check whether a normalized name is in the vocabulary without fixups.
    pub fn contains(&self, normalized: &str) -> bool {
        self.by_normalized.contains_key(normalized)
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Canonical names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.canonical.iter().map(String::as_str)
    }

    /// Fixup entries as `(deprecated, canonical)` pairs.
    pub fn fixups(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fixup.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Comma-separated canonical names, used in diagnostics.
    pub fn supported_list(&self) -> String {
        self.canonical.join(", ")
    }
}
