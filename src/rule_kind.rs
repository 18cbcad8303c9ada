//! Rule kind definitions.

use serde::Serialize;
use std::fmt;

/// RuleKind distinguishes the three line forms of the suffix list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Every label must match literally (`co.uk`)
    Plain,
    /// Leftmost label is `*` and matches any single label (`*.kawasaki.jp`)
    Wildcard,
    /// Prefixed with `!`, carves a host out of a wildcard (`!city.kawasaki.jp`)
    Exception,
}

impl RuleKind {
    /// Classify rule text by its prefix.
    ///
    /// Returns the kind and the text with the `!` marker removed.
    /// The `*` label of a wildcard is kept.
    pub fn classify(text: &str) -> (Self, &str) {
        if let Some(rest) = text.strip_prefix('!') {
            (RuleKind::Exception, rest)
        } else if text.starts_with("*.") || text == "*" {
            (RuleKind::Wildcard, text)
        } else {
            (RuleKind::Plain, text)
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Plain => "plain",
            RuleKind::Wildcard => "wildcard",
            RuleKind::Exception => "exception",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
