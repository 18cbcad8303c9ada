//! Suffix rule representation and matching.

mod matcher;

pub use matcher::{MatchOptions, RuleMatcher, SuffixMatch};

use std::fmt;
use std::str::FromStr;

use crate::error::RuleParseError;
use crate::{Origin, RuleKind};

/// Label used by wildcard rules.
pub(crate) const WILDCARD_LABEL: &str = "*";

/// One line of the suffix list.
///
/// Labels are stored right-to-left: `co.uk` is held as `["uk", "co"]`, so
/// index 0 is always the label used to index the rule in a [`RuleSet`].
///
/// [`RuleSet`]: crate::RuleSet
///
/// # Examples
/// ```
/// use tldurl::{Origin, Rule, RuleKind};
///
/// let rule = Rule::parse("*.kawasaki.jp", Origin::Icann).unwrap();
/// assert_eq!(rule.kind(), RuleKind::Wildcard);
/// assert!(rule.matches(&["jp", "kawasaki", "foo"]));
/// assert_eq!(rule.label_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    labels: Vec<String>,
    kind: RuleKind,
    origin: Origin,
}

impl Rule {
    /// Parse a single rule in suffix-list syntax.
    ///
    /// Only the text up to the first whitespace is significant; labels are
    /// lower-cased.
    pub fn parse(text: &str, origin: Origin) -> Result<Self, RuleParseError> {
        let token = text.split_whitespace().next().unwrap_or("");
        if token.is_empty() {
            return Err(RuleParseError::Empty);
        }

        let token = token.to_lowercase();
        let (kind, body) = RuleKind::classify(&token);
        if body.is_empty() {
            return Err(RuleParseError::Empty);
        }

        let labels: Vec<&str> = body.split('.').collect();
        if labels.iter().any(|l| l.is_empty()) {
            return Err(RuleParseError::EmptyLabel(token.clone()));
        }

        match kind {
            RuleKind::Exception => {
                if labels.contains(&WILDCARD_LABEL) {
                    return Err(RuleParseError::WildcardException(token.clone()));
                }
                if labels.len() < 2 {
                    return Err(RuleParseError::ShortException(token.clone()));
                }
            }
            RuleKind::Wildcard => {
                if labels.len() == 1 {
                    return Err(RuleParseError::BareWildcard);
                }
                if labels[1..].contains(&WILDCARD_LABEL) {
                    return Err(RuleParseError::MisplacedWildcard(token.clone()));
                }
            }
            RuleKind::Plain => {
                if labels.contains(&WILDCARD_LABEL) {
                    return Err(RuleParseError::MisplacedWildcard(token.clone()));
                }
            }
        }

        Ok(Self {
            labels: labels.iter().rev().map(|l| l.to_string()).collect(),
            kind,
            origin,
        })
    }

    /// Labels in right-to-left order, including the `*` of a wildcard.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The rightmost label (the index key).
    pub fn rightmost_label(&self) -> &str {
        &self.labels[0]
    }

    /// Number of labels the rule spells out, which is also the number of
    /// host labels it consumes as the suffix when it prevails.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Plain, wildcard or exception.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Section of the list the rule was read from.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Match against host labels given right-to-left.
    ///
    /// The host may be longer than the rule; only the rightmost
    /// `label_count()` labels are compared.
    pub fn matches(&self, reversed_labels: &[&str]) -> bool {
        if self.labels.len() > reversed_labels.len() {
            return false;
        }

        self.labels
            .iter()
            .zip(reversed_labels)
            .all(|(rule_label, host_label)| {
                if self.kind == RuleKind::Wildcard && rule_label == WILDCARD_LABEL {
                    !host_label.is_empty()
                } else {
                    rule_label == host_label
                }
            })
    }

    /// For an exception rule, the labels of the wildcard rule it must be
    /// carved out of (right-to-left).
    pub(crate) fn covering_wildcard(&self) -> Option<Vec<&str>> {
        if self.kind != RuleKind::Exception {
            return None;
        }
        let mut labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        if let Some(last) = labels.last_mut() {
            *last = WILDCARD_LABEL;
        }
        Some(labels)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == RuleKind::Exception {
            write!(f, "!")?;
        }
        for (i, label) in self.labels.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    /// Parse a rule from the ICANN section.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse(s, Origin::Icann)
    }
}
