//! Public suffix rule selection.

use super::Rule;
use crate::{Origin, RuleKind, RuleSet};

/// Options controlling how the best rule is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Skip rules from the PRIVATE section.
    pub ignore_private: bool,
    /// Fall back to the implicit `*` rule when nothing matches.
    pub default_rule: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            ignore_private: false,
            default_rule: true,
        }
    }
}

impl MatchOptions {
    /// Only consider ICANN rules.
    pub fn icann_only() -> Self {
        Self {
            ignore_private: true,
            ..Self::default()
        }
    }
}

/// The outcome of a successful rule lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<'a> {
    rule: Option<&'a Rule>,
    suffix_len: usize,
}

impl<'a> SuffixMatch<'a> {
    /// The implicit `*` rule: the rightmost label alone is the suffix.
    fn implicit() -> Self {
        Self {
            rule: None,
            suffix_len: 1,
        }
    }

    fn explicit(rule: &'a Rule) -> Self {
        Self {
            rule: Some(rule),
            suffix_len: rule.label_count(),
        }
    }

    /// The list rule that matched, or `None` for the implicit rule.
    pub fn rule(&self) -> Option<&'a Rule> {
        self.rule
    }

    /// Number of host labels, counted from the right, forming the suffix.
    pub fn suffix_len(&self) -> usize {
        self.suffix_len
    }

    /// Whether the implicit `*` rule was applied.
    pub fn is_default(&self) -> bool {
        self.rule.is_none()
    }

    /// Origin of the matched rule; the implicit rule has none.
    pub fn origin(&self) -> Option<Origin> {
        self.rule.map(Rule::origin)
    }

    /// Whether the matched rule comes from the ICANN section.
    pub fn is_icann(&self) -> bool {
        self.origin().is_some_and(Origin::is_icann)
    }
}

/// RuleMatcher finds the prevailing rule for a host.
///
/// Precedence:
/// 1. A matching exception rule always wins, whatever its length, and
///    consumes every label it spells out.
/// 2. Otherwise the rule spelling out the most labels wins.
/// 3. Otherwise the implicit `*` rule applies (if enabled).
pub struct RuleMatcher<'a> {
    rules: &'a RuleSet,
    options: MatchOptions,
}

impl<'a> RuleMatcher<'a> {
    /// Create a matcher with default options.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self::with_options(rules, MatchOptions::default())
    }

    /// Create a matcher with explicit options.
    pub fn with_options(rules: &'a RuleSet, options: MatchOptions) -> Self {
        Self { rules, options }
    }

    /// Get the match options.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Find the best rule for lower-cased host labels in natural
    /// (left-to-right) order.
    ///
    /// Returns `None` for an empty label sequence, or when nothing matched
    /// and the implicit rule is disabled.
    pub fn find(&self, labels: &[&str]) -> Option<SuffixMatch<'a>> {
        if labels.is_empty() {
            return None;
        }

        let reversed: Vec<&str> = labels.iter().rev().copied().collect();

        let mut longest: Option<&'a Rule> = None;
        let mut exception: Option<&'a Rule> = None;

        for rule in self.rules.candidates_for_label(reversed[0]) {
            if self.options.ignore_private && rule.origin() == Origin::Private {
                continue;
            }
            if !rule.matches(&reversed) {
                continue;
            }

            let slot = match rule.kind() {
                RuleKind::Exception => &mut exception,
                RuleKind::Plain | RuleKind::Wildcard => &mut longest,
            };
            if slot.map_or(true, |current| rule.label_count() > current.label_count()) {
                *slot = Some(rule);
            }
        }

        if let Some(rule) = exception.or(longest) {
            return Some(SuffixMatch::explicit(rule));
        }

        if self.options.default_rule {
            Some(SuffixMatch::implicit())
        } else {
            None
        }
    }
}
