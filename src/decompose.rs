//! Host decomposition into subdomain, registrable domain and public suffix.

use serde::Serialize;
use std::sync::Arc;

use crate::host;
use crate::rule::{MatchOptions, RuleMatcher};
use crate::RuleSet;

/// Structural parts of a host.
///
/// For `www.example.co.uk`: subdomain `www`, domain `example.co.uk`,
/// tld `co.uk`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Decomposition {
    /// Labels left of the registrable domain, empty if none
    pub subdomain: String,
    /// Registrable domain: one label plus the public suffix
    pub domain: String,
    /// Public suffix
    pub tld: String,
    /// The prevailing rule comes from the ICANN section
    pub icann: bool,
    /// An explicit list rule matched (false for the implicit `*` rule,
    /// IP literals and invalid hosts)
    pub matched: bool,
}

impl Decomposition {
    /// Check if no field was filled in.
    pub fn is_empty(&self) -> bool {
        self.subdomain.is_empty() && self.domain.is_empty() && self.tld.is_empty()
    }
}

/// Something that can decompose a bare host (no port).
pub trait HostDecomposer: Send + Sync {
    /// Decompose a bare host. Never fails: unknown suffixes, IP literals
    /// and malformed hosts produce a (possibly empty) result.
    fn decompose(&self, host: &str) -> Decomposition;
}

/// Decompose a bare host with default match options.
///
/// # Examples
/// ```
/// use tldurl::{decompose, RuleSet};
///
/// let rules = RuleSet::parse("uk\nco.uk\n").unwrap();
/// let parts = decompose(&rules, "www.example.co.uk");
/// assert_eq!(parts.subdomain, "www");
/// assert_eq!(parts.domain, "example.co.uk");
/// assert_eq!(parts.tld, "co.uk");
/// assert!(parts.icann);
/// ```
pub fn decompose(rules: &RuleSet, host: &str) -> Decomposition {
    decompose_with_options(rules, host, MatchOptions::default())
}

/// Decompose a bare host.
pub fn decompose_with_options(rules: &RuleSet, host: &str, options: MatchOptions) -> Decomposition {
    let host = host.to_lowercase();
    if host.is_empty() || host::is_ip_literal(&host) {
        return Decomposition::default();
    }

    let labels = match host::labels(&host) {
        Some(labels) => labels,
        None => return Decomposition::default(),
    };

    let found = match RuleMatcher::with_options(rules, options).find(&labels) {
        Some(found) => found,
        None => return Decomposition::default(),
    };

    let total = labels.len();
    let suffix_start = total - found.suffix_len().min(total);
    let tld = labels[suffix_start..].join(".");

    let (subdomain, domain) = if suffix_start == 0 {
        // The host is itself a public suffix
        (String::new(), String::new())
    } else {
        let domain_start = suffix_start - 1;
        (
            labels[..domain_start].join("."),
            labels[domain_start..].join("."),
        )
    };

    Decomposition {
        subdomain,
        domain,
        tld,
        icann: found.is_icann(),
        matched: !found.is_default(),
    }
}

/// Stateless decomposer bound to a shared rule set.
#[derive(Debug, Clone)]
pub struct Decomposer {
    rules: Arc<RuleSet>,
    options: MatchOptions,
}

impl Decomposer {
    /// Create a decomposer with default match options.
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self::with_options(rules, MatchOptions::default())
    }

    /// Create a decomposer with explicit match options.
    pub fn with_options(rules: Arc<RuleSet>, options: MatchOptions) -> Self {
        Self { rules, options }
    }

    /// Get the shared rule set.
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Get the match options.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Decompose a bare host.
    pub fn decompose(&self, host: &str) -> Decomposition {
        decompose_with_options(&self.rules, host, self.options)
    }
}

impl HostDecomposer for Decomposer {
    fn decompose(&self, host: &str) -> Decomposition {
        Decomposer::decompose(self, host)
    }
}
