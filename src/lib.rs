//! tldurl - URL host decomposition using the Public Suffix List algorithm.
//!
//! This crate splits the host of a URL into its structural parts:
//! subdomain, registrable domain, public suffix ("tld") and port. Suffixes
//! are found by matching the host against a Public Suffix List rule set,
//! honouring multi-label suffixes (`co.uk`), wildcard rules
//! (`*.kawasaki.jp`) and exception rules (`!city.kawasaki.jp`).
//!
//! # Features
//!
//! - **Explicit rule sets**: no global state; load any number of lists
//! - **ICANN / PRIVATE sections**: every result reports its origin
//! - **IP literals**: IPv4 and IPv6 hosts pass through without matching
//! - **Thread-safe**: a [`RuleSet`] is immutable and shareable behind `Arc`
//! - **Hot reload**: [`CachedDecomposer`] swaps lists atomically
//!
//! # Quick Start
//!
//! ```
//! use tldurl::{parse, RuleSet};
//!
//! let rules = RuleSet::parse(
//!     "// ===BEGIN ICANN DOMAINS===\n\
//!      uk\n\
//!      co.uk\n\
//!      // ===END ICANN DOMAINS===\n",
//! )?;
//!
//! let parsed = parse(&rules, "https://www.example.co.uk:8080/index.html")?;
//! assert_eq!(parsed.subdomain, "www");
//! assert_eq!(parsed.domain, "example.co.uk");
//! assert_eq!(parsed.tld, "co.uk");
//! assert_eq!(parsed.port, "8080");
//! assert!(parsed.icann);
//! assert_eq!(parsed.url.path(), "/index.html");
//! # Ok::<(), tldurl::Error>(())
//! ```
//!
//! # Rule Matching
//!
//! 1. A matching exception rule wins over any wildcard covering it
//! 2. Otherwise the rule with the most labels wins
//! 3. Otherwise the implicit `*` rule makes the rightmost label the suffix
//!    (reported with `matched = false` and `icann = false`)

mod cached;
mod decompose;
mod error;
mod origin;
mod parsed;
mod rule_kind;

pub mod host;
pub mod rule;
pub mod ruleset;

// Re-export core types
pub use error::{Error, Result, RuleParseError};
pub use origin::Origin;
pub use rule_kind::RuleKind;

// Re-export rule types
pub use rule::{MatchOptions, Rule, RuleMatcher, SuffixMatch};
pub use ruleset::{LoadOptions, RuleSet, RuleSetBuilder};

// Re-export decomposition API
pub use decompose::{decompose, decompose_with_options, Decomposer, Decomposition, HostDecomposer};
pub use host::split_host_port;
pub use parsed::{parse, parse_with_options, ParsedUrl, Parser};

// Re-export caching decomposer
pub use cached::{CacheConfig, CacheStats, CachedDecomposer};
