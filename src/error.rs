//! Error types for tldurl.

use thiserror::Error;

/// Error type for tldurl operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A line of the suffix list could not be turned into a rule, or an
    /// exception rule has no covering wildcard.
    #[error("malformed rule at line {line}: {message}")]
    MalformedRule { line: usize, message: String },

    /// Generic URL syntax error, surfaced as reported by the URL parser
    #[error(transparent)]
    UrlSyntax(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `MalformedRule` error for the given 1-based line.
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Error::MalformedRule {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for tldurl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for a single suffix rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    /// Empty rule text
    #[error("empty rule")]
    Empty,

    /// A lone `*` would shadow every host
    #[error("bare wildcard rule")]
    BareWildcard,

    /// `*` anywhere other than the leftmost label
    #[error("wildcard must be the leftmost label: {0}")]
    MisplacedWildcard(String),

    /// Leading, trailing or doubled dot
    #[error("empty label in rule: {0}")]
    EmptyLabel(String),

    /// `!` combined with a wildcard label
    #[error("exception rule cannot contain a wildcard: {0}")]
    WildcardException(String),

    /// An exception needs at least two labels to carve out of a wildcard
    #[error("exception rule must have at least two labels: {0}")]
    ShortException(String),
}
