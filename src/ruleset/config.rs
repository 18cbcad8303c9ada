//! RuleSet loading options.

/// Marker comment opening the ICANN section of the suffix list.
pub const BEGIN_ICANN_MARKER: &str = "===BEGIN ICANN DOMAINS===";
/// Marker comment opening the PRIVATE section of the suffix list.
pub const BEGIN_PRIVATE_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";
/// Marker comment closing the PRIVATE section.
pub const END_PRIVATE_MARKER: &str = "===END PRIVATE DOMAINS===";

/// Options for loading a RuleSet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject exception rules that have no wildcard rule to override.
    ///
    /// When disabled such exceptions are kept and still take precedence at
    /// match time.
    pub strict_exceptions: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl LoadOptions {
    /// Fail the load on orphan exception rules.
    pub fn strict() -> Self {
        Self {
            strict_exceptions: true,
        }
    }

    /// Accept orphan exception rules.
    pub fn lenient() -> Self {
        Self {
            strict_exceptions: false,
        }
    }
}
