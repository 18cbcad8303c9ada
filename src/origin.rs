//! Rule origin section of the suffix list.

use serde::Serialize;
use std::fmt;

/// Origin records which section of the suffix list a rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Origin {
    /// Delegated by ICANN (`===BEGIN ICANN DOMAINS===` section)
    #[default]
    Icann = 0,
    /// Contributed by private registries (`===BEGIN PRIVATE DOMAINS===` section)
    Private = 1,
}

impl Origin {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Icann => "ICANN",
            Origin::Private => "PRIVATE",
        }
    }

    /// Whether this is the ICANN section.
    pub fn is_icann(self) -> bool {
        self == Origin::Icann
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Origin {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ICANN" => Ok(Origin::Icann),
            "PRIVATE" => Ok(Origin::Private),
            _ => Err(()),
        }
    }
}
