//! URL parsing with host decomposition.

use serde::Serialize;
use std::sync::Arc;
use url::{Position, Url};

use crate::decompose::{decompose_with_options, Decomposer, Decomposition, HostDecomposer};
use crate::error::Result;
use crate::host::split_host_port;
use crate::rule::MatchOptions;
use crate::RuleSet;

/// A parsed URL plus the structural parts of its host.
///
/// The generic parse result is kept unchanged in [`ParsedUrl::url`]; scheme,
/// path, query and fragment are read from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    /// Generic URL parse result
    pub url: Url,
    /// Labels left of the registrable domain
    pub subdomain: String,
    /// Registrable domain
    pub domain: String,
    /// Public suffix
    pub tld: String,
    /// Explicit port as written, or empty
    pub port: String,
    /// The prevailing rule comes from the ICANN section
    pub icann: bool,
    /// An explicit list rule matched
    pub matched: bool,
}

impl ParsedUrl {
    fn new(url: Url, parts: Decomposition, port: String) -> Self {
        Self {
            url,
            subdomain: parts.subdomain,
            domain: parts.domain,
            tld: parts.tld,
            port,
            icann: parts.icann,
            matched: parts.matched,
        }
    }

    /// The host fields as a [`Decomposition`].
    pub fn decomposition(&self) -> Decomposition {
        Decomposition {
            subdomain: self.subdomain.clone(),
            domain: self.domain.clone(),
            tld: self.tld.clone(),
            icann: self.icann,
            matched: self.matched,
        }
    }

    /// The serialized `host[:port]` part of the URL.
    pub fn host_port(&self) -> &str {
        &self.url[Position::BeforeHost..Position::AfterPort]
    }
}

/// Parse a URL and decompose its host with default match options.
///
/// A URL without a host (e.g. `mailto:`) is not an error: every host field
/// is empty.
///
/// # Examples
/// ```
/// use tldurl::{parse, RuleSet};
///
/// let rules = RuleSet::parse("uk\nco.uk\n").unwrap();
/// let parsed = parse(&rules, "https://api.example.co.uk:8443/v1?q=1").unwrap();
/// assert_eq!(parsed.subdomain, "api");
/// assert_eq!(parsed.domain, "example.co.uk");
/// assert_eq!(parsed.tld, "co.uk");
/// assert_eq!(parsed.port, "8443");
/// assert_eq!(parsed.url.path(), "/v1");
/// ```
pub fn parse(rules: &RuleSet, raw_url: &str) -> Result<ParsedUrl> {
    parse_with_options(rules, raw_url, MatchOptions::default())
}

/// Parse a URL and decompose its host.
pub fn parse_with_options(
    rules: &RuleSet,
    raw_url: &str,
    options: MatchOptions,
) -> Result<ParsedUrl> {
    parse_with(raw_url, |host| decompose_with_options(rules, host, options))
}

fn parse_with<F>(raw_url: &str, decompose: F) -> Result<ParsedUrl>
where
    F: FnOnce(&str) -> Decomposition,
{
    let url = Url::parse(raw_url)?;

    if url.host_str().map_or(true, str::is_empty) {
        return Ok(ParsedUrl::new(url, Decomposition::default(), String::new()));
    }

    let (parts, port) = {
        let (bare_host, port) = split_host_port(&url[Position::BeforeHost..Position::AfterPort]);
        let port = match url.port() {
            Some(_) => port,
            None => written_port(raw_url),
        };
        (decompose(bare_host), port.to_string())
    };

    Ok(ParsedUrl::new(url, parts, port))
}

/// The port as written in the raw URL's authority.
///
/// The generic parser drops a port equal to the scheme default
/// (`https://example.com:443`), so it is read back from the input.
fn written_port(raw_url: &str) -> &str {
    let after_scheme = match raw_url.trim().split_once("://") {
        Some((_, rest)) => rest,
        None => return "",
    };
    let authority = after_scheme
        .split(|c: char| matches!(c, '/' | '?' | '#' | '\\'))
        .next()
        .unwrap_or("");
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    split_host_port(host_port).1
}

/// URL parser bound to a host decomposer.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use tldurl::{Parser, RuleSet};
///
/// let rules = Arc::new(RuleSet::parse("com\n").unwrap());
/// let parser = Parser::new(rules);
/// let parsed = parser.parse("http://www.example.com").unwrap();
/// assert_eq!(parsed.domain, "example.com");
/// ```
#[derive(Debug, Clone)]
pub struct Parser<D = Decomposer> {
    decomposer: D,
}

impl Parser<Decomposer> {
    /// Create a parser over a shared rule set with default options.
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self::with_decomposer(Decomposer::new(rules))
    }

    /// Create a parser over a shared rule set.
    pub fn with_options(rules: Arc<RuleSet>, options: MatchOptions) -> Self {
        Self::with_decomposer(Decomposer::with_options(rules, options))
    }
}

impl<D: HostDecomposer> Parser<D> {
    /// Create a parser using any host decomposer.
    pub fn with_decomposer(decomposer: D) -> Self {
        Self { decomposer }
    }

    /// Get the host decomposer.
    pub fn decomposer(&self) -> &D {
        &self.decomposer
    }

    /// Parse a URL and decompose its host.
    pub fn parse(&self, raw_url: &str) -> Result<ParsedUrl> {
        parse_with(raw_url, |host| self.decomposer.decompose(host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn rules() -> RuleSet {
        RuleSet::parse("com\nuk\nco.uk\n// ===BEGIN PRIVATE DOMAINS===\ngithub.io\n").unwrap()
    }

    #[test]
    fn test_full_url() {
        let parsed = parse(&rules(), "https://www.example.co.uk:8080/path/to?q=1#frag").unwrap();
        assert_eq!(parsed.subdomain, "www");
        assert_eq!(parsed.domain, "example.co.uk");
        assert_eq!(parsed.tld, "co.uk");
        assert_eq!(parsed.port, "8080");
        assert!(parsed.icann);
        assert!(parsed.matched);

        assert_eq!(parsed.url.scheme(), "https");
        assert_eq!(parsed.url.path(), "/path/to");
        assert_eq!(parsed.url.query(), Some("q=1"));
        assert_eq!(parsed.url.fragment(), Some("frag"));
        assert_eq!(parsed.host_port(), "www.example.co.uk:8080");
    }

    #[test]
    fn test_no_port() {
        let parsed = parse(&rules(), "http://example.com/").unwrap();
        assert_eq!(parsed.port, "");
        assert_eq!(parsed.domain, "example.com");
    }

    #[test]
    fn test_written_default_port() {
        let parsed = parse(&rules(), "https://example.com:443/").unwrap();
        assert_eq!(parsed.port, "443");
        assert_eq!(parsed.domain, "example.com");

        let parsed = parse(&rules(), "http://user:pw@www.example.co.uk:80/a?b#c").unwrap();
        assert_eq!(parsed.port, "80");
        assert_eq!(parsed.subdomain, "www");

        let parsed = parse(&rules(), "https://[::1]:443").unwrap();
        assert_eq!(parsed.port, "443");
    }

    #[test]
    fn test_written_port() {
        assert_eq!(written_port("https://example.com:443/x"), "443");
        assert_eq!(written_port("  http://a:b@example.com:80?q"), "80");
        assert_eq!(written_port("http://example.com#x:80"), "");
        assert_eq!(written_port("http://example.com/"), "");
        assert_eq!(written_port("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_ipv6_host() {
        let parsed = parse(&rules(), "http://[::1]:443/").unwrap();
        assert_eq!(parsed.port, "443");
        assert!(parsed.decomposition().is_empty());
        assert!(!parsed.icann);
    }

    #[test]
    fn test_ipv4_host() {
        let parsed = parse(&rules(), "http://192.168.0.1:8080/admin").unwrap();
        assert_eq!(parsed.port, "8080");
        assert_eq!(parsed.subdomain, "");
        assert_eq!(parsed.domain, "");
        assert_eq!(parsed.tld, "");
        assert!(!parsed.icann);
    }

    #[test]
    fn test_hostless_url() {
        let parsed = parse(&rules(), "mailto:someone@example.com").unwrap();
        assert_eq!(parsed.decomposition(), Decomposition::default());
        assert_eq!(parsed.port, "");
        assert_eq!(parsed.url.path(), "someone@example.com");
    }

    #[test]
    fn test_syntax_error_propagates() {
        let err = parse(&rules(), "http://exa mple.com").unwrap_err();
        assert!(matches!(err, Error::UrlSyntax(_)));

        let err = parse(&rules(), "www.example.com").unwrap_err();
        assert!(matches!(
            err,
            Error::UrlSyntax(url::ParseError::RelativeUrlWithoutBase)
        ));
    }

    #[test]
    fn test_private_origin() {
        let parsed = parse(&rules(), "https://user.github.io").unwrap();
        assert_eq!(parsed.domain, "user.github.io");
        assert!(!parsed.icann);

        let parsed =
            parse_with_options(&rules(), "https://user.github.io", MatchOptions::icann_only())
                .unwrap();
        assert_eq!(parsed.domain, "github.io");
        assert_eq!(parsed.subdomain, "user");
    }

    #[test]
    fn test_parser_struct() {
        let parser = Parser::new(Arc::new(rules()));
        let parsed = parser.parse("https://LOCALHOST:3000").unwrap();
        assert_eq!(parsed.tld, "localhost");
        assert_eq!(parsed.domain, "");
        assert_eq!(parsed.port, "3000");
        assert!(!parsed.icann);
        assert!(!parsed.matched);
    }
}
