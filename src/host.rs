//! Host string helpers: port splitting, IP literal detection and label
//! splitting.

use std::net::IpAddr;

/// Split an optional trailing `:port` off a host.
///
/// - Bracketed IPv6 literals (`[::1]:443`) yield the address without
///   brackets and the port after `]:`.
/// - Otherwise the text after the only `:` is the port when it is a
///   non-empty run of ASCII digits. A host with more than one `:` is an
///   unbracketed IPv6 literal and never has a port.
/// - Anything else is treated as having no port; this never fails.
///
/// # Examples
/// ```
/// use tldurl::host::split_host_port;
///
/// assert_eq!(split_host_port("example.com:8080"), ("example.com", "8080"));
/// assert_eq!(split_host_port("[::1]:443"), ("::1", "443"));
/// assert_eq!(split_host_port("example.com"), ("example.com", ""));
/// ```
pub fn split_host_port(host: &str) -> (&str, &str) {
    if let Some(rest) = host.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => {
                let port = match rest[end + 1..].strip_prefix(':') {
                    Some(port) if is_port(port) => port,
                    _ => "",
                };
                (&rest[..end], port)
            }
            None => (host, ""),
        };
    }

    let mut colons = host.match_indices(':');
    match (colons.next(), colons.next()) {
        (Some((idx, _)), None) => {
            let port = &host[idx + 1..];
            if port.is_empty() {
                // `host:` carries an empty port
                (&host[..idx], "")
            } else if is_port(port) {
                (&host[..idx], port)
            } else {
                (host, "")
            }
        }
        _ => (host, ""),
    }
}

fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check whether a host is an IPv4 dotted quad or an IPv6 address
/// (bracketed or not). One trailing dot is ignored, as in [`labels`].
pub fn is_ip_literal(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    host.parse::<IpAddr>().is_ok()
}

/// Split a lower-cased host into labels, ignoring one trailing dot.
///
/// Returns `None` if any label is empty (`.example.com`, `a..b`, `.`).
pub fn labels(host: &str) -> Option<Vec<&str>> {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() {
        return None;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.iter().any(|l| l.is_empty()) {
        return None;
    }
    Some(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_host() {
        assert_eq!(split_host_port("example.com"), ("example.com", ""));
        assert_eq!(split_host_port("example.com:8080"), ("example.com", "8080"));
        assert_eq!(split_host_port("localhost:1"), ("localhost", "1"));
    }

    #[test]
    fn test_split_non_numeric_port() {
        assert_eq!(split_host_port("example.com:http"), ("example.com:http", ""));
        assert_eq!(split_host_port("example.com:80a"), ("example.com:80a", ""));
        assert_eq!(split_host_port("example.com:"), ("example.com", ""));
    }

    #[test]
    fn test_split_all_digits_without_colon() {
        assert_eq!(split_host_port("8080"), ("8080", ""));
        assert_eq!(split_host_port("192.168.0.1"), ("192.168.0.1", ""));
    }

    #[test]
    fn test_split_ipv6() {
        assert_eq!(split_host_port("[::1]:443"), ("::1", "443"));
        assert_eq!(split_host_port("[::1]"), ("::1", ""));
        assert_eq!(split_host_port("[2001:db8::1]:x"), ("2001:db8::1", ""));
        assert_eq!(split_host_port("::1"), ("::1", ""));
        assert_eq!(split_host_port("[::1"), ("[::1", ""));
    }

    #[test]
    fn test_is_ip_literal() {
        assert!(is_ip_literal("192.168.0.1"));
        assert!(is_ip_literal("::1"));
        assert!(is_ip_literal("[2001:db8::1]"));
        assert!(!is_ip_literal("example.com"));
        assert!(!is_ip_literal("1.2.3"));
        assert!(!is_ip_literal("256.1.1.1"));
    }

    #[test]
    fn test_is_ip_literal_trailing_dot() {
        assert!(is_ip_literal("192.168.0.1."));
        assert!(is_ip_literal("[::1]."));
        assert!(!is_ip_literal("192.168.0.1.."));
        assert!(!is_ip_literal("example.com."));
    }

    #[test]
    fn test_labels() {
        assert_eq!(labels("www.example.com"), Some(vec!["www", "example", "com"]));
        assert_eq!(labels("example.com."), Some(vec!["example", "com"]));
        assert_eq!(labels("localhost"), Some(vec!["localhost"]));
        assert_eq!(labels(""), None);
        assert_eq!(labels("."), None);
        assert_eq!(labels(".example.com"), None);
        assert_eq!(labels("a..b"), None);
        assert_eq!(labels("example.com.."), None);
    }
}
