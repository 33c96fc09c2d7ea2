//! Host name and address syntax checks.

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a DNS hostname.
pub const MAX_HOSTNAME_LENGTH: usize = 255;

/// Inventory host token: alphanumeric at both ends, dots and hyphens inside.
static HOST_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9.-]*[A-Za-z0-9]$").expect("HOST_TOKEN must compile")
});

/// A single DNS label.
static HOSTNAME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?$").expect("HOSTNAME_LABEL must compile")
});

/// Whether `s` is an IPv4 or IPv6 literal.
pub fn is_valid_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Whether `s` looks like an inventory host name.
///
/// ```
/// use invlint::inventory::is_host_token;
///
/// assert!(is_host_token("web-01.example.com"));
/// assert!(!is_host_token("web_01"));
/// assert!(!is_host_token("w"));
/// ```
pub fn is_host_token(s: &str) -> bool {
    HOST_TOKEN.is_match(s)
}

/// Whether `s` is a syntactically valid DNS hostname.
///
/// Trailing dots are ignored; every remaining dot-separated label must be
/// alphanumeric at both ends with only hyphens inside.
pub fn is_valid_hostname(s: &str) -> bool {
    if s.chars().count() > MAX_HOSTNAME_LENGTH {
        return false;
    }

    s.trim_end_matches('.')
        .split('.')
        .all(|label| HOSTNAME_LABEL.is_match(label))
}

/// Extract the value of `name=` from free text, up to the next whitespace.
///
/// ```
/// use invlint::inventory::extract_variable;
///
/// let line = "ansible_host=10.0.0.5 ansible_user=deploy";
/// assert_eq!(extract_variable(line, "ansible_user"), Some("deploy"));
/// assert_eq!(extract_variable(line, "ansible_port"), None);
/// ```
pub fn extract_variable<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let re = Regex::new(&format!(r"{}=(\S+)", regex::escape(name))).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
