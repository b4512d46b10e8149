//! Address normalization.
//!
//! Users type bare hosts ("example.com/inbox") as often as full URLs. A
//! bare address is qualified with `https://`; anything that still fails to
//! parse is refused.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("invalid address '{address}': {reason}")]
    Invalid { address: String, reason: String },
}

/// Resolve user input to an absolute, scheme-qualified URL.
pub fn normalize_address(input: &str) -> Result<Url, AddressError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AddressError::Empty);
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    Url::parse(&candidate).map_err(|e| AddressError::Invalid {
        address: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// Case-insensitive comparison of two normalized addresses.
pub fn addresses_match(a: &Url, b: &Url) -> bool {
    a.as_str().eq_ignore_ascii_case(b.as_str())
}

fn has_scheme(input: &str) -> bool {
    input.contains("://")
        || input
            .get(..6)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("about:"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        let url = normalize_address("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn bare_host_with_path_and_port() {
        let url = normalize_address("  localhost:3000/app?x=1 ").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(3000));
        assert_eq!(url.path(), "/app");
    }

    #[test]
    fn explicit_scheme_is_kept() {
        let url = normalize_address("http://intranet.local/dash").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(normalize_address("about:blank").unwrap().as_str(), "about:blank");
        assert_eq!(normalize_address("ABOUT:blank").unwrap().scheme(), "about");
    }

    #[test]
    fn empty_and_blank_are_refused() {
        assert_eq!(normalize_address(""), Err(AddressError::Empty));
        assert_eq!(normalize_address("   "), Err(AddressError::Empty));
    }

    #[test]
    fn words_with_spaces_are_refused() {
        let err = normalize_address("not a url and no dots").unwrap_err();
        assert!(matches!(err, AddressError::Invalid { ref address, .. } if address == "not a url and no dots"));
    }

    #[test]
    fn scheme_without_host_is_refused() {
        assert!(normalize_address("https://").is_err());
    }

    #[test]
    fn match_ignores_case() {
        let a = normalize_address("Example.com/Inbox").unwrap();
        let b = normalize_address("https://example.com/inbox").unwrap();
        assert!(addresses_match(&a, &b));
        let c = normalize_address("https://example.com/outbox").unwrap();
        assert!(!addresses_match(&a, &c));
    }
}
