use regex::Regex;
use std::sync::LazyLock;

pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

// None if the pattern fails to compile; every address is then rejected.
static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        tracing::error!("Email pattern failed to compile: {}", e);
        None
    }
});

/// Checks `email` against the fixed address pattern. The whole string must match.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_standard_emails() {
        assert!(is_valid_email("simple@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.com"));
        assert!(is_valid_email("x@example.io"));
        assert!(is_valid_email("under_score%percent-dash@my-domain.co.uk"));
    }

    #[test]
    fn invalid_missing_parts() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("x@y"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn invalid_tld() {
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("user@example.123"));
    }

    #[test]
    fn invalid_characters() {
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user!@example.com"));
        assert!(!is_valid_email("user@exa_mple.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("Pelé@example.com"));
    }

    #[test]
    fn whole_string_must_match() {
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com "));
        assert!(!is_valid_email("user@example.com\n"));
    }

    #[test]
    fn pattern_is_permissive_about_dots() {
        // the pattern does not police dot placement
        assert!(is_valid_email("..@example.com"));
        assert!(is_valid_email("user@.example.com"));
    }
}
