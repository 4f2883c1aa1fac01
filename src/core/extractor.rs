use crate::domain::model::DomainExtraction;

/// Returns the domain part of `email`, or an empty string when there is no `@`.
///
/// With [`DomainExtraction::Segment`] the result stops at a second `@`, so
/// `a@b@c` yields `b`. [`DomainExtraction::Remainder`] keeps `b@c`.
pub fn extract_domain(email: &str, mode: DomainExtraction) -> &str {
    let Some((_, rest)) = email.split_once('@') else {
        return "";
    };

    match mode {
        DomainExtraction::Segment => rest.split('@').next().unwrap_or(rest),
        DomainExtraction::Remainder => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_at_returns_tail() {
        assert_eq!(extract_domain("user@example.com", DomainExtraction::Segment), "example.com");
        assert_eq!(extract_domain("user@example.com", DomainExtraction::Remainder), "example.com");
    }

    #[test]
    fn test_no_at_returns_empty() {
        assert_eq!(extract_domain("not-an-email", DomainExtraction::Segment), "");
        assert_eq!(extract_domain("", DomainExtraction::Segment), "");
        assert_eq!(extract_domain("not-an-email", DomainExtraction::Remainder), "");
    }

    #[test]
    fn test_segment_drops_after_second_at() {
        assert_eq!(extract_domain("a@b@c", DomainExtraction::Segment), "b");
        assert_eq!(extract_domain("a@@c", DomainExtraction::Segment), "");
        assert_eq!(extract_domain("a@b.com@evil.org@x", DomainExtraction::Segment), "b.com");
    }

    #[test]
    fn test_remainder_keeps_everything_after_first_at() {
        assert_eq!(extract_domain("a@b@c", DomainExtraction::Remainder), "b@c");
        assert_eq!(extract_domain("a@@c", DomainExtraction::Remainder), "@c");
    }

    #[test]
    fn test_edge_positions() {
        assert_eq!(extract_domain("@example.com", DomainExtraction::Segment), "example.com");
        assert_eq!(extract_domain("user@", DomainExtraction::Segment), "");
        assert_eq!(extract_domain("@", DomainExtraction::Remainder), "");
    }
}
