use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace or extra `@` in any part.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns true if the contact field holds something that looks like an email address.
pub fn is_valid_contact(value: &str) -> bool {
    !value.is_empty() && EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_addresses() {
        assert!(is_valid_contact("a@b.co"));
        assert!(is_valid_contact("jane.doe+work@studio.example.com"));
        assert!(is_valid_contact("x@y.z"));
    }

    #[test]
    fn test_rejects_non_addresses() {
        assert!(!is_valid_contact(""));
        assert!(!is_valid_contact("not-an-email"));
        assert!(!is_valid_contact("a@b"));
        assert!(!is_valid_contact("a b@c.de"));
        assert!(!is_valid_contact("a@@b.de"));
        assert!(!is_valid_contact("@b.de"));
        assert!(!is_valid_contact("a@b.de "));
        assert!(!is_valid_contact("a@.de"));
    }
}
