//! Name capitalisation and email validation.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`: no whitespace anywhere, a single `@`, and at least
/// one dot in the domain with non-empty labels on both sides of it.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Uppercase the first character of each space-separated word and
/// lowercase the rest. Runs of spaces are kept as-is.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_mixed_case_words() {
        assert_eq!(capitalize_words("john doe"), "John Doe");
        assert_eq!(capitalize_words("JANE SMITH"), "Jane Smith");
        assert_eq!(capitalize_words("alice JOHNSON"), "Alice Johnson");
        assert_eq!(
            capitalize_words("hello WORLD from JAVASCRIPT"),
            "Hello World From Javascript"
        );
    }

    #[test]
    fn capitalize_keeps_spacing_and_handles_empty() {
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("  two  spaces "), "  Two  Spaces ");
        assert_eq!(capitalize_words("élodie o'NEIL"), "Élodie O'neil");
    }

    #[test]
    fn accepts_ordinary_addresses() {
        let emails = [
            "john@example.com",
            "jane.smith@company.org",
            "alice@test.co.uk",
            "user@domain.co.uk",
        ];
        for email in emails {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "invalid-email",
            "invalid.email",
            "@invalid.com",
            "user@",
            "user@domain",
            "user@domain.",
            "user@.com",
            "two@@example.com",
            "spa ce@example.com",
            "",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be invalid");
        }
    }
}
