//! Boilerplate removal for raw chat exports.
//!
//! WhatsApp prepends an end-to-end-encryption notice to every export. The
//! cleaner strips it (case-insensitively, from the phrase to the end of its
//! line) and trims surrounding whitespace before the text reaches the parser.

use once_cell::sync::Lazy;
use regex::Regex;

static BANNER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)messages and calls are end-to-end encrypted.*").expect("banner regex")
});

/// Strips the encryption notice and trims the whole input.
///
/// Never errors; empty input yields empty output.
///
/// # Example
///
/// ```
/// use chatlens::clean;
///
/// let raw = "Messages and calls are end-to-end encrypted. No one can read them.\n\
///            [18:45, 02/01/2026] Alice: hi";
/// assert_eq!(clean(raw), "[18:45, 02/01/2026] Alice: hi");
/// ```
pub fn clean(raw: &str) -> String {
    BANNER_RE.replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_banner_line() {
        let raw = "Messages and calls are end-to-end encrypted. Learn more.\nAlice says hi";
        assert_eq!(clean(raw), "Alice says hi");
    }

    #[test]
    fn test_banner_case_insensitive() {
        let raw = "MESSAGES AND CALLS ARE END-TO-END ENCRYPTED and so on\nrest";
        assert_eq!(clean(raw), "rest");
    }

    #[test]
    fn test_banner_mid_text() {
        let raw = "before\n[1:00, 01/01/2026] WhatsApp: Messages and calls are end-to-end encrypted.\nafter";
        let cleaned = clean(raw);
        assert!(cleaned.contains("before"));
        assert!(cleaned.contains("after"));
        assert!(!cleaned.to_lowercase().contains("encrypted"));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(clean("  \n hello \n  "), "hello");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t"), "");
    }
}
