//! ASCII range filters applied after latinization.
//!
//! Diacritics are stripped before the range check so that `é` survives as
//! `e` instead of being dropped as a non-ASCII code point.

use crate::diacritics::latinized;

/// Latinize, then keep only code points in `0..=127`.
pub fn ascii(text: &str) -> String {
    latinized(text).filter(char::is_ascii).collect()
}

/// Latinize, then keep only printable ASCII (`32..=126`). Unlike [`ascii`]
/// this also drops control characters such as tabs and newlines.
pub fn ascii_printable(text: &str) -> String {
    latinized(text).filter(|c| (' '..='~').contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_drops_cjk() {
        assert_eq!(ascii("Hello 世界!"), "Hello !");
    }

    #[test]
    fn test_ascii_keeps_base_letters() {
        assert_eq!(ascii("Café résumé"), "Cafe resume");
    }

    #[test]
    fn test_ascii_keeps_control_characters() {
        assert_eq!(ascii("a\tb\nc\u{7f}"), "a\tb\nc\u{7f}");
    }

    #[test]
    fn test_ascii_drops_letters_without_decomposition() {
        assert_eq!(ascii("Søren Łódź"), "Sren odz");
    }

    #[test]
    fn test_ascii_drops_emoji_without_substitution() {
        assert_eq!(ascii("ok 👍"), "ok ");
    }

    #[test]
    fn test_ascii_printable_drops_controls() {
        assert_eq!(ascii_printable("a\tb\nc\u{7f}\u{0}"), "abc");
    }

    #[test]
    fn test_ascii_printable_keeps_boundaries() {
        assert_eq!(ascii_printable(" ~"), " ~");
    }

    #[test]
    fn test_ascii_printable_latinizes_first() {
        assert_eq!(ascii_printable("naïve\r\n日本"), "naive");
    }

    #[test]
    fn test_filters_empty() {
        assert_eq!(ascii(""), "");
        assert_eq!(ascii_printable(""), "");
    }
}
