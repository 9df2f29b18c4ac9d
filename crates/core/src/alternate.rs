//! Letter-by-letter case transforms: elite-case and sponge-case.
//!
//! Neither transform latinizes. Accented letters keep their marks and only
//! change case.

use crate::case::{simple_lowercase as to_lower, simple_uppercase as to_upper};
use crate::diacritics::is_letter;
use crate::vowel::is_vowel;

/// Lowercase vowels and uppercase consonants; leave non-letters alone.
///
/// ```
/// use casetools_core::alternate::elite;
///
/// assert_eq!(elite("Sponge Bob!"), "SPoNGe BoB!");
/// ```
pub fn elite(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            c if !is_letter(c) => c,
            c if is_vowel(c) => to_lower(c),
            c => to_upper(c),
        })
        .collect()
}

/// Alternate lowercase and uppercase across consecutive letters.
///
/// Every word starts lowercase: any non-letter resets the alternation.
///
/// ```
/// use casetools_core::alternate::sponge;
///
/// assert_eq!(sponge("sponge bob"), "sPoNgE bOb");
/// ```
pub fn sponge(text: &str) -> String {
    let (out, _) = text.chars().fold(
        (String::with_capacity(text.len()), true),
        |(mut out, use_lower), c| {
            if !is_letter(c) {
                out.push(c);
                return (out, true);
            }

            out.push(if use_lower { to_lower(c) } else { to_upper(c) });
            (out, !use_lower)
        },
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // elite tests
    // ============================================================================

    #[test]
    fn test_elite_sponge_bob() {
        assert_eq!(elite("Sponge Bob!"), "SPoNGe BoB!");
    }

    #[test]
    fn test_elite_accented_letters_are_vowels() {
        // ç is lowered even though its base letter is a consonant.
        assert_eq!(elite("FAÇADE"), "FaçaDe");
        assert_eq!(elite("Ñandú"), "ñaNDú");
    }

    #[test]
    fn test_elite_keeps_diacritics() {
        assert_eq!(elite("CAFÉ"), "CaFé");
    }

    #[test]
    fn test_elite_non_letters_unchanged() {
        assert_eq!(elite("123 -_- 世界"), "123 -_- 世界");
    }

    #[test]
    fn test_elite_sharp_s_is_not_expanded() {
        assert_eq!(elite("straße"), "STRaße");
    }

    #[test]
    fn test_elite_dotted_capital_i_lowers_to_plain_i() {
        assert_eq!(elite("İ"), "i");
        assert_eq!(elite("İSTANBUL"), "iSTaNBuL");
    }

    #[test]
    fn test_elite_empty() {
        assert_eq!(elite(""), "");
    }

    // ============================================================================
    // sponge tests
    // ============================================================================

    #[test]
    fn test_sponge_sponge_bob() {
        assert_eq!(sponge("sponge bob"), "sPoNgE bOb");
    }

    #[test]
    fn test_sponge_resets_after_hyphen() {
        assert_eq!(sponge("Café-World"), "cAfÉ-wOrLd");
    }

    #[test]
    fn test_sponge_resets_after_digit() {
        assert_eq!(sponge("abc1abc"), "aBc1aBc");
    }

    #[test]
    fn test_sponge_calls_do_not_share_state() {
        // An odd-length word must not leak its parity into the next call.
        assert_eq!(sponge("abc"), "aBc");
        assert_eq!(sponge("abc"), "aBc");
    }

    #[test]
    fn test_sponge_greek_ypogegrammeni() {
        assert_eq!(sponge("ᾳᾳ"), "ᾳᾼ");
        assert_eq!(sponge("ῳῃ ῃῳ"), "ῳῌ ῃῼ");
    }

    #[test]
    fn test_sponge_empty() {
        assert_eq!(sponge(""), "");
    }
}
