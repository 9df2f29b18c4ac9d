use crate::case::simple_lowercase;
use crate::diacritics::has_diacritic;

/// Whether `c` counts as a vowel for elite-case.
///
/// Plain `a e i o u` in either case are vowels, and so is any letter that
/// carries a diacritic, including accented consonants like `ç` or `ñ`.
pub fn is_vowel(c: char) -> bool {
    match simple_lowercase(c) {
        'a' | 'e' | 'i' | 'o' | 'u' => true,
        _ => has_diacritic(c),
    }
}
