//! Diacritic removal through canonical decomposition.
//!
//! Latinization runs as three iterator stages that can be used on their own:
//! [`decompose`] (NFD), [`strip_marks`] (drop nonspacing marks) and
//! [`recompose`] (NFC). Compatibility decomposition is never applied, so
//! characters without a canonical accent decomposition (`ﬁ`, `²`, `世`) are
//! left alone.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::{Decompositions, Recompositions, UnicodeNormalization};

/// Canonical (NFD) decomposition of a code point stream.
pub fn decompose<I>(chars: I) -> Decompositions<I>
where
    I: Iterator<Item = char>,
{
    chars.nfd()
}

/// Drop every nonspacing mark (General_Category=Mn) from a code point stream.
pub fn strip_marks<I>(chars: I) -> impl Iterator<Item = char>
where
    I: Iterator<Item = char>,
{
    chars.filter(|&c| !is_nonspacing_mark(c))
}

/// Canonical (NFC) composition of a code point stream.
pub fn recompose<I>(chars: I) -> Recompositions<I>
where
    I: Iterator<Item = char>,
{
    chars.nfc()
}

/// Latinized code points of `text`, without collecting them.
pub fn latinized(text: &str) -> impl Iterator<Item = char> + '_ {
    recompose(strip_marks(decompose(text.chars())))
}

/// Remove diacritical marks, turning accented letters into their base form.
///
/// ```
/// use casetools_core::diacritics::latinize;
///
/// assert_eq!(latinize("räksmörgås"), "raksmorgas");
/// assert_eq!(latinize("世界"), "世界");
/// ```
pub fn latinize(text: &str) -> String {
    latinized(text).collect()
}

/// Whether `c` is a letter whose canonical decomposition carries at least one
/// nonspacing mark.
pub fn has_diacritic(c: char) -> bool {
    is_letter(c) && decompose(std::iter::once(c)).any(is_nonspacing_mark)
}

pub fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

/// Letters in the Unicode sense: any of the `L*` general categories.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
