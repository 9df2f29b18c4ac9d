//! Word tokenizer for case-style rendering.

use std::iter::FusedIterator;

/// Whether `c` can be part of a token: `[A-Za-z0-9]`.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Split `text` into maximal runs of ASCII letters and digits.
///
/// Everything else is a separator and is discarded. Runs of separators never
/// produce empty tokens, and tokens keep their original case.
///
/// ```
/// use casetools_core::words::split_words;
///
/// let words: Vec<&str> = split_words("--Hello, World 42!").collect();
/// assert_eq!(words, ["Hello", "World", "42"]);
/// ```
pub fn split_words(text: &str) -> Words<'_> {
    Words { rest: text }
}

/// Lazy forward scan over the tokens of a string. See [`split_words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(start) = self.rest.find(is_token_char) else {
            self.rest = "";
            return None;
        };

        let tail = &self.rest[start..];
        let len = tail.find(|c| !is_token_char(c)).unwrap_or(tail.len());
        let (word, rest) = tail.split_at(len);
        self.rest = rest;

        Some(word)
    }
}

impl FusedIterator for Words<'_> {}
