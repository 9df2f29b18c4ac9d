//! Case-style rendering.
//!
//! Every style follows the same pipeline: latinize, split into words, case
//! each word, join with the style's separator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diacritics::latinize;
use crate::error::Error;
use crate::words::split_words;

/// The eight supported case styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `helloworld`
    Flat,
    /// `hello-world`
    Kebab,
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello_world`
    Snake,
    /// `HELLO_WORLD`
    Upper,
    /// `HELLO-WORLD`
    Train,
    /// `Hello_World`
    Ada,
}

/// How a single word is cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Lower,
    Upper,
    /// First letter uppercase, the rest lowercase.
    Title,
}

impl Casing {
    fn apply(self, word: &str, out: &mut String) {
        match self {
            Casing::Lower => out.extend(word.chars().map(|c| c.to_ascii_lowercase())),
            Casing::Upper => out.extend(word.chars().map(|c| c.to_ascii_uppercase())),
            Casing::Title => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.push(first.to_ascii_uppercase());
                    out.extend(chars.map(|c| c.to_ascii_lowercase()));
                }
            }
        }
    }
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 8] = [
        CaseStyle::Flat,
        CaseStyle::Kebab,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Upper,
        CaseStyle::Train,
        CaseStyle::Ada,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Flat => "flat",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Upper => "upper",
            CaseStyle::Train => "train",
            CaseStyle::Ada => "ada",
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            CaseStyle::Flat | CaseStyle::Camel | CaseStyle::Pascal => "",
            CaseStyle::Kebab | CaseStyle::Train => "-",
            CaseStyle::Snake | CaseStyle::Upper | CaseStyle::Ada => "_",
        }
    }

    /// Casing rule for the word at `index` (0-based).
    pub fn casing(self, index: usize) -> Casing {
        match self {
            CaseStyle::Flat | CaseStyle::Kebab | CaseStyle::Snake => Casing::Lower,
            CaseStyle::Upper | CaseStyle::Train => Casing::Upper,
            CaseStyle::Pascal | CaseStyle::Ada => Casing::Title,
            CaseStyle::Camel if index == 0 => Casing::Lower,
            CaseStyle::Camel => Casing::Title,
        }
    }

    /// Render `text` in this style.
    ///
    /// ```
    /// use casetools_core::style::CaseStyle;
    ///
    /// assert_eq!(CaseStyle::Camel.render("Hello World!"), "helloWorld");
    /// assert_eq!(CaseStyle::Ada.render("Hello World!"), "Hello_World");
    /// ```
    pub fn render(self, text: &str) -> String {
        let latin = latinize(text);
        let separator = self.separator();
        let mut out = String::with_capacity(latin.len());

        for (index, word) in split_words(&latin).enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            self.casing(index).apply(word, &mut out);
        }

        out
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}
