//! The closed set of operations and their single dispatch point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alternate::{elite, sponge};
use crate::ascii::{ascii, ascii_printable};
use crate::diacritics::latinize;
use crate::error::{Error, Result};
use crate::style::CaseStyle;

/// Name of the only parameter every operation accepts.
pub const INPUT_PARAMETER: &str = "input";

/// One text transform. Exactly one runs per call; operations never chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Ascii,
    AsciiPrintable,
    Latinize,
    Flat,
    Kebab,
    Camel,
    Pascal,
    Snake,
    Upper,
    Train,
    Ada,
    Elite,
    Sponge,
}

/// Host-facing description of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub parameter: String,
    pub parameter_description: String,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::Ascii,
        Operation::AsciiPrintable,
        Operation::Latinize,
        Operation::Flat,
        Operation::Kebab,
        Operation::Camel,
        Operation::Pascal,
        Operation::Snake,
        Operation::Upper,
        Operation::Train,
        Operation::Ada,
        Operation::Elite,
        Operation::Sponge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Ascii => "ascii",
            Operation::AsciiPrintable => "ascii_printable",
            Operation::Latinize => "latinize",
            Operation::Flat => "flat",
            Operation::Kebab => "kebab",
            Operation::Camel => "camel",
            Operation::Pascal => "pascal",
            Operation::Snake => "snake",
            Operation::Upper => "upper",
            Operation::Train => "train",
            Operation::Ada => "ada",
            Operation::Elite => "elite",
            Operation::Sponge => "sponge",
        }
    }

    /// The case style this operation renders, if it is one of the eight.
    pub fn case_style(self) -> Option<CaseStyle> {
        match self {
            Operation::Flat => Some(CaseStyle::Flat),
            Operation::Kebab => Some(CaseStyle::Kebab),
            Operation::Camel => Some(CaseStyle::Camel),
            Operation::Pascal => Some(CaseStyle::Pascal),
            Operation::Snake => Some(CaseStyle::Snake),
            Operation::Upper => Some(CaseStyle::Upper),
            Operation::Train => Some(CaseStyle::Train),
            Operation::Ada => Some(CaseStyle::Ada),
            Operation::Ascii
            | Operation::AsciiPrintable
            | Operation::Latinize
            | Operation::Elite
            | Operation::Sponge => None,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Operation::Ascii => "Remove non-ASCII characters",
            Operation::AsciiPrintable => "Remove non-printable ASCII characters",
            Operation::Latinize => "Remove diacritics (latinize)",
            Operation::Flat => "Convert to flatcase",
            Operation::Kebab => "Convert to kebab-case",
            Operation::Camel => "Convert to camelCase",
            Operation::Pascal => "Convert to PascalCase",
            Operation::Snake => "Convert to snake_case",
            Operation::Upper => "Convert to UPPER_CASE",
            Operation::Train => "Convert to TRAIN-CASE",
            Operation::Ada => "Convert to Ada_Case",
            Operation::Elite => "Convert to elite case",
            Operation::Sponge => "Convert to sponge case",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Ascii => {
                "Removes diacritics first, then removes all non-ASCII characters, keeping only code points 0-127."
            }
            Operation::AsciiPrintable => {
                "Removes diacritics first, then keeps only printable ASCII (32-126), which also drops control characters like tabs and newlines."
            }
            Operation::Latinize => {
                "Removes diacritical marks, converting accented characters to their base Latin form. For example: 'räksmörgås' becomes 'raksmorgas'."
            }
            Operation::Flat => {
                "Converts to flatcase: all lowercase with no separators. Latinizes first, then splits on non-alphanumeric characters."
            }
            Operation::Kebab => {
                "Converts to kebab-case: lowercase words separated by hyphens. Latinizes first, then splits on non-alphanumeric characters."
            }
            Operation::Camel => {
                "Converts to camelCase: first word lowercase, following words capitalized, no separators. Latinizes first, then splits on non-alphanumeric characters."
            }
            Operation::Pascal => {
                "Converts to PascalCase: all words capitalized, no separators. Latinizes first, then splits on non-alphanumeric characters."
            }
            Operation::Snake => {
                "Converts to snake_case: lowercase words separated by underscores. Latinizes first, then splits on non-alphanumeric characters."
            }
            Operation::Upper => {
                "Converts to UPPER_CASE: uppercase words separated by underscores. Latinizes first, then splits on non-alphanumeric characters."
            }
            Operation::Train => {
                "Converts to TRAIN-CASE: uppercase words separated by hyphens. Latinizes first, then splits on non-alphanumeric characters."
            }
            Operation::Ada => {
                "Converts to Ada_Case: capitalized words separated by underscores. Latinizes first, then splits on non-alphanumeric characters."
            }
            Operation::Elite => {
                "Uppercases consonants and lowercases vowels, leaving non-letter characters unchanged. Treats letters with diacritics as vowels."
            }
            Operation::Sponge => {
                "Alternates lowercase and uppercase letters, starting with lowercase for each word. Non-letter characters are unchanged and reset the alternation."
            }
        }
    }

    /// What the `input` parameter holds for this operation.
    pub fn parameter_description(self) -> &'static str {
        match self {
            Operation::Ascii | Operation::AsciiPrintable => "The string to process",
            Operation::Latinize => "The string to latinize",
            _ => "The string to convert",
        }
    }

    pub fn info(self) -> OperationInfo {
        OperationInfo {
            name: self.name().to_string(),
            summary: self.summary().to_string(),
            description: self.description().to_string(),
            parameter: INPUT_PARAMETER.to_string(),
            parameter_description: self.parameter_description().to_string(),
        }
    }

    /// Run this operation over `input`.
    pub fn execute(self, input: &str) -> String {
        match self {
            Operation::Ascii => ascii(input),
            Operation::AsciiPrintable => ascii_printable(input),
            Operation::Latinize => latinize(input),
            Operation::Flat => CaseStyle::Flat.render(input),
            Operation::Kebab => CaseStyle::Kebab.render(input),
            Operation::Camel => CaseStyle::Camel.render(input),
            Operation::Pascal => CaseStyle::Pascal.render(input),
            Operation::Snake => CaseStyle::Snake.render(input),
            Operation::Upper => CaseStyle::Upper.render(input),
            Operation::Train => CaseStyle::Train.render(input),
            Operation::Ada => CaseStyle::Ada.render(input),
            Operation::Elite => elite(input),
            Operation::Sponge => sponge(input),
        }
    }

    /// Decode `input` as UTF-8 and run this operation over it.
    ///
    /// Bytes that are not well-formed UTF-8 cannot be normalized and are
    /// reported as [`Error::NormalizationFailure`].
    pub fn execute_bytes(self, input: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(input)?;
        Ok(self.execute(text))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

impl From<CaseStyle> for Operation {
    fn from(style: CaseStyle) -> Self {
        match style {
            CaseStyle::Flat => Operation::Flat,
            CaseStyle::Kebab => Operation::Kebab,
            CaseStyle::Camel => Operation::Camel,
            CaseStyle::Pascal => Operation::Pascal,
            CaseStyle::Snake => Operation::Snake,
            CaseStyle::Upper => Operation::Upper,
            CaseStyle::Train => Operation::Train,
            CaseStyle::Ada => Operation::Ada,
        }
    }
}
