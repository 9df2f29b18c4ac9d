//! Simple (one code point to one code point) case mapping.
//!
//! `char::to_lowercase` and `char::to_uppercase` apply the full mappings,
//! which include the unconditional SpecialCasing.txt entries. Outside those
//! entries the full mapping is a single code point equal to the simple one.
//! Inside them the simple mapping is either a specific code point (listed
//! below) or the character itself.

/// UnicodeData simple lowercase mapping of `c`.
pub fn simple_lowercase(c: char) -> char {
    match c {
        // LATIN CAPITAL LETTER I WITH DOT ABOVE
        '\u{0130}' => 'i',
        _ => single(c.to_lowercase()).unwrap_or(c),
    }
}

/// UnicodeData simple uppercase mapping of `c`.
pub fn simple_uppercase(c: char) -> char {
    match c {
        // Greek letters with ypogegrammeni map to their prosgegrammeni forms.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            offset(c, 8)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => single(c.to_uppercase()).unwrap_or(c),
    }
}

fn offset(c: char, by: u32) -> char {
    char::from_u32(c as u32 + by).unwrap_or(c)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
