use casetools_core::ascii::{ascii, ascii_printable};
use casetools_core::diacritics::latinize;
use casetools_core::words::split_words;
use casetools_core::{CaseStyle, Operation};
use proptest::prelude::*;

fn any_style() -> impl Strategy<Value = CaseStyle> {
    prop::sample::select(CaseStyle::ALL.to_vec())
}

/// Mix of ASCII, accented Latin, combining marks, CJK, emoji and controls.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range(' ', '~'),
            2 => prop::sample::select("áéíóúàèäöüåñçøßÅÉÑ".chars().collect::<Vec<_>>()),
            1 => prop::char::range('\u{0300}', '\u{036F}'),
            1 => prop::sample::select("世界日本한국👍\t\n\r".chars().collect::<Vec<_>>()),
            1 => any::<char>(),
        ],
        0..48,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|c| hay.any(|h| h == c))
}

proptest! {
    #[test]
    fn ascii_output_is_ascii_subsequence_of_latinize(text in mixed_text()) {
        let out = ascii(&text);
        prop_assert!(out.chars().all(|c| c as u32 <= 127));
        prop_assert!(is_subsequence(&out, &latinize(&text)));
    }

    #[test]
    fn ascii_printable_output_is_printable(text in mixed_text()) {
        let out = ascii_printable(&text);
        prop_assert!(out.chars().all(|c| (32..=126).contains(&(c as u32))));
    }

    #[test]
    fn latinize_is_idempotent(text in mixed_text()) {
        let once = latinize(&text);
        prop_assert_eq!(latinize(&once), once);
    }

    #[test]
    fn render_only_emits_tokens_and_separator(text in mixed_text(), style in any_style()) {
        let sep = style.separator();
        prop_assert!(style
            .render(&text)
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || sep.contains(c)));
    }

    #[test]
    fn render_joined_styles_concatenate_tokens(text in mixed_text()) {
        let joined: String = split_words(&latinize(&text)).collect();
        for style in [CaseStyle::Flat, CaseStyle::Camel, CaseStyle::Pascal] {
            prop_assert_eq!(style.render(&text).to_ascii_lowercase(), joined.to_ascii_lowercase());
        }
    }

    #[test]
    fn render_separated_styles_keep_every_token(text in mixed_text()) {
        let words = split_words(&latinize(&text)).count();
        for style in [CaseStyle::Kebab, CaseStyle::Snake, CaseStyle::Upper, CaseStyle::Train, CaseStyle::Ada] {
            prop_assert_eq!(split_words(&style.render(&text)).count(), words);
        }
    }

    #[test]
    fn single_lowercase_word_is_unchanged_by_kebab(word in "[a-z0-9]{1,16}") {
        prop_assert_eq!(CaseStyle::Kebab.render(&word), word);
    }

    #[test]
    fn sponge_and_elite_only_change_case(text in "[a-zA-Z !.-]{0,32}") {
        for op in [Operation::Elite, Operation::Sponge] {
            let out = op.execute(&text);
            prop_assert_eq!(out.to_ascii_lowercase(), text.to_ascii_lowercase());
        }
    }
}

#[test]
fn empty_input_yields_empty_output_for_every_operation() {
    for op in Operation::ALL {
        assert_eq!(op.execute(""), "", "{op}");
    }
}
