// Property tests for the Spanish typography normalizer.

use lengua_es::typography::normalize;
use proptest::prelude::*;

/// Letters, digits, quotes in both styles, punctuation and the spaces the
/// normalizer treats as word boundaries.
const ALPHABET: &str = r#"[a-zA-Zñáéíóú0-9'"’‘«» ,.;:!?¿¡()\x{00A0}\x{202F}]{0,48}"#;

fn is_straight_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

proptest! {
    #[test]
    fn char_count_is_preserved(input in ALPHABET) {
        let output = normalize(&input);
        prop_assert_eq!(input.chars().count(), output.chars().count());
    }

    #[test]
    fn only_straight_quotes_change(input in ALPHABET) {
        let output = normalize(&input);
        for (before, after) in input.chars().zip(output.chars()) {
            match before {
                '\'' => prop_assert!(matches!(after, '\'' | '‘' | '’'), "{:?} -> {:?}", before, after),
                '"' => prop_assert!(matches!(after, '"' | '«' | '»'), "{:?} -> {:?}", before, after),
                _ => prop_assert_eq!(before, after),
            }
        }
    }

    #[test]
    fn text_without_straight_quotes_is_untouched(input in ALPHABET) {
        let clean: String = input.chars().filter(|&c| !is_straight_quote(c)).collect();
        prop_assert_eq!(normalize(&clean), clean);
    }

    #[test]
    fn boundary_quotes_are_always_curled(body in r"([a-z]([a-z ]{0,18}[a-z])?)?") {
        let single = normalize(&format!("'{body}'"));
        prop_assert!(single.starts_with('‘'));
        prop_assert!(single.ends_with('’'));

        let double = normalize(&format!("\"{body}\""));
        prop_assert!(double.starts_with('«'));
        prop_assert!(double.ends_with('»'));
    }

    #[test]
    fn double_quote_after_space_opens(input in ALPHABET) {
        let before: Vec<char> = input.chars().collect();
        let after: Vec<char> = normalize(&input).chars().collect();
        for i in 1..before.len().saturating_sub(1) {
            if before[i - 1] == ' ' && before[i] == '"' {
                prop_assert_eq!(after[i], '«', "at {} in {:?}", i, input);
            }
        }
    }

    #[test]
    fn fully_converted_output_is_stable(input in ALPHABET) {
        let once = normalize(&input);
        if !once.chars().any(is_straight_quote) {
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
