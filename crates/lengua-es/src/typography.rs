// Spanish typography: curly apostrophes and single quotes, guillemets for
// double quotes.
//
// Stage order is significant. String-boundary quotes are settled before the
// interior context rules so that a quote at the start or end of the text is
// never mistaken for an interior one.

use std::sync::LazyLock;

use lengua_core::typography::{Rewrite, TypographyCascade};
use regex::Regex;

pub const OPENING_QUOTE: &str = "\u{00AB}"; // «
pub const CLOSING_QUOTE: &str = "\u{00BB}"; // »

const OPENING_SINGLE: char = '\u{2018}'; // ‘
const CLOSING_SINGLE: char = '\u{2019}'; // ’

static SPANISH_TYPOGRAPHY: LazyLock<TypographyCascade> = LazyLock::new(build_cascade);

fn pattern(re: &str, replacement: &'static str) -> Rewrite {
    Rewrite::Pattern {
        pattern: Regex::new(re).expect("typography pattern is a valid regex"),
        replacement,
    }
}

fn build_cascade() -> TypographyCascade {
    TypographyCascade::new(vec![
        // Apostrophe inside a word, or closing single quote after a letter.
        pattern(
            r"(\p{L})'([\p{L}\x{202F}\x{00A0} !?,.;:])",
            "${1}\u{2019}${2}",
        ),
        // Single quotes
        Rewrite::Leading {
            from: '\'',
            to: OPENING_SINGLE,
        },
        pattern(r#"(['’ «"])'"#, "${1}\u{2018}"),
        Rewrite::Trailing {
            from: '\'',
            to: CLOSING_SINGLE,
        },
        // Guillemets
        Rewrite::Leading { from: '"', to: '«' },
        Rewrite::Trailing { from: '"', to: '»' },
        pattern(r#" ""#, " \u{00AB}"),
        pattern(r#""([\x{202F}\x{00A0} !?,.;:])"#, "\u{00BB}${1}"),
    ])
}

/// Rewrite straight quotes and apostrophes into Spanish typography.
pub fn normalize(input: &str) -> String {
    SPANISH_TYPOGRAPHY.apply(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_quotes() {
        assert_eq!(normalize("'x'"), "‘x’");
        assert_eq!(normalize("\"x\""), "«x»");
    }

    #[test]
    fn interior_single_quotes() {
        assert_eq!(normalize("say 'hi' now"), "say ‘hi’ now");
    }

    #[test]
    fn clean_text_is_untouched() {
        assert_eq!(normalize("Hello, world."), "Hello, world.");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("«ya» ‘bien’"), "«ya» ‘bien’");
    }

    #[test]
    fn apostrophe_between_letters() {
        assert_eq!(normalize("l'aigua"), "l’aigua");
        assert_eq!(normalize("O'Donnell vino"), "O’Donnell vino");
    }

    #[test]
    fn closing_single_before_punctuation() {
        assert_eq!(normalize("dijo 'no', y se fue"), "dijo ‘no’, y se fue");
        assert_eq!(normalize("es 'raro'."), "es ‘raro’.");
        assert_eq!(normalize("¿'qué'?"), "¿'qué’?");
    }

    #[test]
    fn closing_single_before_no_break_spaces() {
        assert_eq!(normalize("a'\u{00A0}b"), "a’\u{00A0}b");
        assert_eq!(normalize("a'\u{202F}b"), "a’\u{202F}b");
    }

    #[test]
    fn interior_double_quotes() {
        assert_eq!(
            normalize("Me dijo \"hola\" ayer"),
            "Me dijo «hola» ayer"
        );
        assert_eq!(normalize("un \"sí\", luego"), "un «sí», luego");
        assert_eq!(normalize("él: \"ven\"."), "él: «ven».");
    }

    #[test]
    fn closing_double_before_no_break_spaces() {
        assert_eq!(normalize("dijo \"sí\"\u{00A0}y"), "dijo «sí»\u{00A0}y");
        assert_eq!(normalize("a \"b\"\u{202F}c"), "a «b»\u{202F}c");
    }

    #[test]
    fn closing_double_before_punctuation() {
        assert_eq!(normalize("ven \"ya\"!"), "ven «ya»!");
        assert_eq!(normalize("dijo \"sí\"? vale"), "dijo «sí»? vale");
        assert_eq!(normalize("dijo \"no\"; luego"), "dijo «no»; luego");
        assert_eq!(normalize("es \"así\": claro"), "es «así»: claro");
    }

    #[test]
    fn nested_quotes() {
        assert_eq!(
            normalize("\"Dijo 'basta' y salió\""),
            "«Dijo ‘basta’ y salió»"
        );
        assert_eq!(normalize("\"'hola' dijo\""), "«‘hola’ dijo»");
    }

    #[test]
    fn lone_interior_marks_without_context_stay() {
        assert_eq!(normalize("1'5"), "1'5");
        assert_eq!(normalize("a\"b"), "a\"b");
    }

    #[test]
    fn lone_boundary_marks() {
        assert_eq!(normalize("'"), "‘");
        assert_eq!(normalize("\""), "«");
        assert_eq!(normalize("''"), "‘’");
    }

    #[test]
    fn quote_after_quote_opens() {
        assert_eq!(normalize("a’'b"), "a’‘b");
        assert_eq!(normalize("«'x"), "«‘x");
        assert_eq!(normalize("a \"'x"), "a «‘x");
        // Matches do not overlap: the second apostrophe's context was consumed.
        assert_eq!(normalize("x ''y"), "x ‘'y");
    }

    #[test]
    fn quotes_exposed() {
        assert_eq!(OPENING_QUOTE, "«");
        assert_eq!(CLOSING_QUOTE, "»");
    }
}
