// Typography cascade: ordered, context-sensitive rewrites of straight quotes.
//
// Whether a straight quote opens or closes depends on its neighbours, so a
// profile describes its typography as a fixed list of stages. Each stage runs
// over the output of the previous one; the order is part of the behaviour and
// must not change.

use std::borrow::Cow;

use regex::Regex;

/// One stage of a typography cascade.
#[derive(Debug, Clone)]
pub enum Rewrite {
    /// Replace `from` with `to` if the text starts with `from`.
    Leading { from: char, to: char },

    /// Replace `from` with `to` if the text ends with `from`.
    Trailing { from: char, to: char },

    /// Replace every non-overlapping match of `pattern` with `replacement`.
    /// The replacement may refer to capture groups (`${1}`).
    Pattern {
        pattern: Regex,
        replacement: &'static str,
    },
}

impl Rewrite {
    /// Apply this stage to `text` in place.
    fn apply(&self, text: &mut String) {
        match self {
            Rewrite::Leading { from, to } => {
                if text.starts_with(*from) {
                    text.replace_range(..from.len_utf8(), to.encode_utf8(&mut [0; 4]));
                }
            }
            Rewrite::Trailing { from, to } => {
                if text.ends_with(*from) {
                    let start = text.len() - from.len_utf8();
                    text.replace_range(start.., to.encode_utf8(&mut [0; 4]));
                }
            }
            Rewrite::Pattern {
                pattern,
                replacement,
            } => {
                let rewritten = match pattern.replace_all(text.as_str(), *replacement) {
                    Cow::Borrowed(_) => None,
                    Cow::Owned(s) => Some(s),
                };
                if let Some(s) = rewritten {
                    *text = s;
                }
            }
        }
    }
}

/// A fixed, ordered list of typography rewrites.
#[derive(Debug, Clone, Default)]
pub struct TypographyCascade {
    stages: Vec<Rewrite>,
}

impl TypographyCascade {
    pub fn new(stages: Vec<Rewrite>) -> Self {
        Self { stages }
    }

    /// A cascade with no stages (the identity transform).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Run every stage in order over `input`.
    ///
    /// Total: any text, including the empty string, is accepted.
    pub fn apply(&self, input: &str) -> String {
        let mut output = input.to_string();
        for stage in &self.stages {
            stage.apply(&mut output);
        }
        output
    }

    pub fn stages(&self) -> &[Rewrite] {
        &self.stages
    }
}
