// Spanish rule declarations

use lengua_core::rule::{RuleKind, RuleSpec};

pub const COMMA_WHITESPACE: &str = "COMMA_PARENTHESIS_WHITESPACE";
pub const DOUBLE_PUNCTUATION: &str = "DOUBLE_PUNCTUATION";
pub const UNPAIRED_BRACKETS: &str = "ES_UNPAIRED_BRACKETS";
pub const QUESTION_MARK: &str = "ES_QUESTION_MARK";
pub const SPELLER: &str = "MORFOLOGIK_RULE_ES";
pub const UPPERCASE_SENTENCE_START: &str = "UPPERCASE_SENTENCE_START";
pub const WORD_REPEAT: &str = "SPANISH_WORD_REPEAT_RULE";
pub const MULTIPLE_WHITESPACE: &str = "WHITESPACE_RULE";
pub const WIKIPEDIA_COMMON_ERRORS: &str = "SPANISH_WIKIPEDIA_COMMON_ERRORS";
pub const WRONG_WORD_IN_CONTEXT: &str = "SPANISH_WRONG_WORD_IN_CONTEXT";
pub const LONG_SENTENCE: &str = "TOO_LONG_SENTENCE";
pub const LONG_PARAGRAPH: &str = "TOO_LONG_PARAGRAPH";
pub const SIMPLE_REPLACE: &str = "ES_SIMPLE_REPLACE";
pub const SIMPLE_REPLACE_VERBS: &str = "ES_SIMPLE_REPLACE_VERBS";
pub const CONFUSION_PROBABILITY: &str = "ES_CONFUSION_PROBABILITY";

/// Words per sentence before `TOO_LONG_SENTENCE` fires.
pub const LONG_SENTENCE_MAX_WORDS: usize = 35;

/// Rules active for Spanish, in the order they are constructed.
pub const SPANISH_RULES: &[RuleSpec] = &[
    RuleSpec::new(COMMA_WHITESPACE, RuleKind::CommaWhitespace).with_example(
        "En su opinión<marker> ,</marker> no era verdad.",
        "En su opinión<marker>,</marker> no era verdad.",
    ),
    RuleSpec::new(DOUBLE_PUNCTUATION, RuleKind::DoublePunctuation),
    RuleSpec::new(UNPAIRED_BRACKETS, RuleKind::UnpairedBrackets),
    RuleSpec::new(QUESTION_MARK, RuleKind::QuestionMark),
    RuleSpec::new(SPELLER, RuleKind::Speller),
    RuleSpec::new(UPPERCASE_SENTENCE_START, RuleKind::UppercaseSentenceStart).with_example(
        "Venta al público. <marker>ha</marker> subido mucho.",
        "Venta al público. <marker>Ha</marker> subido mucho.",
    ),
    RuleSpec::new(WORD_REPEAT, RuleKind::WordRepeat),
    RuleSpec::new(MULTIPLE_WHITESPACE, RuleKind::MultipleWhitespace),
    RuleSpec::new(WIKIPEDIA_COMMON_ERRORS, RuleKind::CommonErrors),
    RuleSpec::new(WRONG_WORD_IN_CONTEXT, RuleKind::WrongWordInContext),
    RuleSpec::new(
        LONG_SENTENCE,
        RuleKind::LongSentence {
            max_words: LONG_SENTENCE_MAX_WORDS,
            default_active: true,
            picky: true,
        },
    ),
    RuleSpec::new(LONG_PARAGRAPH, RuleKind::LongParagraph),
    RuleSpec::new(SIMPLE_REPLACE, RuleKind::SimpleReplace),
    RuleSpec::new(SIMPLE_REPLACE_VERBS, RuleKind::SimpleReplaceVerbs),
];

/// Rules that need the shared language model.
pub const SPANISH_MODEL_RULES: &[RuleSpec] = &[RuleSpec::new(
    CONFUSION_PROBABILITY,
    RuleKind::ConfusionProbability,
)];
