// Rule declarations, construction and matches.
//
// Profiles do not implement rules. They declare which rules are active, in
// which order, and with which construction parameters; an external
// `RuleFactory` turns each declaration into a live rule object.

use std::fmt;
use std::sync::Arc;

use crate::config::UserConfig;
use crate::error::LanguageError;
use crate::language::LanguageTag;
use crate::messages::MessageCatalog;
use crate::model::LanguageModel;

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

/// A wrong/fixed example pair shown with a rule. The erroneous span is
/// enclosed in `<marker>` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleExample {
    pub wrong: &'static str,
    pub fixed: &'static str,
}

impl RuleExample {
    pub const fn new(wrong: &'static str, fixed: &'static str) -> Self {
        Self { wrong, fixed }
    }

    /// Text between `<marker>` and `</marker>` in the wrong sentence.
    pub fn wrong_span(&self) -> Option<&'static str> {
        marked_span(self.wrong)
    }

    /// Text between `<marker>` and `</marker>` in the fixed sentence.
    pub fn fixed_span(&self) -> Option<&'static str> {
        marked_span(self.fixed)
    }
}

fn marked_span(text: &'static str) -> Option<&'static str> {
    let start = text.find("<marker>")? + "<marker>".len();
    let len = text[start..].find("</marker>")?;
    Some(&text[start..start + len])
}

/// The kind of rule to construct, with its construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    CommaWhitespace,
    DoublePunctuation,
    UnpairedBrackets,
    QuestionMark,
    /// Dictionary-based spelling rule; honours the user dictionary and
    /// alternative languages.
    Speller,
    UppercaseSentenceStart,
    WordRepeat,
    MultipleWhitespace,
    /// Replacements for common errors collected from encyclopedia edits.
    CommonErrors,
    WrongWordInContext,
    LongSentence {
        max_words: usize,
        default_active: bool,
        picky: bool,
    },
    LongParagraph,
    SimpleReplace,
    SimpleReplaceVerbs,
    /// Requires a language model.
    ConfusionProbability,
}

impl RuleKind {
    /// Return whether rules of this kind need a language model.
    pub fn requires_model(&self) -> bool {
        matches!(self, RuleKind::ConfusionProbability)
    }
}

/// Declaration of one rule in a profile's rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub id: &'static str,
    pub kind: RuleKind,
    pub example: Option<RuleExample>,
}

impl RuleSpec {
    pub const fn new(id: &'static str, kind: RuleKind) -> Self {
        Self {
            id,
            kind,
            example: None,
        }
    }

    pub const fn with_example(mut self, wrong: &'static str, fixed: &'static str) -> Self {
        self.example = Some(RuleExample::new(wrong, fixed));
        self
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Caller-supplied configuration for one rule-list request.
#[derive(Clone, Copy)]
pub struct RuleConfig<'a> {
    pub messages: &'a dyn MessageCatalog,
    pub user_config: &'a UserConfig,
    /// The user's native language, if known.
    pub mother_tongue: Option<&'a LanguageTag>,
    /// Other languages the user writes in; spelling rules may accept their words.
    pub alt_languages: &'a [LanguageTag],
}

impl<'a> RuleConfig<'a> {
    pub fn new(messages: &'a dyn MessageCatalog, user_config: &'a UserConfig) -> Self {
        Self {
            messages,
            user_config,
            mother_tongue: None,
            alt_languages: &[],
        }
    }

    pub fn with_mother_tongue(mut self, tag: &'a LanguageTag) -> Self {
        self.mother_tongue = Some(tag);
        self
    }

    pub fn with_alt_languages(mut self, tags: &'a [LanguageTag]) -> Self {
        self.alt_languages = tags;
        self
    }
}

impl fmt::Debug for RuleConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleConfig")
            .field("locale", &self.messages.locale())
            .field("user_config", &self.user_config)
            .field("mother_tongue", &self.mother_tongue)
            .field("alt_languages", &self.alt_languages)
            .finish()
    }
}

/// Everything a factory receives to build one rule.
#[derive(Clone)]
pub struct RuleContext<'a> {
    /// Language the rule is built for.
    pub language: LanguageTag,
    pub config: RuleConfig<'a>,
    /// Shared language model, for model-backed rules only.
    pub model: Option<Arc<dyn LanguageModel>>,
}

/// A constructed rule. Match logic lives with the implementation.
pub trait Rule: Send + Sync {
    fn id(&self) -> &str;

    /// Category the rule belongs to; used as a priority fallback.
    fn category(&self) -> &str {
        DEFAULT_CATEGORY
    }

    /// Scan a sentence and report matches.
    fn check(&self, sentence: &str) -> Vec<RuleMatch>;
}

/// Category of rules that do not declare one.
pub const DEFAULT_CATEGORY: &str = "MISC";

impl fmt::Debug for dyn Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id())
            .field("category", &self.category())
            .finish()
    }
}

/// Builds rule objects from declarations.
pub trait RuleFactory: Send + Sync {
    fn create(&self, spec: &RuleSpec, ctx: &RuleContext<'_>)
    -> Result<Box<dyn Rule>, LanguageError>;
}

/// Build one rule per spec, in declaration order.
///
/// Stops at the first factory error. Every call returns new rule objects.
pub fn build_rules(
    factory: &dyn RuleFactory,
    specs: &[RuleSpec],
    ctx: &RuleContext<'_>,
) -> Result<Vec<Box<dyn Rule>>, LanguageError> {
    let rules = specs
        .iter()
        .map(|spec| factory.create(spec, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("constructed {} rules for {}", rules.len(), ctx.language);
    Ok(rules)
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

/// A rule firing on a span of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule_id: String,
    pub category_id: String,
    /// Start of the span (character offset, inclusive).
    pub start: usize,
    /// End of the span (character offset, exclusive).
    pub end: usize,
    pub message: String,
    pub suggestions: Vec<String>,
}

impl RuleMatch {
    pub fn new(rule_id: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            rule_id: rule_id.into(),
            category_id: DEFAULT_CATEGORY.to_string(),
            start,
            end,
            message: String::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = category_id.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Return whether the spans of `self` and `other` share at least one char.
    pub fn overlaps(&self, other: &RuleMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::StaticCatalog;

    #[test]
    fn example_marker_spans() {
        let ex = RuleExample::new(
            "En su opinión<marker> ,</marker> no era verdad.",
            "En su opinión<marker>,</marker> no era verdad.",
        );
        assert_eq!(ex.wrong_span(), Some(" ,"));
        assert_eq!(ex.fixed_span(), Some(","));
        assert_eq!(RuleExample::new("sin marca", "x").wrong_span(), None);
    }

    #[test]
    fn spec_builder() {
        let spec = RuleSpec::new("WHITESPACE_RULE", RuleKind::MultipleWhitespace);
        assert!(spec.example.is_none());
        let spec = spec.with_example("a<marker>  </marker>b", "a<marker> </marker>b");
        assert_eq!(spec.example.unwrap().fixed_span(), Some(" "));
        assert!(!spec.kind.requires_model());
        assert!(RuleKind::ConfusionProbability.requires_model());
    }

    #[test]
    fn overlap_is_half_open() {
        let a = RuleMatch::new("A", 0, 5);
        assert!(a.overlaps(&RuleMatch::new("B", 4, 6)));
        assert!(!a.overlaps(&RuleMatch::new("B", 5, 6)));
        assert!(RuleMatch::new("B", 2, 3).overlaps(&a));
    }

    struct Named(&'static str);

    impl Rule for Named {
        fn id(&self) -> &str {
            self.0
        }

        fn check(&self, _sentence: &str) -> Vec<RuleMatch> {
            Vec::new()
        }
    }

    struct Factory;

    impl RuleFactory for Factory {
        fn create(
            &self,
            spec: &RuleSpec,
            _ctx: &RuleContext<'_>,
        ) -> Result<Box<dyn Rule>, LanguageError> {
            if spec.id == "BROKEN" {
                return Err(LanguageError::rule_construction(spec.id, "no data"));
            }
            Ok(Box::new(Named(spec.id)))
        }
    }

    #[test]
    fn build_rules_keeps_order_and_stops_on_error() {
        let catalog = StaticCatalog::new("es");
        let user = UserConfig::default();
        let ctx = RuleContext {
            language: LanguageTag::new("es"),
            config: RuleConfig::new(&catalog, &user),
            model: None,
        };
        let specs = [
            RuleSpec::new("B", RuleKind::WordRepeat),
            RuleSpec::new("A", RuleKind::QuestionMark),
        ];
        let rules = build_rules(&Factory, &specs, &ctx).unwrap();
        let ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["B", "A"]);
        assert_eq!(rules[0].category(), DEFAULT_CATEGORY);

        let specs = [
            RuleSpec::new("A", RuleKind::QuestionMark),
            RuleSpec::new("BROKEN", RuleKind::SimpleReplace),
        ];
        let err = build_rules(&Factory, &specs, &ctx).unwrap_err();
        assert!(matches!(err, LanguageError::RuleConstruction { ref rule_id, .. } if rule_id == "BROKEN"));
    }
}
