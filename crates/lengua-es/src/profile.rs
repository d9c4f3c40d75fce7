// Spanish: the language profile for Spanish and its regional variants.
//
// The profile owns the priority resolver and the language-model handle. Rule
// objects are built by an injected factory on every request and never cached,
// because each request may carry a different user configuration.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use lengua_core::error::LanguageError;
use lengua_core::language::{
    ComponentSelection, Contributor, Language, LanguageTag, MaintainedState,
    SentenceTokenizerKind,
};
use lengua_core::model::{LanguageModel, LanguageModelHandle, LanguageModelLoader};
use lengua_core::priority::{Priority, PriorityFallback, PriorityResolver};
use lengua_core::rule::{Rule, RuleConfig, RuleContext, RuleFactory, build_rules};

use crate::priorities::{base_priorities, spanish_table};
use crate::rules::{SPANISH_MODEL_RULES, SPANISH_RULES};
use crate::typography;

pub const NAME: &str = "Spanish";
pub const SHORT_CODE: &str = "es";

/// Supported regions. `""` is Spanish without a region qualifier.
pub const COUNTRIES: &[&str] = &[
    "ES", "", "MX", "GT", "CR", "PA", "DO", "VE", "PE", "AR", "EC", "CL", "UY", "PY", "BO", "SV",
    "HN", "NI", "PR", "US", "CU",
];

pub const MAINTAINERS: &[Contributor] = &[
    Contributor::with_url("Juan Martorell", "http://languagetool-es.blogspot.com/"),
    Contributor::new("Jaume Ortolà"),
];

pub const COMPONENTS: ComponentSelection = ComponentSelection {
    word_tokenizer: "es",
    sentence_tokenizer: SentenceTokenizerKind::Srx,
    tagger: "es",
    disambiguator: "es-hybrid",
    synthesizer: Some("es"),
};

/// The Spanish language profile.
///
/// `Spanish` is `Send + Sync`; one instance may serve many checking sessions
/// at once.
pub struct Spanish {
    resolver: PriorityResolver,
    rule_factory: Arc<dyn RuleFactory>,
    model: LanguageModelHandle,
}

impl Spanish {
    /// Create a profile whose rules are built by `rule_factory`.
    ///
    /// The profile has no language-model loader until
    /// [`with_model_loader`](Self::with_model_loader) is called.
    pub fn new(rule_factory: Arc<dyn RuleFactory>) -> Self {
        let resolver = PriorityResolver::new(spanish_table(), Arc::new(base_priorities()));
        log::debug!(
            "{NAME} profile: {} priority overrides, {} rules",
            resolver.table().len(),
            SPANISH_RULES.len() + SPANISH_MODEL_RULES.len()
        );
        Self {
            resolver,
            rule_factory,
            model: LanguageModelHandle::unavailable(),
        }
    }

    /// Load language models with `loader`.
    pub fn with_model_loader(mut self, loader: Arc<dyn LanguageModelLoader>) -> Self {
        self.model = LanguageModelHandle::new(loader);
        self
    }

    /// Replace the base default-priority capability.
    pub fn with_base_priorities(mut self, fallback: Arc<dyn PriorityFallback>) -> Self {
        self.resolver.set_fallback(fallback);
        self
    }

    pub fn resolver(&self) -> &PriorityResolver {
        &self.resolver
    }

    fn context<'a>(
        &self,
        config: &RuleConfig<'a>,
        model: Option<Arc<dyn LanguageModel>>,
    ) -> RuleContext<'a> {
        RuleContext {
            language: LanguageTag::new(SHORT_CODE),
            config: *config,
            model,
        }
    }
}

impl Language for Spanish {
    fn name(&self) -> &str {
        NAME
    }

    fn short_code(&self) -> &str {
        SHORT_CODE
    }

    fn countries(&self) -> &[&'static str] {
        COUNTRIES
    }

    fn maintainers(&self) -> &[Contributor] {
        MAINTAINERS
    }

    fn maintained_state(&self) -> MaintainedState {
        MaintainedState::ActivelyMaintained
    }

    fn components(&self) -> ComponentSelection {
        COMPONENTS
    }

    fn relevant_rules(&self, config: &RuleConfig<'_>) -> Result<Vec<Box<dyn Rule>>, LanguageError> {
        build_rules(
            self.rule_factory.as_ref(),
            SPANISH_RULES,
            &self.context(config, None),
        )
    }

    fn relevant_model_rules(
        &self,
        model: Arc<dyn LanguageModel>,
        config: &RuleConfig<'_>,
    ) -> Result<Vec<Box<dyn Rule>>, LanguageError> {
        build_rules(
            self.rule_factory.as_ref(),
            SPANISH_MODEL_RULES,
            &self.context(config, Some(model)),
        )
    }

    fn priority_of(&self, rule_id: &str) -> Priority {
        self.resolver.priority_of(rule_id)
    }

    fn rule_priority(&self, rule_id: &str, category_id: &str) -> Priority {
        self.resolver.rule_priority(rule_id, category_id)
    }

    fn opening_quote(&self) -> &str {
        typography::OPENING_QUOTE
    }

    fn closing_quote(&self) -> &str {
        typography::CLOSING_QUOTE
    }

    fn to_advanced_typography(&self, input: &str) -> String {
        typography::normalize(input)
    }

    fn language_model(&self, location: &Path) -> Result<Arc<dyn LanguageModel>, LanguageError> {
        self.model.acquire(location)
    }

    fn release_language_model(&self) -> Result<(), LanguageError> {
        self.model.release()
    }
}

impl fmt::Debug for Spanish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spanish")
            .field("resolver", &self.resolver)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lengua_core::config::UserConfig;
    use lengua_core::messages::StaticCatalog;
    use lengua_core::rule::RuleSpec;

    struct NoRules;

    impl RuleFactory for NoRules {
        fn create(
            &self,
            spec: &RuleSpec,
            _ctx: &RuleContext<'_>,
        ) -> Result<Box<dyn Rule>, LanguageError> {
            Err(LanguageError::rule_construction(spec.id, "not available"))
        }
    }

    fn spanish() -> Spanish {
        Spanish::new(Arc::new(NoRules))
    }

    #[test]
    fn identity() {
        let es = spanish();
        assert_eq!(es.name(), "Spanish");
        assert_eq!(es.short_code(), "es");
        assert_eq!(es.countries().len(), 21);
        assert_eq!(es.countries()[0], "ES");
        assert_eq!(es.countries()[1], "");
        assert_eq!(es.maintained_state(), MaintainedState::ActivelyMaintained);
        assert_eq!(es.maintainers()[0].name, "Juan Martorell");
        assert_eq!(es.maintainers()[1].url, None);
    }

    #[test]
    fn variants_include_bare_code() {
        let tags: Vec<String> = spanish().variants().iter().map(|t| t.to_string()).collect();
        assert_eq!(&tags[..3], ["es-ES", "es", "es-MX"]);
        assert_eq!(tags.last().map(String::as_str), Some("es-CU"));
    }

    #[test]
    fn components_are_spanish() {
        let c = spanish().components();
        assert_eq!(c.sentence_tokenizer, SentenceTokenizerKind::Srx);
        assert_eq!(c.disambiguator, "es-hybrid");
        assert_eq!(c.synthesizer, Some("es"));
    }

    #[test]
    fn quotes_are_guillemets() {
        let es = spanish();
        assert_eq!(es.opening_quote(), "«");
        assert_eq!(es.closing_quote(), "»");
        assert_eq!(es.to_advanced_typography("\"x\""), "«x»");
    }

    #[test]
    fn priorities_resolve_through_table_and_base() {
        let es = spanish();
        assert_eq!(es.priority_of("CONFUSIONS2"), 50);
        assert_eq!(es.priority_of("UPPERCASE_SENTENCE_START"), -200);
        assert_eq!(es.priority_of("UNKNOWN_ID_xyz"), 0);
        assert_eq!(es.priority_of("STYLE"), -50);
        assert_eq!(es.rule_priority("SOME_STYLE_RULE", "STYLE"), -50);
        assert_eq!(es.rule_priority("DIACRITICS", "STYLE"), 30);
    }

    #[test]
    fn model_unavailable_without_loader() {
        let es = spanish();
        assert!(matches!(
            es.language_model(Path::new("/ngrams")),
            Err(LanguageError::ModelUnavailable)
        ));
        assert!(es.release_language_model().is_ok());
    }

    #[test]
    fn factory_errors_propagate() {
        let es = spanish();
        let catalog = StaticCatalog::new("es");
        let user = UserConfig::default();
        let err = es
            .relevant_rules(&RuleConfig::new(&catalog, &user))
            .unwrap_err();
        assert!(err.to_string().contains("COMMA_PARENTHESIS_WHITESPACE"));
    }
}
