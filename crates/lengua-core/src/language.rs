// Language profile trait and identity types

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::error::LanguageError;
use crate::model::LanguageModel;
use crate::priority::{DEFAULT_PRIORITY, Priority};
use crate::rule::{Rule, RuleConfig};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Language code with an optional region qualifier, e.g. `es` or `es-MX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageTag {
    pub code: String,
    pub country: Option<String>,
}

impl LanguageTag {
    /// Tag without a region qualifier.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            country: None,
        }
    }

    /// Tag for `code` in `country`. An empty country means no qualifier.
    pub fn with_country(code: impl Into<String>, country: &str) -> Self {
        Self {
            code: code.into(),
            country: (!country.is_empty()).then(|| country.to_string()),
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}-{}", self.code, country),
            None => f.write_str(&self.code),
        }
    }
}

impl FromStr for LanguageTag {
    type Err = LanguageError;

    /// Accepts `xx`, `xx-YY` and `xx_YY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LanguageError::InvalidLanguageTag(s.to_string());
        let mut parts = s.split(['-', '_']);
        let code = parts.next().filter(|c| is_alpha_of_len(c, 2, 3)).ok_or_else(invalid)?;
        let country = match parts.next() {
            Some(c) if is_alpha_of_len(c, 2, 2) => Some(c.to_ascii_uppercase()),
            Some(_) => return Err(invalid()),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self {
            code: code.to_ascii_lowercase(),
            country,
        })
    }
}

fn is_alpha_of_len(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Someone who maintains a language profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contributor {
    pub name: &'static str,
    pub url: Option<&'static str>,
}

impl Contributor {
    pub const fn new(name: &'static str) -> Self {
        Self { name, url: None }
    }

    pub const fn with_url(name: &'static str, url: &'static str) -> Self {
        Self {
            name,
            url: Some(url),
        }
    }
}

/// Maintenance status of a language profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaintainedState {
    ActivelyMaintained,
    LookingForNewMaintainer,
}

// ---------------------------------------------------------------------------
// Component wiring
// ---------------------------------------------------------------------------

/// How sentences are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentenceTokenizerKind {
    /// Segmentation rules in SRX format, selected by language code.
    Srx,
    /// Split on terminal punctuation only.
    Simple,
}

/// Identifiers of the linguistic components a profile wires together.
///
/// The components are implemented elsewhere; a profile only selects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentSelection {
    pub word_tokenizer: &'static str,
    pub sentence_tokenizer: SentenceTokenizerKind,
    pub tagger: &'static str,
    pub disambiguator: &'static str,
    pub synthesizer: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// A supported language or variant and its wired-up components.
///
/// Default methods give the base behaviour shared by all languages.
pub trait Language: Send + Sync {
    /// Display name, e.g. `Spanish`.
    fn name(&self) -> &str;

    /// Two-letter code, e.g. `es`.
    fn short_code(&self) -> &str;

    /// Supported region codes in preference order; `""` means no qualifier.
    fn countries(&self) -> &[&'static str];

    fn maintainers(&self) -> &[Contributor];

    fn maintained_state(&self) -> MaintainedState {
        MaintainedState::LookingForNewMaintainer
    }

    fn components(&self) -> ComponentSelection;

    /// Tags for every supported region.
    fn variants(&self) -> Vec<LanguageTag> {
        self.countries()
            .iter()
            .map(|country| LanguageTag::with_country(self.short_code(), country))
            .collect()
    }

    /// Construct the active rules, in declaration order.
    fn relevant_rules(&self, config: &RuleConfig<'_>) -> Result<Vec<Box<dyn Rule>>, LanguageError>;

    /// Construct the rules that need a language model, in declaration order.
    fn relevant_model_rules(
        &self,
        _model: Arc<dyn LanguageModel>,
        _config: &RuleConfig<'_>,
    ) -> Result<Vec<Box<dyn Rule>>, LanguageError> {
        Ok(Vec::new())
    }

    /// Priority of a rule or category id. Unknown ids resolve to the base
    /// default.
    fn priority_of(&self, rule_id: &str) -> Priority;

    /// Priority of a rule, falling back to its category when the rule has none.
    fn rule_priority(&self, rule_id: &str, category_id: &str) -> Priority {
        match self.priority_of(rule_id) {
            DEFAULT_PRIORITY => self.priority_of(category_id),
            p => p,
        }
    }

    fn opening_quote(&self) -> &str {
        "\u{201C}"
    }

    fn closing_quote(&self) -> &str {
        "\u{201D}"
    }

    /// Rewrite straight quotes and apostrophes into the language's typography.
    fn to_advanced_typography(&self, input: &str) -> String {
        input.to_string()
    }

    /// The shared language model, loaded from `location` on first use.
    fn language_model(&self, _location: &Path) -> Result<Arc<dyn LanguageModel>, LanguageError> {
        Err(LanguageError::ModelUnavailable)
    }

    /// Close the shared language model if one was loaded.
    fn release_language_model(&self) -> Result<(), LanguageError> {
        Ok(())
    }
}
