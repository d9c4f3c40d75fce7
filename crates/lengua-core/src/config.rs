// User configuration passed through to rule factories

use hashbrown::HashMap;
use serde::Deserialize;

use crate::error::LanguageError;

/// Per-user settings consumed by rules.
///
/// Profiles do not interpret these values; they hand them to the rule
/// factory unchanged on every rule-list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Words the user has added to their personal dictionary.
    pub user_words: Vec<String>,

    /// Maximum number of spelling suggestions to offer. 0 means no limit.
    pub max_spelling_suggestions: usize,

    /// Configured integer values keyed by rule id (e.g. maximum sentence
    /// length for `TOO_LONG_SENTENCE`).
    pub rule_values: HashMap<String, i64>,
}

impl UserConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LanguageError> {
        serde_json::from_str(json).map_err(LanguageError::UserConfig)
    }

    /// The user's configured value for `rule_id`, if any.
    pub fn rule_value(&self, rule_id: &str) -> Option<i64> {
        self.rule_values.get(rule_id).copied()
    }

    /// Return whether `word` is in the user dictionary.
    pub fn accepts_word(&self, word: &str) -> bool {
        self.user_words.iter().any(|w| w == word)
    }
}
