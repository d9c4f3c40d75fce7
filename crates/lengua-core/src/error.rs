// Error type for language-profile operations

use std::io;
use std::path::PathBuf;

/// Errors surfaced by language profiles and their collaborators.
///
/// None of these are retried internally; the caller decides whether to retry,
/// skip the affected rule, or abort the session. Unknown rule identifiers are
/// never an error (they resolve to the default priority) and typography
/// normalization cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    /// The language model at `location` could not be opened.
    #[error("failed to load language model from {}: {source}", location.display())]
    ModelLoad {
        location: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Closing a previously loaded language model failed.
    #[error("failed to close language model: {0}")]
    ModelClose(#[source] io::Error),

    /// The profile has no language-model loader configured.
    #[error("no language model loader is configured for this profile")]
    ModelUnavailable,

    /// A rule factory refused to construct a declared rule.
    #[error("failed to construct rule {rule_id}: {reason}")]
    RuleConstruction { rule_id: String, reason: String },

    /// A message catalog could not be parsed.
    #[error("malformed message catalog for locale {locale}: {source}")]
    MessageCatalog {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// A user configuration document could not be parsed.
    #[error("malformed user configuration: {0}")]
    UserConfig(#[source] serde_json::Error),

    /// A language tag did not have the `xx` or `xx-YY` form.
    #[error("invalid language tag: {0:?}")]
    InvalidLanguageTag(String),
}

impl LanguageError {
    /// Convenience constructor for factory implementations.
    pub fn rule_construction(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RuleConstruction {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }
}
