//! Language-profile contracts for the Lengua grammar checker.
//!
//! A language profile declares which rules are active for a language, how
//! competing rule matches are prioritized, and how rendered text is rewritten
//! into locale-correct typography. Tokenizers, taggers, spellers and the rules
//! themselves are external collaborators reached through the traits defined
//! here.
//!
//! # Architecture
//!
//! - [`priority`] -- Priority table, base fallback and resolver
//! - [`typography`] -- Ordered rewrite cascade for quotation marks
//! - [`model`] -- Lazily loaded, shared language-model handle
//! - [`rule`] -- Rule declarations, factories and matches
//! - [`language`] -- The `Language` profile trait and identity types
//! - [`ranking`] -- Ordering and overlap suppression of rule matches
//! - [`config`] -- User configuration
//! - [`messages`] -- Localized message catalogs
//! - [`error`] -- Error type shared by all profile operations

pub mod config;
pub mod error;
pub mod language;
pub mod messages;
pub mod model;
pub mod priority;
pub mod ranking;
pub mod rule;
pub mod typography;

pub use error::LanguageError;
pub use language::Language;
pub use priority::Priority;
