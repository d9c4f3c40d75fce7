// Localized rule messages

use hashbrown::HashMap;

use crate::error::LanguageError;

/// Source of localized messages, keyed by message id.
pub trait MessageCatalog: Send + Sync {
    /// Locale of the messages, e.g. `es`.
    fn locale(&self) -> &str;

    /// Look up a message. `None` if the catalog has no such key.
    fn get(&self, key: &str) -> Option<&str>;
}

/// In-memory catalog, typically parsed from a flat JSON object.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl StaticCatalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Parse a catalog from a JSON object of string keys to string messages.
    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, LanguageError> {
        let locale = locale.into();
        let entries = serde_json::from_str(json).map_err(|source| {
            LanguageError::MessageCatalog {
                locale: locale.clone(),
                source,
            }
        })?;
        Ok(Self { locale, entries })
    }

    /// Add or replace a message.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageCatalog for StaticCatalog {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_lookup() {
        let catalog = StaticCatalog::from_json(
            "es",
            r#"{"desc_comma_whitespace": "Uso de espacios y comas"}"#,
        )
        .unwrap();
        assert_eq!(catalog.locale(), "es");
        assert_eq!(
            catalog.get("desc_comma_whitespace"),
            Some("Uso de espacios y comas")
        );
        assert_eq!(catalog.get("missing"), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn malformed_catalog_names_locale() {
        let err = StaticCatalog::from_json("es", "[1, 2]").unwrap_err();
        match err {
            LanguageError::MessageCatalog { locale, .. } => assert_eq!(locale, "es"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn insert_replaces() {
        let mut catalog = StaticCatalog::new("es");
        assert!(catalog.is_empty());
        catalog.insert("k", "uno");
        catalog.insert("k", "dos");
        assert_eq!(catalog.get("k"), Some("dos"));
    }
}
