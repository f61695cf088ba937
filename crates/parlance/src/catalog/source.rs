use std::collections::HashMap;
use std::error::Error as StdError;

use icu_locale_core::Locale as LanguageTag;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Translation;

/// The translations for one locale, keyed by message ID or plural ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleCatalog {
    /// Locale tag the translations were written for. Empty means unspecified.
    #[serde(default)]
    pub tag: String,

    /// Lookup key to translation.
    #[serde(default)]
    pub translations: HashMap<String, Translation>,
}

impl LocaleCatalog {
    /// Create an empty catalog.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            translations: HashMap::new(),
        }
    }

    /// Create a catalog with each translation keyed by its lookup key.
    pub fn from_translations(
        tag: impl Into<String>,
        translations: impl IntoIterator<Item = Translation>,
    ) -> Self {
        let mut catalog = Self::new(tag);
        for translation in translations {
            catalog.insert(translation);
        }
        catalog
    }

    /// Insert `translation` under its lookup key, returning any entry it replaced.
    pub fn insert(&mut self, translation: Translation) -> Option<Translation> {
        self.translations
            .insert(translation.lookup_key().to_string(), translation)
    }

    /// Look up a translation by message ID or plural ID.
    pub fn get(&self, key: &str) -> Option<&Translation> {
        self.translations.get(key)
    }

    /// Whether `key` has a translation.
    pub fn contains(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// All lookup keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Supplies the catalog for a locale.
///
/// Implementations may read files, query a service, or return data built in
/// memory. The call is made synchronously from
/// [`Locale::load`](crate::Locale::load); any error is reported to the caller
/// as [`LoadError::Source`](crate::LoadError::Source).
pub trait TranslationSource {
    /// Error reported when no catalog can be produced.
    type Error: StdError + Send + Sync + 'static;

    /// Produce the catalog for `tag`.
    fn get_translations(&self, tag: &LanguageTag) -> Result<LocaleCatalog, Self::Error>;
}

/// No catalog is registered for the requested tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no catalog for locale '{tag}'")]
pub struct MissingCatalog {
    pub tag: String,
}

/// A [`TranslationSource`] holding catalogs in memory.
///
/// Catalogs are matched by full tag first, then by language alone, so an
/// `"en"` catalog serves `en-US` and `en-GB` locales.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    catalogs: HashMap<String, LocaleCatalog>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `catalog`, replacing any catalog with the same tag.
    pub fn insert(&mut self, catalog: LocaleCatalog) {
        let key = catalog
            .tag
            .parse::<LanguageTag>()
            .map_or_else(|_| catalog.tag.clone(), |tag| tag.to_string());
        self.catalogs.insert(key, catalog);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_catalog(mut self, catalog: LocaleCatalog) -> Self {
        self.insert(catalog);
        self
    }
}

impl TranslationSource for MemorySource {
    type Error = MissingCatalog;

    fn get_translations(&self, tag: &LanguageTag) -> Result<LocaleCatalog, Self::Error> {
        self.catalogs
            .get(&tag.to_string())
            .or_else(|| self.catalogs.get(tag.id.language.as_str()))
            .cloned()
            .ok_or_else(|| MissingCatalog {
                tag: tag.to_string(),
            })
    }
}
