//! Locale management for translations.
//!
//! The Locale struct is the user-facing API: it binds a language tag to its
//! formatting facilities and catalog, and renders messages.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::{Arc, PoisonError, RwLock};

use icu_locale_core::Locale as LanguageTag;
use icu_plurals::PluralOperands;
use tracing::{debug, info, warn};

use crate::catalog::{CatalogWarning, LocaleCatalog, TranslationSource, check_catalog};
use crate::error::{LoadError, UnsupportedLocaleError};
use crate::facilities::{Calendar, NumberFormat, PluralClassifier, is_supported_language};
use crate::format::{rewrite_named, rewrite_named_with};
use crate::printer::Printer;
use crate::types::{FmtParams, Value};

/// A language tag with its formatting facilities and translations.
///
/// Lookups never fail: a message missing from the catalog renders as its own
/// ID, so output stays readable before any catalog is loaded. Loading swaps
/// the whole catalog at once; concurrent lookups see either the old or the
/// new one.
///
/// # Example
///
/// ```
/// use parlance::{Locale, LocaleCatalog, MemorySource, Translation};
///
/// let locale = Locale::new("en").unwrap();
/// assert_eq!(locale.get("greeting"), "greeting");
///
/// let source = MemorySource::new().with_catalog(LocaleCatalog::from_translations(
///     "en",
///     [Translation::builder().id("greeting").string("Hello!").build()],
/// ));
/// locale.load(&source).unwrap();
/// assert_eq!(locale.get("greeting"), "Hello!");
/// ```
pub struct Locale {
    tag: LanguageTag,
    calendar: Calendar,
    number: NumberFormat,
    plural: PluralClassifier,

    /// Current catalog, swapped whole by `load`.
    catalog: RwLock<Arc<LocaleCatalog>>,
}

impl Locale {
    /// Create a locale for `tag`, e.g. `"en"`, `"de-AT"` or `"pt-BR"`.
    ///
    /// The locale starts with an empty catalog. This does not register the
    /// locale anywhere; use [`new_locale`](crate::new_locale) for the shared
    /// instance.
    pub fn new(tag: &str) -> Result<Self, UnsupportedLocaleError> {
        Self::from_tag(parse_tag(tag)?)
    }

    /// Create a locale from an already parsed tag.
    pub fn from_tag(tag: LanguageTag) -> Result<Self, UnsupportedLocaleError> {
        let language = tag.id.language.as_str();
        if !is_supported_language(language) {
            return Err(UnsupportedLocaleError::UnknownLanguage {
                tag: tag.to_string(),
                language: language.to_string(),
            });
        }

        let plural = PluralClassifier::try_new(&tag)?;
        let number = NumberFormat::try_new(&tag)?;
        let calendar = Calendar::try_new(&tag)?;
        let catalog = LocaleCatalog::new(tag.to_string());

        Ok(Self {
            tag,
            calendar,
            number,
            plural,
            catalog: RwLock::new(Arc::new(catalog)),
        })
    }

    // =========================================================================
    // Facilities
    // =========================================================================

    /// The canonical language tag.
    pub fn tag(&self) -> &LanguageTag {
        &self.tag
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn number(&self) -> &NumberFormat {
        &self.number
    }

    pub fn plural(&self) -> &PluralClassifier {
        &self.plural
    }

    /// A snapshot of the current catalog.
    ///
    /// The snapshot is unaffected by later loads.
    pub fn catalog(&self) -> Arc<LocaleCatalog> {
        Arc::clone(&self.catalog.read().unwrap_or_else(PoisonError::into_inner))
    }

    // =========================================================================
    // Translation Loading
    // =========================================================================

    /// Load the catalog for this locale from `source`.
    ///
    /// Loading **replaces** the previous catalog in full; entries are never
    /// merged. A catalog tagged for another language is rejected. On error
    /// the previous catalog stays in place. Returns the number of entries
    /// loaded.
    pub fn load<S>(&self, source: &S) -> Result<usize, LoadError>
    where
        S: TranslationSource + ?Sized,
    {
        let catalog = source.get_translations(&self.tag).map_err(|e| {
            warn!(tag = %self.tag, error = %e, "translation source failed");
            LoadError::Source {
                tag: self.tag.to_string(),
                source: Box::new(e),
            }
        })?;
        self.check_catalog_tag(&catalog)?;

        let count = catalog.len();
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(catalog);
        info!(tag = %self.tag, count, "loaded translations");
        Ok(count)
    }

    /// Accept catalogs that are untagged or tagged for this language.
    fn check_catalog_tag(&self, catalog: &LocaleCatalog) -> Result<(), LoadError> {
        if catalog.tag.is_empty() {
            return Ok(());
        }
        let same_language = catalog
            .tag
            .parse::<LanguageTag>()
            .is_ok_and(|found| found.id.language == self.tag.id.language);
        if same_language {
            Ok(())
        } else {
            Err(LoadError::TagMismatch {
                expected: self.tag.to_string(),
                found: catalog.tag.clone(),
            })
        }
    }

    /// Check the current catalog against this locale's plural rules.
    pub fn check_catalog(&self) -> Vec<CatalogWarning> {
        check_catalog(&self.catalog(), &self.plural)
    }

    // =========================================================================
    // Message Rendering
    // =========================================================================

    /// The translated string for `id`, or `id` itself when untranslated.
    ///
    /// An entry's string is returned as stored, even when empty.
    pub fn get(&self, id: &str) -> String {
        self.lookup(id).unwrap_or_else(|| id.to_string())
    }

    /// Translate `id` and substitute named parameters into the result.
    ///
    /// When `id` is untranslated it is used as the template itself. Numbers
    /// are rendered with this locale's digits.
    pub fn render(&self, id: &str, params: &FmtParams) -> String {
        let template = self.get(id);
        rewrite_named(&template, params).render(&self.number)
    }

    /// Resolve a plural message.
    ///
    /// `count` selects the plural category and `display` is the number shown,
    /// available to the template as its first positional argument (`%d`).
    /// Named `params` are substituted as well. When `plural_id` is not in the
    /// catalog it is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use parlance::{Locale, LocaleCatalog, MemorySource, PluralForm, Translation, params};
    ///
    /// let locale = Locale::new("en").unwrap();
    /// let files = Translation::builder()
    ///     .id("files")
    ///     .string("%d file in %(dir)s")
    ///     .plural_id("%d files in %(dir)s".to_string())
    ///     .plurals(BTreeMap::from([
    ///         (PluralForm::One, "%d file in %(dir)s".to_string()),
    ///         (PluralForm::Other, "%d files in %(dir)s".to_string()),
    ///     ]))
    ///     .build();
    /// locale
    ///     .load(&MemorySource::new().with_catalog(LocaleCatalog::from_translations("en", [files])))
    ///     .unwrap();
    ///
    /// let out = locale.get_plural("%d files in %(dir)s", 1200, 1200, &params! { "dir" => "src" });
    /// assert_eq!(out, "1,200 files in src");
    /// ```
    pub fn get_plural(
        &self,
        plural_id: &str,
        count: impl Into<PluralOperands>,
        display: impl Into<Value>,
        params: &FmtParams,
    ) -> String {
        let catalog = self.catalog();
        let Some(translation) = catalog.get(plural_id) else {
            debug!(tag = %self.tag, plural_id, "no plural translation");
            return plural_id.to_string();
        };

        let form = self.plural.classify(count);
        let template = translation.select(form);
        rewrite_named_with(template, params, vec![display.into()]).render(&self.number)
    }

    /// A printer bound to this locale.
    pub fn new_printer(&self) -> Printer<'_> {
        Printer::new(self)
    }

    /// The catalog string for `id`.
    fn lookup(&self, id: &str) -> Option<String> {
        let catalog = self.catalog();
        let translation = catalog.get(id);
        if translation.is_none() {
            debug!(tag = %self.tag, id, "no translation");
        }
        translation.map(|translation| translation.string.clone())
    }
}

impl Debug for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Locale")
            .field("tag", &self.tag.to_string())
            .field("translations", &self.catalog().len())
            .finish_non_exhaustive()
    }
}

/// Parse and canonicalize a locale tag.
pub(crate) fn parse_tag(tag: &str) -> Result<LanguageTag, UnsupportedLocaleError> {
    tag.parse::<LanguageTag>()
        .map_err(|source| UnsupportedLocaleError::InvalidTag {
            tag: tag.to_string(),
            source,
        })
}
