//! Process-wide locale storage.
//!
//! Locales are created once per canonical tag and shared behind an `Arc`, so
//! a catalog loaded through one handle is visible through every other.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard};

use tracing::debug;

use crate::error::UnsupportedLocaleError;
use crate::locale::{Locale, parse_tag};

/// A map from canonical locale tag to shared [`Locale`].
///
/// Tags are canonicalized before lookup, so `"EN-us"` and `"en-US"` name the
/// same entry. Entries are never removed.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    locales: RwLock<HashMap<String, Arc<Locale>>>,
}

impl LocaleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registered locale for `tag`, if any.
    ///
    /// Returns `None` for tags that do not parse.
    pub fn get(&self, tag: &str) -> Option<Arc<Locale>> {
        let key = parse_tag(tag).ok()?.to_string();
        self.read().get(&key).cloned()
    }

    /// The registered locale for `tag`, creating it on first use.
    ///
    /// Concurrent callers with the same tag all receive the same instance;
    /// the locale is constructed at most once.
    pub fn get_or_create(&self, tag: &str) -> Result<Arc<Locale>, UnsupportedLocaleError> {
        let parsed = parse_tag(tag)?;
        let key = parsed.to_string();
        if let Some(locale) = self.read().get(&key) {
            return Ok(Arc::clone(locale));
        }

        let mut locales = self.locales.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(locale) = locales.get(&key) {
            return Ok(Arc::clone(locale));
        }
        let locale = Arc::new(Locale::from_tag(parsed)?);
        debug!(tag = %key, "created locale");
        locales.insert(key, Arc::clone(&locale));
        Ok(locale)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.read().keys().cloned().collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Locale>>> {
        self.locales.read().unwrap_or_else(PoisonError::into_inner)
    }
}

static GLOBAL_REGISTRY: LazyLock<LocaleRegistry> = LazyLock::new(LocaleRegistry::new);

/// The registry behind [`new_locale`] and [`get_locale`].
pub fn global() -> &'static LocaleRegistry {
    &GLOBAL_REGISTRY
}

/// The shared locale for `tag`, created on first use.
///
/// Every call with an equivalent tag returns the same instance.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// let a = parlance::new_locale("en-US").unwrap();
/// let b = parlance::new_locale("en-us").unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn new_locale(tag: &str) -> Result<Arc<Locale>, UnsupportedLocaleError> {
    global().get_or_create(tag)
}

/// The shared locale for `tag`, if [`new_locale`] has created it.
pub fn get_locale(tag: &str) -> Option<Arc<Locale>> {
    global().get(tag)
}
