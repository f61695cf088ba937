//! Static checks over a loaded catalog.
//!
//! Detects plural entries that cannot be resolved the way their authors
//! expect: missing plural IDs, entries stored under the wrong key, missing
//! `other` variants, variants for categories the locale never selects, and
//! variants whose placeholders drift from the default string.

use serde::Serialize;
use thiserror::Error;

use super::{LocaleCatalog, Translation};
use crate::facilities::PluralClassifier;
use crate::format::placeholder_names;
use crate::types::PluralForm;

/// A problem found in a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    /// Entry has plural variants but no plural ID to look them up by.
    #[error("'{key}': has plural variants but no plural_id")]
    MissingPluralId { key: String },

    /// Entry is stored under a key other than its lookup key.
    #[error("'{key}': stored under the wrong key, expected '{expected}'")]
    KeyMismatch { key: String, expected: String },

    /// Plural entry without an `other` variant.
    #[error("'{key}': no 'other' variant")]
    MissingOtherForm { key: String },

    /// Variant for a category the locale never selects.
    #[error("'{key}': variant '{form}' is never selected by this locale")]
    UnusedPluralForm { key: String, form: PluralForm },

    /// Variant whose named placeholders differ from the default string's.
    #[error("'{key}': variant '{form}' uses placeholders {found:?}, default string uses {expected:?}")]
    PlaceholderMismatch {
        key: String,
        form: PluralForm,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl CatalogWarning {
    /// The catalog key of the offending entry.
    pub fn key(&self) -> &str {
        match self {
            CatalogWarning::MissingPluralId { key }
            | CatalogWarning::KeyMismatch { key, .. }
            | CatalogWarning::MissingOtherForm { key }
            | CatalogWarning::UnusedPluralForm { key, .. }
            | CatalogWarning::PlaceholderMismatch { key, .. } => key,
        }
    }

    /// Short name of the warning, matching its serialized `kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogWarning::MissingPluralId { .. } => "missing_plural_id",
            CatalogWarning::KeyMismatch { .. } => "key_mismatch",
            CatalogWarning::MissingOtherForm { .. } => "missing_other_form",
            CatalogWarning::UnusedPluralForm { .. } => "unused_plural_form",
            CatalogWarning::PlaceholderMismatch { .. } => "placeholder_mismatch",
        }
    }
}

/// Check every entry of `catalog` against the locale's plural rules.
///
/// Warnings are ordered by catalog key.
pub fn check_catalog(catalog: &LocaleCatalog, plural: &PluralClassifier) -> Vec<CatalogWarning> {
    let forms = plural.forms();
    let mut warnings = Vec::new();
    for key in catalog.keys() {
        let Some(translation) = catalog.get(key) else {
            continue;
        };
        check_plural_id(key, translation, &mut warnings);
        check_key(key, translation, &mut warnings);
        check_other_form(key, translation, &mut warnings);
        check_unused_forms(key, translation, &forms, &mut warnings);
        check_placeholders(key, translation, &mut warnings);
    }
    warnings
}

fn check_plural_id(key: &str, translation: &Translation, warnings: &mut Vec<CatalogWarning>) {
    if translation.is_plural() && translation.plural_id.is_none() {
        warnings.push(CatalogWarning::MissingPluralId {
            key: key.to_string(),
        });
    }
}

fn check_key(key: &str, translation: &Translation, warnings: &mut Vec<CatalogWarning>) {
    let expected = translation.lookup_key();
    if key != expected {
        warnings.push(CatalogWarning::KeyMismatch {
            key: key.to_string(),
            expected: expected.to_string(),
        });
    }
}

fn check_other_form(key: &str, translation: &Translation, warnings: &mut Vec<CatalogWarning>) {
    if translation.is_plural() && !translation.plurals.contains_key(&PluralForm::Other) {
        warnings.push(CatalogWarning::MissingOtherForm {
            key: key.to_string(),
        });
    }
}

fn check_unused_forms(
    key: &str,
    translation: &Translation,
    forms: &[PluralForm],
    warnings: &mut Vec<CatalogWarning>,
) {
    for form in translation.plurals.keys() {
        if !forms.contains(form) {
            warnings.push(CatalogWarning::UnusedPluralForm {
                key: key.to_string(),
                form: *form,
            });
        }
    }
}

fn check_placeholders(key: &str, translation: &Translation, warnings: &mut Vec<CatalogWarning>) {
    let expected = distinct_names(&translation.string);
    for (form, text) in &translation.plurals {
        let found = distinct_names(text);
        if found != expected {
            warnings.push(CatalogWarning::PlaceholderMismatch {
                key: key.to_string(),
                form: *form,
                expected: expected.clone(),
                found,
            });
        }
    }
}

/// Sorted, deduplicated placeholder names.
fn distinct_names(template: &str) -> Vec<String> {
    let mut names: Vec<String> = placeholder_names(template)
        .into_iter()
        .map(str::to_string)
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}
