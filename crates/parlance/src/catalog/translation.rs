use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::PluralForm;

/// A translated message, optionally with plural variants.
///
/// Plain messages are looked up by `id`. Messages with plural variants are
/// looked up by `plural_id`, and `string` is used whenever the selected
/// category has no entry in `plurals`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use parlance::{PluralForm, Translation};
///
/// let minutes = Translation::builder()
///     .id("minutes")
///     .string("%d minute")
///     .plural_id("%d minutes".to_string())
///     .plurals(BTreeMap::from([
///         (PluralForm::One, "%d minute".to_string()),
///         (PluralForm::Other, "%d minutes".to_string()),
///     ]))
///     .build();
///
/// assert_eq!(minutes.lookup_key(), "%d minutes");
/// assert_eq!(minutes.select(PluralForm::Other), "%d minutes");
/// assert_eq!(minutes.select(PluralForm::Few), "%d minute");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct Translation {
    /// Message identifier.
    pub id: String,

    /// Default rendering, also the fallback for missing plural categories.
    #[builder(default)]
    #[serde(default)]
    pub string: String,

    /// Catalog key for messages with plural variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural_id: Option<String>,

    /// Plural category to rendering.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plurals: BTreeMap<PluralForm, String>,
}

impl Translation {
    /// The key this translation is stored under in a catalog.
    pub fn lookup_key(&self) -> &str {
        self.plural_id.as_deref().unwrap_or(&self.id)
    }

    /// Whether this translation carries plural variants.
    pub fn is_plural(&self) -> bool {
        !self.plurals.is_empty()
    }

    /// The template for `form`, falling back to `string`.
    pub fn select(&self, form: PluralForm) -> &str {
        self.plurals.get(&form).map_or(self.string.as_str(), String::as_str)
    }
}
