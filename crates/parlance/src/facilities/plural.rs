//! CLDR plural category resolution.
//!
//! Different languages have different plural rules: English has "one" and
//! "other", Russian has "one", "few", "many" and "other", and Arabic uses all
//! six categories. Each locale owns one classifier built from ICU4X compiled
//! data.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use icu_decimal::input::Decimal;
use icu_locale_core::Locale as LanguageTag;
use icu_plurals::{PluralOperands, PluralRuleType, PluralRules};

use crate::error::{Facility, UnsupportedLocaleError};
use crate::types::PluralForm;

/// Language codes with plural, number and calendar support.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bg", "bn", "ca", "cs", "da", "de", "el", "en", "es", "et", "fa", "fi", "fr", "he", "hi",
    "hr", "hu", "id", "it", "ja", "ko", "lt", "lv", "ms", "nb", "nl", "pl", "pt", "ro", "ru", "sk",
    "sl", "sr", "sv", "ta", "th", "tr", "uk", "ur", "vi", "zh",
];

/// Returns true if locales for `language` can be constructed.
pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

/// Plural operands for a decimal string such as `"1"`, `"1.0"` or `"-2.50"`.
///
/// Visible fraction digits are kept, so `"1.0"` and `"1"` can select
/// different categories.
pub fn parse_operands(decimal: &str) -> Option<PluralOperands> {
    let decimal = Decimal::try_from_str(decimal).ok()?;
    Some(PluralOperands::from(&decimal))
}

/// Maps quantities to plural categories for one locale.
///
/// # Example
///
/// ```
/// use parlance::facilities::PluralClassifier;
/// use parlance::{LanguageTag, PluralForm};
///
/// let ru: LanguageTag = "ru".parse().unwrap();
/// let classifier = PluralClassifier::try_new(&ru).unwrap();
/// assert_eq!(classifier.classify(1), PluralForm::One);
/// assert_eq!(classifier.classify(2), PluralForm::Few);
/// assert_eq!(classifier.classify(5), PluralForm::Many);
/// ```
pub struct PluralClassifier {
    rules: PluralRules,
}

impl PluralClassifier {
    /// Build the cardinal plural rules for `tag`.
    pub fn try_new(tag: &LanguageTag) -> Result<Self, UnsupportedLocaleError> {
        let rules = PluralRules::try_new(tag.clone().into(), PluralRuleType::Cardinal.into())
            .map_err(|e| UnsupportedLocaleError::missing_data(tag, Facility::Plural, e))?;
        Ok(Self { rules })
    }

    /// The plural category for `n`.
    ///
    /// Accepts integers as well as [`PluralOperands`] from
    /// [`parse_operands`], so `"1.0"` can classify differently from `1`.
    pub fn classify(&self, n: impl Into<PluralOperands>) -> PluralForm {
        self.rules.category_for(n).into()
    }

    /// The categories this locale can produce, in CLDR order.
    pub fn forms(&self) -> Vec<PluralForm> {
        let mut forms: Vec<PluralForm> = self.rules.categories().map(PluralForm::from).collect();
        forms.sort();
        forms
    }
}

impl Debug for PluralClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PluralClassifier")
            .field("forms", &self.forms())
            .finish()
    }
}
