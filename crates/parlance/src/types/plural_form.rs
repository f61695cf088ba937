use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_plurals::PluralCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A CLDR plural category.
///
/// English only produces `One` and `Other`; Russian adds `Few` and `Many`;
/// Arabic uses all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralForm {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralForm {
    /// All categories, in CLDR order.
    pub const ALL: [PluralForm; 6] = [
        PluralForm::Zero,
        PluralForm::One,
        PluralForm::Two,
        PluralForm::Few,
        PluralForm::Many,
        PluralForm::Other,
    ];

    /// The lowercase CLDR keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralForm::Zero => "zero",
            PluralForm::One => "one",
            PluralForm::Two => "two",
            PluralForm::Few => "few",
            PluralForm::Many => "many",
            PluralForm::Other => "other",
        }
    }
}

impl From<PluralCategory> for PluralForm {
    fn from(category: PluralCategory) -> Self {
        match category {
            PluralCategory::Zero => PluralForm::Zero,
            PluralCategory::One => PluralForm::One,
            PluralCategory::Two => PluralForm::Two,
            PluralCategory::Few => PluralForm::Few,
            PluralCategory::Many => PluralForm::Many,
            PluralCategory::Other => PluralForm::Other,
        }
    }
}

impl Display for PluralForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not a CLDR plural keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plural category '{0}'")]
pub struct UnknownPluralForm(pub String);

impl FromStr for PluralForm {
    type Err = UnknownPluralForm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralForm::ALL
            .into_iter()
            .find(|form| form.as_str() == s)
            .ok_or_else(|| UnknownPluralForm(s.to_string()))
    }
}
