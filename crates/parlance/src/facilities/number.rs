//! Locale-aware number rendering backed by `icu_decimal`.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::slice;

use icu_decimal::DecimalFormatter;
use icu_decimal::input::Decimal;
use icu_locale_core::Locale as LanguageTag;

use crate::error::{Facility, UnsupportedLocaleError};
use crate::format::{NumberStyle, render};
use crate::types::Value;

/// Renders numbers with a locale's grouping and decimal separators.
///
/// Used as the [`NumberStyle`] of a locale's printer, so `%d`, `%v` and `%f`
/// directives pick up the locale's digits.
pub struct NumberFormat {
    formatter: DecimalFormatter,
}

impl NumberFormat {
    /// Load decimal formatting data for `tag`.
    pub fn try_new(tag: &LanguageTag) -> Result<Self, UnsupportedLocaleError> {
        let formatter = DecimalFormatter::try_new(tag.clone().into(), Default::default())
            .map_err(|e| UnsupportedLocaleError::missing_data(tag, Facility::Number, e))?;
        Ok(Self { formatter })
    }

    /// Format an integer, e.g. `1234567` as `"1,234,567"` in English.
    pub fn format_integer(&self, n: i64) -> String {
        self.formatter.format(&Decimal::from(n)).to_string()
    }

    /// Format any value the way `%v` would.
    pub fn format(&self, value: &Value) -> String {
        render("%v", slice::from_ref(value), self)
    }
}

impl NumberStyle for NumberFormat {
    fn digits(&self, digits: &str) -> String {
        match Decimal::try_from_str(digits) {
            Ok(decimal) => self.formatter.format(&decimal).to_string(),
            Err(_) => digits.to_string(),
        }
    }
}

impl Debug for NumberFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("NumberFormat").finish_non_exhaustive()
    }
}
