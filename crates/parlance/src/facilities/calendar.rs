//! Locale-aware date rendering backed by `icu_datetime`.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use icu_calendar::Date;
use icu_datetime::DateTimeFormatter;
use icu_datetime::fieldsets::YMD;
use icu_locale_core::Locale as LanguageTag;

use crate::error::{Facility, UnsupportedLocaleError};

/// How much detail a formatted date carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateLength {
    /// Numeric, e.g. "1/15/24".
    Short,
    /// Abbreviated month, e.g. "Jan 15, 2024".
    #[default]
    Medium,
    /// Full month name, e.g. "January 15, 2024".
    Long,
}

/// Year-month-day formatters for one locale.
pub struct Calendar {
    short: DateTimeFormatter<YMD>,
    medium: DateTimeFormatter<YMD>,
    long: DateTimeFormatter<YMD>,
}

impl Calendar {
    /// Load date formatting data for `tag`.
    pub fn try_new(tag: &LanguageTag) -> Result<Self, UnsupportedLocaleError> {
        let build = |fields: YMD| {
            DateTimeFormatter::try_new(tag.clone().into(), fields)
                .map_err(|e| UnsupportedLocaleError::missing_data(tag, Facility::Calendar, e))
        };
        Ok(Self {
            short: build(YMD::short())?,
            medium: build(YMD::medium())?,
            long: build(YMD::long())?,
        })
    }

    /// Format an ISO calendar date.
    ///
    /// Returns `None` if `year`, `month` and `day` do not form a valid date.
    pub fn format_date(&self, year: i32, month: u8, day: u8, length: DateLength) -> Option<String> {
        let date = Date::try_new_iso(year, month, day).ok()?;
        let formatter = match length {
            DateLength::Short => &self.short,
            DateLength::Medium => &self.medium,
            DateLength::Long => &self.long,
        };
        Some(formatter.format(&date).to_string())
    }
}

impl Debug for Calendar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Calendar").finish_non_exhaustive()
    }
}
