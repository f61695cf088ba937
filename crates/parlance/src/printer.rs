use crate::facilities::DateLength;
use crate::format::{render, rewrite_named};
use crate::locale::Locale;
use crate::types::{FmtParams, Value};

/// Formats translated messages with one locale's conventions.
///
/// A printer borrows its locale, so catalog loads made through the locale
/// are visible to every printer created from it.
#[derive(Debug, Clone, Copy)]
pub struct Printer<'a> {
    locale: &'a Locale,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(locale: &'a Locale) -> Self {
        Self { locale }
    }

    /// The locale this printer formats for.
    pub fn locale(&self) -> &'a Locale {
        self.locale
    }

    /// Translate `id` and render it with positional `args`.
    ///
    /// When `id` is untranslated it is used as the format string itself.
    ///
    /// # Example
    ///
    /// ```
    /// use parlance::{Locale, Value};
    ///
    /// let locale = Locale::new("de").unwrap();
    /// let printer = locale.new_printer();
    /// assert_eq!(printer.sprintf("%d Dateien", &[Value::from(1500)]), "1.500 Dateien");
    /// ```
    pub fn sprintf(&self, id: &str, args: &[Value]) -> String {
        let template = self.locale.get(id);
        render(&template, args, self.locale.number())
    }

    /// Translate `id` and render it with named parameters.
    pub fn sprintf_named(&self, id: &str, params: &FmtParams) -> String {
        let template = self.locale.get(id);
        rewrite_named(&template, params).render(self.locale.number())
    }

    /// Format a number with the locale's separators.
    pub fn format_number(&self, value: impl Into<Value>) -> String {
        self.locale.number().format(&value.into())
    }

    /// Format an ISO calendar date, or `None` if the date is invalid.
    pub fn format_date(&self, year: i32, month: u8, day: u8, length: DateLength) -> Option<String> {
        self.locale.calendar().format_date(year, month, day, length)
    }
}
