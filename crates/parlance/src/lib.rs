//! Runtime message translation.
//!
//! A [`Locale`] pairs a language tag with CLDR-backed plural rules, number
//! and date formatting, and a catalog of [`Translation`]s loaded from any
//! [`TranslationSource`]. Templates use printf-style directives plus named
//! placeholders of the form `%(name)verb`.
//!
//! ```
//! use parlance::{LocaleCatalog, MemorySource, Translation, params};
//!
//! let locale = parlance::new_locale("en").unwrap();
//! let source = MemorySource::new().with_catalog(LocaleCatalog::from_translations(
//!     "en",
//!     [Translation::builder().id("welcome").string("Welcome, %(user)s!").build()],
//! ));
//! locale.load(&source).unwrap();
//!
//! let printer = locale.new_printer();
//! assert_eq!(printer.sprintf_named("welcome", &params! { "user" => "ada" }), "Welcome, ada!");
//! ```

pub mod catalog;
mod error;
pub mod facilities;
pub mod format;
mod locale;
mod printer;
pub mod registry;
pub mod types;

pub use catalog::{
    CatalogWarning, LocaleCatalog, MemorySource, MissingCatalog, Translation, TranslationSource,
    check_catalog,
};
pub use error::{Facility, LoadError, UnsupportedLocaleError};
pub use facilities::DateLength;
pub use format::{Rewritten, named_parameters, rewrite_named, rewrite_named_with, sprintf};
pub use icu_locale_core::Locale as LanguageTag;
pub use icu_plurals::PluralOperands;
pub use locale::Locale;
pub use printer::Printer;
pub use registry::{LocaleRegistry, get_locale, new_locale};
pub use types::{FmtParams, PluralForm, Value};

/// Creates a [`FmtParams`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, booleans
/// and strings can be passed directly.
///
/// # Example
///
/// ```
/// use parlance::params;
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::FmtParams::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::FmtParams::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
