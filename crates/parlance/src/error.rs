//! Error types for locale construction and catalog loading.
//!
//! Rendering never produces errors: missing translations, unknown
//! placeholders and unusable directives fall back to visible text instead.

use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};

use icu_locale_core::ParseError;
use thiserror::Error;

/// The locale facility whose data failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facility {
    Calendar,
    Number,
    Plural,
}

impl Display for Facility {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Facility::Calendar => "calendar",
            Facility::Number => "number",
            Facility::Plural => "plural",
        })
    }
}

/// A locale tag that cannot be resolved to formatting facilities.
#[derive(Debug, Error)]
pub enum UnsupportedLocaleError {
    /// The tag is not a well-formed BCP 47 locale identifier.
    #[error("invalid locale tag '{tag}': {source}")]
    InvalidTag {
        tag: String,
        #[source]
        source: ParseError,
    },

    /// The tag parses but names a language without plural rules.
    #[error("unsupported locale '{tag}': no rules for language '{language}'")]
    UnknownLanguage { tag: String, language: String },

    /// Formatting data for the tag could not be constructed.
    #[error("unsupported locale '{tag}': failed to load {facility} data: {message}")]
    MissingData {
        tag: String,
        facility: Facility,
        message: String,
    },
}

impl UnsupportedLocaleError {
    pub(crate) fn missing_data(tag: impl Display, facility: Facility, cause: impl Display) -> Self {
        UnsupportedLocaleError::MissingData {
            tag: tag.to_string(),
            facility,
            message: cause.to_string(),
        }
    }
}

/// Errors that occur while loading a catalog into a locale.
///
/// The locale keeps its previous catalog when a load fails.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The translation source reported an error.
    #[error("failed to load translations for '{tag}': {source}")]
    Source {
        tag: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The source returned a catalog for a different language.
    #[error("catalog for '{found}' cannot be loaded into locale '{expected}'")]
    TagMismatch { expected: String, found: String },
}
