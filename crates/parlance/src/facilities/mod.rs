//! Per-locale formatting facilities derived from a language tag.

mod calendar;
mod number;
mod plural;

pub use calendar::{Calendar, DateLength};
pub use number::NumberFormat;
pub use plural::{PluralClassifier, is_supported_language, parse_operands};
