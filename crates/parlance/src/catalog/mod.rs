//! Translation catalogs and the sources that supply them.

mod check;
mod source;
mod translation;

pub use check::{CatalogWarning, check_catalog};
pub use source::{LocaleCatalog, MemorySource, MissingCatalog, TranslationSource};
pub use translation::Translation;
