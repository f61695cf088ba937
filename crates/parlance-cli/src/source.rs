//! Catalogs stored as JSON files.
//!
//! A catalog file holds a tag and a list of translations:
//!
//! ```json
//! {
//!   "tag": "en",
//!   "translations": [
//!     { "id": "greeting", "string": "Hello, %(name)s!" },
//!     {
//!       "id": "minutes",
//!       "plural_id": "%d minutes",
//!       "string": "%d minute",
//!       "plurals": { "one": "%d minute", "other": "%d minutes" }
//!     }
//!   ]
//! }
//! ```

use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use parlance::{LanguageTag, LocaleCatalog, Translation, TranslationSource};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogFileError {
    /// The file could not be read.
    #[error("cannot read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a valid catalog.
    #[error("invalid catalog {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        content: String,
        #[source]
        source: serde_json::Error,
    },

    /// A catalog directory has no file for the tag.
    #[error("no catalog for '{tag}' in {}", .dir.display())]
    NotFound { dir: PathBuf, tag: String },
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tag: String,
    #[serde(default)]
    translations: Vec<Translation>,
}

/// A [`TranslationSource`] reading JSON catalog files.
///
/// The path is either a single catalog file, used for every locale, or a
/// directory holding `<tag>.json` files. In a directory the full tag is
/// tried first, then the language alone, so `en.json` serves `en-US`.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The catalog file to read for `tag`.
    fn resolve(&self, tag: &LanguageTag) -> Result<PathBuf, CatalogFileError> {
        if !self.path.is_dir() {
            return Ok(self.path.clone());
        }
        [tag.to_string(), tag.id.language.to_string()]
            .iter()
            .map(|name| self.path.join(format!("{name}.json")))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| CatalogFileError::NotFound {
                dir: self.path.clone(),
                tag: tag.to_string(),
            })
    }
}

impl TranslationSource for JsonCatalogSource {
    type Error = CatalogFileError;

    fn get_translations(&self, tag: &LanguageTag) -> Result<LocaleCatalog, Self::Error> {
        let path = self.resolve(tag)?;
        debug!(path = %path.display(), "reading catalog");
        read_catalog(&path)
    }
}

/// Read and parse one catalog file.
pub fn read_catalog(path: &Path) -> Result<LocaleCatalog, CatalogFileError> {
    let content = read_to_string(path).map_err(|source| CatalogFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match serde_json::from_str::<CatalogFile>(&content) {
        Ok(file) => Ok(LocaleCatalog::from_translations(file.tag, file.translations)),
        Err(source) => Err(CatalogFileError::Json {
            path: path.to_path_buf(),
            content,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, write};

    use parlance::PluralForm;
    use tempfile::{tempdir, NamedTempFile};

    use super::*;

    const EN: &str = r#"{
        "tag": "en",
        "translations": [
            { "id": "test", "string": "testXlate" },
            {
                "id": "plural-minutes",
                "plural_id": "%d minutes",
                "string": "%d minute",
                "plurals": { "one": "%d minute", "other": "%d minutes" }
            }
        ]
    }"#;

    fn tag(tag: &str) -> LanguageTag {
        tag.parse().unwrap()
    }

    #[test]
    fn reads_single_file() {
        let file = NamedTempFile::new().unwrap();
        write(file.path(), EN).unwrap();

        let catalog = JsonCatalogSource::new(file.path())
            .get_translations(&tag("en"))
            .unwrap();

        assert_eq!(catalog.tag, "en");
        assert_eq!(catalog.keys(), vec!["%d minutes", "test"]);
        let minutes = catalog.get("%d minutes").unwrap();
        assert_eq!(minutes.select(PluralForm::One), "%d minute");
    }

    #[test]
    fn directory_falls_back_to_language_file() {
        let dir = tempdir().unwrap();
        write(dir.path().join("en.json"), EN).unwrap();

        let catalog = JsonCatalogSource::new(dir.path())
            .get_translations(&tag("en-US"))
            .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn directory_prefers_full_tag() {
        let dir = tempdir().unwrap();
        write(dir.path().join("en.json"), EN).unwrap();
        write(
            dir.path().join("en-GB.json"),
            r#"{ "tag": "en-GB", "translations": [] }"#,
        )
        .unwrap();

        let catalog = JsonCatalogSource::new(dir.path())
            .get_translations(&tag("en-GB"))
            .unwrap();
        assert_eq!(catalog.tag, "en-GB");
        assert!(catalog.is_empty());
    }

    #[test]
    fn directory_without_matching_file_is_not_found() {
        let dir = tempdir().unwrap();
        create_dir(dir.path().join("nested")).unwrap();

        let err = JsonCatalogSource::new(dir.path())
            .get_translations(&tag("fr"))
            .unwrap_err();
        assert!(matches!(err, CatalogFileError::NotFound { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = read_catalog(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogFileError::Io { .. }));
    }

    #[test]
    fn malformed_json_keeps_content_and_position() {
        let file = NamedTempFile::new().unwrap();
        write(file.path(), "{\n  \"tag\": \"en\",\n  \"translations\": [\n    { \"string\": \"x\" }\n  ]\n}").unwrap();

        match read_catalog(file.path()).unwrap_err() {
            CatalogFileError::Json {
                content, source, ..
            } => {
                assert!(content.contains("translations"));
                assert_eq!(source.line(), 4);
            }
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }
}
