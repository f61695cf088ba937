//! Miette diagnostic wrapper for malformed catalog files.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::error::Category;
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a catalog file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid catalog: {message}")]
#[diagnostic(code(parlance::catalog))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic from a JSON error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let line = err.line().max(1);
        let column = err.column().max(1);

        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line - 1)
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + (column - 1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        let help = match err.classify() {
            Category::Data => Some(
                "each translation needs an \"id\"; \"string\", \"plural_id\" and \"plurals\" are optional"
                    .to_string(),
            ),
            Category::Eof => Some("the file ends before the catalog is complete".to_string()),
            Category::Io | Category::Syntax => None,
        };

        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }
}
