//! CLI command implementations.

mod check;
mod get;
mod plural;
mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use miette::{miette, IntoDiagnostic};
use parlance::{FmtParams, LoadError, Locale, Value};
use serde::Serialize;
use tracing::debug;

use crate::output::CatalogDiagnostic;
use crate::source::{CatalogFileError, JsonCatalogSource};

pub use check::{run_check, CheckArgs};
pub use get::{run_get, GetArgs};
pub use plural::{run_plural, PluralArgs};
pub use render::{run_render, RenderArgs};

/// Locale selection shared by commands that read a catalog.
#[derive(Debug, clap::Args)]
pub struct LocaleArgs {
    /// Locale tag (e.g., en, de-AT, pt-BR)
    #[arg(long, env = "PARLANCE_LOCALE", default_value = "en")]
    pub locale: String,

    /// Catalog file, or directory of <tag>.json files
    #[arg(long, env = "PARLANCE_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl LocaleArgs {
    /// Create the locale and load its catalog, if one was given.
    pub fn open(&self) -> miette::Result<Arc<Locale>> {
        let locale = parlance::new_locale(&self.locale).into_diagnostic()?;
        if let Some(path) = &self.catalog {
            load_catalog(&locale, path)?;
        }
        Ok(locale)
    }
}

/// Load `path` into `locale`, turning JSON errors into source diagnostics.
fn load_catalog(locale: &Locale, path: &Path) -> miette::Result<()> {
    match locale.load(&JsonCatalogSource::new(path)) {
        Ok(count) => {
            debug!(count, path = %path.display(), "catalog loaded");
            Ok(())
        }
        Err(LoadError::Source { source, .. }) => match source.downcast_ref::<CatalogFileError>() {
            Some(CatalogFileError::Json {
                path,
                content,
                source,
            }) => Err(CatalogDiagnostic::from_json_error(path, content, source).into()),
            _ => Err(miette!("{source}")),
        },
        Err(e) => Err(e).into_diagnostic(),
    }
}

/// Parse a name=value parameter string.
fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((name.to_string(), value.to_string()))
}

/// Interpret a command-line value as an integer, float, boolean or string.
fn param_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::from(b)
    } else {
        Value::from(raw)
    }
}

/// Convert parsed parameters into named parameters.
fn to_params(params: Vec<(String, String)>) -> FmtParams {
    params
        .into_iter()
        .map(|(name, raw)| (name, param_value(raw)))
        .collect()
}

/// JSON output for rendered messages.
#[derive(Serialize)]
struct RenderResult {
    result: String,
}

/// Print a rendered message as text or JSON.
fn print_result(result: String, json: bool) -> miette::Result<()> {
    if json {
        let output = RenderResult { result };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        println!("{}", result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::NamedTempFile;

    use super::*;

    fn catalog_file(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn open_loads_catalog_file() {
        let file = catalog_file(
            r#"{ "tag": "da", "translations": [{ "id": "hello", "string": "Hej %(name)s" }] }"#,
        );
        let args = LocaleArgs {
            locale: "da".to_string(),
            catalog: Some(file.path().to_path_buf()),
        };

        let locale = args.open().unwrap();
        let params = to_params(vec![("name".to_string(), "Ida".to_string())]);
        assert_eq!(locale.new_printer().sprintf_named("hello", &params), "Hej Ida");
    }

    #[test]
    fn open_reports_json_errors_as_diagnostics() {
        let file = catalog_file("{ \"tag\": \"sv\", \"translations\": [ }");
        let args = LocaleArgs {
            locale: "sv".to_string(),
            catalog: Some(file.path().to_path_buf()),
        };

        let report = args.open().unwrap_err();
        assert!(report.downcast_ref::<CatalogDiagnostic>().is_some());
    }

    #[test]
    fn open_rejects_unknown_locale() {
        let args = LocaleArgs {
            locale: "qq".to_string(),
            catalog: None,
        };
        assert!(args.open().is_err());
    }

    #[test]
    fn parse_param_splits_on_first_equals() {
        assert_eq!(
            parse_param("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn parse_param_requires_equals() {
        assert!(parse_param("name").is_err());
    }

    #[test]
    fn param_values_are_typed() {
        assert_eq!(param_value("12".to_string()), Value::from(12));
        assert_eq!(param_value("2.5".to_string()), Value::from(2.5));
        assert_eq!(param_value("true".to_string()), Value::from(true));
        assert_eq!(param_value("bob".to_string()), Value::from("bob"));
    }
}
