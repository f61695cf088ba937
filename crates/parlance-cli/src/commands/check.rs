//! Implementation of the `parlance check` command.

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use parlance::CatalogWarning;
use serde::Serialize;

use super::LocaleArgs;
use crate::output::table::format_warning_table;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Exit with non-zero code if any warning is found
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for check results.
#[derive(Debug, Serialize)]
struct CheckJson<'a> {
    locale: String,
    entries: usize,
    warnings: &'a [CatalogWarning],
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let locale = args.locale.open()?;
    let warnings = locale.check_catalog();
    let entries = locale.catalog().len();

    if args.json {
        let output = CheckJson {
            locale: locale.tag().to_string(),
            entries,
            warnings: &warnings,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else if warnings.is_empty() {
        println!(
            "{} {} entries checked for {}",
            "ok".if_supports_color(Stream::Stdout, OwoColorize::green),
            entries,
            locale.tag()
        );
    } else {
        println!("{}", format_warning_table(&warnings));
        println!(
            "\n{} {} across {} entries in {}",
            "warnings:".if_supports_color(Stream::Stdout, OwoColorize::yellow),
            warnings.len(),
            entries,
            locale.tag()
        );
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
