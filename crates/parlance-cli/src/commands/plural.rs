//! Implementation of the `parlance plural` command.

use miette::miette;
use parlance::facilities::parse_operands;

use super::{param_value, parse_param, print_result, to_params, LocaleArgs};

/// Arguments for the plural command.
#[derive(Debug, clap::Args)]
pub struct PluralArgs {
    /// Plural ID to look up
    pub plural_id: String,

    /// Quantity that selects the plural form (e.g., 1, 21, 1.5)
    #[arg(long, required = true, allow_hyphen_values = true)]
    pub count: String,

    /// Number shown in the message; defaults to the count
    #[arg(long, allow_hyphen_values = true)]
    pub display: Option<String>,

    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> miette::Result<i32> {
    let operands = parse_operands(&args.count)
        .ok_or_else(|| miette!("invalid count '{}': expected a decimal number", args.count))?;
    let display = param_value(args.display.unwrap_or_else(|| args.count.clone()));

    let locale = args.locale.open()?;
    let params = to_params(args.params);
    let result = locale.get_plural(&args.plural_id, operands, display, &params);
    print_result(result, args.json)?;
    Ok(exitcode::OK)
}
