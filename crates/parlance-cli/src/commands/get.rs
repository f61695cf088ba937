//! Implementation of the `parlance get` command.

use super::{parse_param, print_result, to_params, LocaleArgs};

/// Arguments for the get command.
#[derive(Debug, clap::Args)]
pub struct GetArgs {
    /// Message ID to look up
    pub id: String,

    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the get command.
pub fn run_get(args: GetArgs) -> miette::Result<i32> {
    let locale = args.locale.open()?;
    let params = to_params(args.params);
    let result = locale.new_printer().sprintf_named(&args.id, &params);
    print_result(result, args.json)?;
    Ok(exitcode::OK)
}
