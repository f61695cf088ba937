//! Implementation of the `parlance render` command.

use parlance::named_parameters;

use super::{parse_param, print_result, to_params};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Template with %(name)verb placeholders
    #[arg(long, required = true)]
    pub template: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let params = to_params(args.params);
    print_result(named_parameters(&args.template, &params), args.json)?;
    Ok(exitcode::OK)
}
