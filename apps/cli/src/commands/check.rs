use clap::Args;
use verity_validator::format::Format;

use crate::output::{Report, Row};

#[derive(Args)]
pub struct CheckArgs {
    /// Format name (see `verity list`)
    pub format: Format,

    /// Values to check
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

pub fn execute(args: &CheckArgs) -> Report {
    tracing::debug!(format = %args.format, count = args.values.len(), "checking values");

    args.values
        .iter()
        .map(|value| Row::new(args.format.name(), value.as_str(), args.format.check(value)))
        .collect()
}
