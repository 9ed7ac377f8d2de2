use clap::Args;
use verity_validator::is::{self, IsbnVersion};

use crate::output::{Report, Row};

#[derive(Args)]
#[command(disable_version_flag = true)]
pub struct IsbnArgs {
    /// `10`, `13` or `any`
    #[arg(long, default_value_t = IsbnVersion::Either)]
    pub version: IsbnVersion,

    /// Values to check; spaces and hyphens are ignored
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn execute(args: &IsbnArgs) -> Report {
    let format = match args.version {
        IsbnVersion::V10 => "isbn10",
        IsbnVersion::V13 => "isbn13",
        IsbnVersion::Either => "isbn",
    };

    args.values
        .iter()
        .map(|value| Row::new(format, value.as_str(), is::isbn(value, args.version)))
        .collect()
}
