use clap::Args;
use verity_validator::foundation::Validate;
use verity_validator::validators::InRange;

use crate::output::{Report, Row};

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct RangeArgs {
    pub value: f64,
    /// One bound; the two may come in either order
    pub left: f64,
    pub right: f64,
}

pub fn execute(args: &RangeArgs) -> Report {
    let range = InRange::new(args.left, args.right);
    let valid = range.is_valid(&args.value);

    std::iter::once(
        Row::new("range", args.value.to_string(), valid)
            .with_detail(format!("[{}, {}]", range.min, range.max)),
    )
    .collect()
}
