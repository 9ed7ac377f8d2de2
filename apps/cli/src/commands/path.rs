use anyhow::Context;
use clap::Args;
use verity_validator::is::{self, PathKind};

use crate::output::{Report, Row};

#[derive(Args)]
pub struct PathArgs {
    /// Also require that the path exists on this machine
    #[arg(long)]
    pub exists: bool,

    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn execute(args: &PathArgs) -> anyhow::Result<Report> {
    args.values
        .iter()
        .map(|value| {
            let (valid, kind) = is::file_path(value);
            if !args.exists || kind == PathKind::Unknown {
                return Ok(Row::new("file-path", value.as_str(), valid).with_detail(kind.to_string()));
            }

            let found = is::exists(value).with_context(|| format!("cannot stat `{value}`"))?;
            let detail = format!("{kind}, {}", if found { "exists" } else { "missing" });
            Ok(Row::new("file-path", value.as_str(), valid && found).with_detail(detail))
        })
        .collect()
}
