//! verity CLI - format checks from the command line
//!
//! ```text
//! verity check uuid-v4 57b73598-8764-4ad0-a76a-679bb6640eb1
//! verity isbn --version 13 978-4-87311-368-5
//! verity range 7 10 5
//! verity path --exists /etc/hosts
//! verity list
//! ```
//!
//! Exit status is 0 when every value is valid, 1 when any is not and 2 on
//! usage or I/O errors.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod output;

use output::{Output, Report};

/// Check strings against well-known formats
#[derive(Parser)]
#[command(name = "verity")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log filter for stderr, e.g. `debug` or `verity_validator=trace`
    #[arg(long, global = true, env = "VERITY_LOG", default_value = "warn")]
    log_level: String,

    /// Report format
    #[arg(long, global = true, value_enum, env = "VERITY_OUTPUT", default_value_t = Output::Text)]
    output: Output,

    /// Shorthand for `--output json`
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check values against a named format
    Check(commands::check::CheckArgs),

    /// Check ISBN-10 / ISBN-13 check digits
    Isbn(commands::isbn::IsbnArgs),

    /// Check that a number lies between two bounds (either order)
    Range(commands::range::RangeArgs),

    /// Classify absolute Windows/Unix paths
    Path(commands::path::PathArgs),

    /// List every format name accepted by `check`
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("error: {e:#}");
        return ExitCode::from(2);
    }

    let output = if cli.json { Output::Json } else { cli.output };

    match run(cli.command, output) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs a command and prints its report. `Ok(true)` means everything passed.
fn run(command: Commands, output: Output) -> anyhow::Result<bool> {
    let report: Report = match command {
        Commands::Check(args) => commands::check::execute(&args),
        Commands::Isbn(args) => commands::isbn::execute(&args),
        Commands::Range(args) => commands::range::execute(&args),
        Commands::Path(args) => commands::path::execute(&args)?,
        Commands::List => {
            commands::list::execute(output)?;
            return Ok(true);
        }
    };

    report.print(output)?;
    Ok(report.all_valid())
}
