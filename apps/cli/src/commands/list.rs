use std::io::{self, Write};

use verity_validator::format::Format;

use crate::output::Output;

pub fn execute(output: Output) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(&mut out, output)?;
    out.flush()?;
    Ok(())
}

fn write(out: &mut impl Write, output: Output) -> anyhow::Result<()> {
    match output {
        Output::Json => {
            serde_json::to_writer_pretty(&mut *out, Format::ALL.as_slice())?;
            writeln!(out)?;
        }
        Output::Text => {
            for format in Format::ALL {
                writeln!(out, "{format}")?;
            }
        }
    }
    Ok(())
}
