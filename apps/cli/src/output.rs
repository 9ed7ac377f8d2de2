//! Report rows and their text/JSON rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// One aligned line per value
    Text,
    /// A JSON array of rows
    Json,
}

/// Outcome for one input value.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub format: String,
    pub value: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Row {
    pub fn new(format: impl Into<String>, value: impl Into<String>, valid: bool) -> Self {
        Self {
            format: format.into(),
            value: value.into(),
            valid,
            detail: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Debug, Default)]
pub struct Report {
    rows: Vec<Row>,
}

impl Report {
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn all_valid(&self) -> bool {
        self.rows.iter().all(|row| row.valid)
    }

    pub fn print(&self, output: Output) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write(&mut out, output)?;
        out.flush()?;
        Ok(())
    }

    pub(crate) fn write(&self, out: &mut impl Write, output: Output) -> anyhow::Result<()> {
        match output {
            Output::Json => {
                serde_json::to_writer_pretty(&mut *out, &self.rows)?;
                writeln!(out)?;
            }
            Output::Text => {
                for row in &self.rows {
                    let status = if row.valid { "ok" } else { "invalid" };
                    match &row.detail {
                        Some(detail) => writeln!(out, "{status:<8}{}\t{detail}", row.value)?,
                        None => writeln!(out, "{status:<8}{}", row.value)?,
                    }
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<Row> for Report {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
