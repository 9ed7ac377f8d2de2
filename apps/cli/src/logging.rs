//! stderr logging setup.

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `directives` (`EnvFilter` syntax).
pub fn init(directives: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log filter `{directives}`"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
