//! Tracing setup for the console binary.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Logs go to stderr so the
/// board on stdout stays readable, or to `log_file` without ANSI colours.
pub fn init_tracing(default_level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            builder
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("{}", e))
}
