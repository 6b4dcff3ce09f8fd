//! Logging setup
//!
//! Logging is off unless `QSS_LOG` holds an `EnvFilter` directive such as
//! `debug` or `qss::player=trace`. The interactive player owns the
//! terminal, so it logs to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "QSS_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file for the interactive player.
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("qss")
        .join("qss.log")
}

/// Install the global subscriber if `QSS_LOG` is set.
///
/// Returns whether a subscriber was installed.
pub fn init_logging(target: LogTarget) -> Result<bool> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(false);
    };
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid {} filter '{}'", LOG_ENV, directives))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match target {
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!(e))?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!(e))?
        }
    }
    Ok(true)
}
