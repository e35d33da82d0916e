// src/log.rs
// Logging setup. Library code only uses `tracing` macros; the binary calls `init` once.
//
// Filter precedence: RUST_LOG, else `-v` count (warn, info, debug, trace) for this
// crate and warn for dependencies. Timestamps are elapsed time since start.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use crate::error::{Error, Result};

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,bgg_rank={}", default_level(verbosity)))
    })
}

/// Install the global subscriber: stderr, or append to `log_file` without colors.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_timer(Uptime::default())
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                crate::file::ensure_directory(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| Error::Config(format!("cannot install logger: {e}")))
}
