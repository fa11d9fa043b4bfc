use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Nothing is installed; the TUI owns the terminal
    Discard,
}

impl LogTarget {
    /// Interactive sessions never log to the terminal
    pub fn for_mode(interactive: bool, log_file: Option<PathBuf>) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }
}

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "tmsearch=debug"
    } else {
        "tmsearch=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(verbose).into())
}

pub fn init_tracing(verbose: bool, target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Discard => Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install tracing subscriber"),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(env_filter(verbose))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install tracing subscriber")
        }
    }
}
