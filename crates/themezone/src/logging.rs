//! Tracing subscriber setup.
//!
//! The interactive front-end owns the terminal, so it logs to a file.
//! Subcommands log to stderr. `THEMEZONE_LOG` overrides the level derived
//! from `-v`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "THEMEZONE_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(PathBuf),
}

/// Logging setup failure.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be opened.
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global subscriber is already installed.
    #[error("cannot install log subscriber: {0}")]
    Install(String),
}

/// Default level for a `-v` count.
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter from `THEMEZONE_LOG`, falling back to the verbosity level.
#[must_use]
pub fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

fn open_log(path: &Path) -> Result<File, LoggingError> {
    let open_err = |source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(target: &LogTarget, verbosity: u8) -> Result<(), LoggingError> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(verbosity));
    let result = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(|err| LoggingError::Install(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn open_log_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("themezone.log");
        open_log(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_log_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let err = open_log(&blocker.join("themezone.log")).unwrap_err();
        assert!(err.to_string().contains("blocker"));
    }
}
