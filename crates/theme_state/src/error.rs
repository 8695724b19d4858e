//! Error types for the theme subsystem.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised to callers of the theme authority.
///
/// Only programming-error-class violations surface here. Persistence
/// failures are absorbed by the authority and reported through
/// [`Persistence`](crate::Persistence) and [`Diagnostics`](crate::Diagnostics).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A mode name outside `light`, `dark`, `colorful`.
    #[error("invalid theme mode: {0:?} (expected light, dark or colorful)")]
    InvalidMode(String),
}

/// Errors from a [`PreferenceStore`](crate::PreferenceStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read.
    #[error("failed to read preferences from {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The backing file exists but does not hold a preference map.
    #[error("preferences file {path} is malformed: {source}")]
    Malformed {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The value could not be written.
    #[error("failed to write preferences to {path}: {source}")]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The medium refused the operation (e.g. a store configured as unavailable).
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_mode_names_the_value() {
        let err = ThemeError::InvalidMode("neon".into());
        let msg = err.to_string();
        assert!(msg.contains("invalid theme mode"));
        assert!(msg.contains("neon"));
    }

    #[test]
    fn store_errors_name_the_path() {
        let err = StoreError::Write {
            path: PathBuf::from("/tmp/prefs.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/prefs.json"));

        let err = StoreError::Unavailable("disabled".into());
        assert!(err.to_string().contains("disabled"));
    }
}
