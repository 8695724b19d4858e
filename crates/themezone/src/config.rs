//! Runtime configuration for `themezone`.
//!
//! [`Config`] is the resolved form of every runtime option, independent of
//! whether it came from a flag or an environment variable. Tests construct
//! it directly.

use std::io::IsTerminal;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use theme_state::PREFERENCES_FILE;

use crate::catalog::CatalogSource;
use crate::cli::Cli;

/// Log file name inside the state directory.
pub const LOG_FILE: &str = "themezone.log";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory for the preference file and logs.
    pub state_dir: PathBuf,

    /// Explicit log file for interactive sessions.
    pub log_file: Option<PathBuf>,

    /// Catalog file; `None` uses the bundled catalog.
    pub catalog: Option<PathBuf>,

    /// Color output mode.
    pub color_mode: ColorMode,

    /// Whether to use the alternate screen.
    pub alt_screen: bool,

    /// Whether running in headless self-check mode.
    pub self_check: bool,

    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            log_file: None,
            catalog: None,
            color_mode: ColorMode::Auto,
            alt_screen: true,
            self_check: false,
            verbosity: 0,
        }
    }
}

/// Platform config directory joined with `themezone`, or `.themezone` in
/// the working directory when the platform has none.
#[must_use]
pub fn default_state_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".themezone"), |dir| dir.join("themezone"))
}

impl Config {
    /// Create config from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let color_mode = if cli.force_color {
            ColorMode::Always
        } else if cli.no_color {
            ColorMode::Never
        } else {
            ColorMode::Auto
        };

        Self {
            state_dir: cli.state_dir.clone().unwrap_or_else(default_state_dir),
            log_file: cli.log_file.clone(),
            catalog: cli.catalog.clone(),
            color_mode,
            alt_screen: !cli.no_alt_screen,
            self_check: cli.self_check,
            verbosity: cli.verbose,
        }
    }

    /// Whether styled output should be produced on stdout.
    #[must_use]
    pub fn use_color(&self) -> bool {
        match self.color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }

    /// Where the preference file lives.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.state_dir.join(PREFERENCES_FILE)
    }

    /// Where interactive sessions log.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.state_dir.join(LOG_FILE))
    }

    /// Catalog source for this run.
    #[must_use]
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from_path(self.catalog.as_deref())
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file is missing or the state
    /// directory path names something other than a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.catalog
            && !path.is_file()
        {
            return Err(ConfigError::CatalogNotFound(path.clone()));
        }

        if self.state_dir.exists() && !self.state_dir.is_dir() {
            return Err(ConfigError::StateDirNotDirectory(self.state_dir.clone()));
        }

        Ok(())
    }

    /// Export configuration as a diagnostic string.
    #[must_use]
    pub fn to_diagnostic_string(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("State dir: {}", self.state_dir.display()));
        lines.push(format!("Preferences: {}", self.preferences_path().display()));
        lines.push(format!("Log file: {}", self.log_path().display()));
        match self.catalog {
            Some(ref path) => lines.push(format!("Catalog: {}", path.display())),
            None => lines.push("Catalog: bundled".to_string()),
        }
        lines.push(format!("Color mode: {:?}", self.color_mode));
        lines.push(format!(
            "Alt screen: {}",
            if self.alt_screen { "on" } else { "off" }
        ));
        lines.push(format!("Self-check: {}", self.self_check));
        lines.push(format!("Verbosity: {}", self.verbosity));

        lines.join("\n")
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Configuration error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Catalog file not found.
    #[error("Catalog file not found: {0}")]
    CatalogNotFound(PathBuf),

    /// State directory path is a file.
    #[error("State directory is not a directory: {0}")]
    StateDirNotDirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["themezone"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn from_cli_maps_flags() {
        let config = Config::from_cli(&cli(&[
            "--state-dir",
            "/tmp/tz",
            "--no-alt-screen",
            "--no-color",
            "-v",
        ]));
        assert_eq!(config.state_dir, PathBuf::from("/tmp/tz"));
        assert!(!config.alt_screen);
        assert_eq!(config.color_mode, ColorMode::Never);
        assert_eq!(config.verbosity, 1);
        assert!(!config.use_color());
    }

    #[test]
    fn paths_derive_from_state_dir() {
        let config = Config {
            state_dir: PathBuf::from("/var/tz"),
            ..Config::default()
        };
        assert_eq!(config.preferences_path(), PathBuf::from("/var/tz/preferences.json"));
        assert_eq!(config.log_path(), PathBuf::from("/var/tz/themezone.log"));

        let config = Config {
            log_file: Some(PathBuf::from("/tmp/x.log")),
            ..config
        };
        assert_eq!(config.log_path(), PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn always_enables_color() {
        let config = Config {
            color_mode: ColorMode::Always,
            ..Config::default()
        };
        assert!(config.use_color());
    }

    #[test]
    fn validate_rejects_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            state_dir: dir.path().to_path_buf(),
            catalog: Some(dir.path().join("missing.json")),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::CatalogNotFound(_))));
    }

    #[test]
    fn validate_rejects_file_as_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();
        let config = Config {
            state_dir: file,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("State directory is not a directory"));
    }

    #[test]
    fn validate_accepts_missing_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            state_dir: dir.path().join("created-later"),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn diagnostic_string_covers_fields() {
        let config = Config {
            state_dir: PathBuf::from("/var/tz"),
            ..Config::default()
        };
        let text = config.to_diagnostic_string();
        assert!(text.contains("State dir: /var/tz"));
        assert!(text.contains("Preferences: /var/tz/preferences.json"));
        assert!(text.contains("Catalog: bundled"));
        assert!(text.contains("Verbosity: 0"));
    }

    #[test]
    fn config_json_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
