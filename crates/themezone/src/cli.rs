//! Command-line interface for `themezone`.
//!
//! # Examples
//!
//! ```bash
//! # Interactive front-end
//! themezone
//!
//! # Read or change the saved theme
//! themezone get
//! themezone set dark
//!
//! # Print one frame without a terminal
//! themezone render --page about --mode colorful --width 100
//!
//! # Render every page in every mode (CI)
//! themezone --self-check
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::messages::Page;

/// ThemeZone - a themeable storefront for the terminal.
///
/// Three presentation modes (minimalist light, dark sidebar and colorful
/// grid) with the choice saved between sessions.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(
    name = "themezone",
    author,
    version,
    about = "ThemeZone - a themeable storefront for the terminal"
)]
pub struct Cli {
    /// Directory holding preferences.json and the log file
    #[arg(long, env = "THEMEZONE_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Log file for interactive sessions
    ///
    /// Defaults to themezone.log in the state directory
    #[arg(long, env = "THEMEZONE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Product catalog JSON file
    ///
    /// Uses the bundled sample catalog when not given
    #[arg(long, env = "THEMEZONE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Force color output off
    ///
    /// Respects `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Force color output on (overrides `NO_COLOR`)
    #[arg(long, conflicts_with = "no_color")]
    pub force_color: bool,

    /// Run in the main terminal buffer
    #[arg(long, env = "THEMEZONE_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,

    /// Render every page in every mode headlessly and exit
    #[arg(long)]
    pub self_check: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the saved theme mode
    Get,

    /// Set and save the theme mode
    Set {
        /// One of light, dark or colorful
        mode: String,
    },

    /// Print a single frame to stdout
    Render(RenderArgs),

    /// Show resolved configuration
    Diagnostics,
}

/// Arguments for the render subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Page to render
    #[arg(long, short = 'p', value_enum, default_value_t = PageArg::Home)]
    pub page: PageArg,

    /// Mode to render in; the saved mode when omitted
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Frame width in cells
    #[arg(long, default_value_t = 100)]
    pub width: u16,

    /// Frame height in rows
    #[arg(long, default_value_t = 40)]
    pub height: u16,
}

/// Page names accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageArg {
    #[default]
    Home,
    About,
    Contact,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Self::Home,
            PageArg::About => Self::About,
            PageArg::Contact => Self::Contact,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Whether the run needs a terminal.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        !self.self_check && self.command.is_none()
    }
}
