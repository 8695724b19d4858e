//! The three presentation modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A presentation mode.
///
/// The set is closed: every value that reaches the authority is one of these
/// three, and anything read from outside (storage, CLI, selection controls)
/// is parsed through [`FromStr`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Minimalist presentation with a top header.
    #[default]
    Light,
    /// Dark presentation with a collapsible side panel.
    Dark,
    /// Colorful grid presentation with a top header.
    Colorful,
}

impl Mode {
    /// All modes in selector order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Light, Self::Dark, Self::Colorful]
    }

    /// The persisted name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Colorful => "colorful",
        }
    }

    /// Root presentation class for non-reactive styling layers.
    ///
    /// Light is the unmarked base presentation.
    #[must_use]
    pub const fn root_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "theme-dark",
            Self::Colorful => "theme-colorful",
        }
    }

    /// Position of this mode in [`Mode::all`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
            Self::Colorful => 2,
        }
    }

    /// Mode at `index` in [`Mode::all`], if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Light),
            1 => Some(Self::Dark),
            2 => Some(Self::Colorful),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    /// Parses an exact, lowercase mode name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "colorful" => Ok(Self::Colorful),
            other => Err(ThemeError::InvalidMode(other.to_string())),
        }
    }
}
