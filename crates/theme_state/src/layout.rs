//! Mode-dependent navigation layout.

use serde::Serialize;

use crate::mode::Mode;

/// The navigation surface shown by the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationSurface {
    /// Horizontal top header.
    Header,
    /// Vertical side panel.
    Sidebar,
}

impl NavigationSurface {
    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Sidebar => "sidebar",
        }
    }
}

/// Pick the navigation surface for `mode`.
///
/// Dark mode uses the sidebar; light and colorful use the header. Exactly
/// one surface is active at a time.
pub const fn select_navigation_surface(mode: Mode) -> NavigationSurface {
    match mode {
        Mode::Dark => NavigationSurface::Sidebar,
        Mode::Light | Mode::Colorful => NavigationSurface::Header,
    }
}
