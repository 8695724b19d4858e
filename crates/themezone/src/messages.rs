//! Message taxonomy and routes.

use crossterm::event::KeyEvent;
use theme_state::ThemeState;

use crate::catalog::Product;

/// Messages delivered to the application model.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// The theme authority published a new state.
    ThemeChanged(ThemeState),
    /// The catalog finished loading.
    CatalogLoaded(Result<Vec<Product>, String>),
    /// The simulated contact submission completed.
    ContactSent,
    /// Stop the program.
    Quit,
}

/// Available pages in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Hero, features and featured products.
    #[default]
    Home,
    /// Platform, features and team.
    About,
    /// Contact form, details and FAQ.
    Contact,
}

impl Page {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Route path, used to mark the active navigation entry.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    /// Page for a route path.
    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        Self::all().into_iter().find(|page| page.route() == route)
    }

    /// Keyboard shortcut (1-3).
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Home => '1',
            Self::About => '2',
            Self::Contact => '3',
        }
    }

    /// Page from a keyboard shortcut.
    #[must_use]
    pub const fn from_shortcut(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Home),
            '2' => Some(Self::About),
            '3' => Some(Self::Contact),
            _ => None,
        }
    }

    /// All pages in navigation order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Home, Self::About, Self::Contact]
    }

    /// Navigation icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::About => "@",
            Self::Contact => "✉",
        }
    }
}
