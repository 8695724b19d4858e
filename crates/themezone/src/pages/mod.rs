//! Page models.
//!
//! Each page implements [`PageModel`] so the app can delegate updates and
//! rendering to whichever page is active.

mod about;
mod contact;
mod home;

pub use about::AboutPage;
pub use contact::{ContactPage, Field};
pub use home::{HomePage, featured_limit, max_columns};

use crate::catalog::CatalogState;
use crate::messages::{Msg, Page};
use crate::program::Cmd;
use crate::theme::Palette;

/// Shared inputs for rendering a page.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// Palette of the mode being drawn.
    pub palette: &'a Palette,
    /// Current catalog state.
    pub catalog: &'a CatalogState,
}

/// A routable page.
pub trait PageModel {
    /// Handle a message, returning an optional command.
    fn update(&mut self, msg: &Msg) -> Option<Cmd>;

    /// Render the page into `width` cells.
    fn view(&self, width: usize, ctx: &ViewContext<'_>) -> Vec<String>;

    /// The page identifier.
    fn page(&self) -> Page;

    /// Key hints for the footer.
    fn hints(&self) -> &'static str {
        ""
    }

    /// Whether the page wants every key (text entry).
    fn captures_input(&self) -> bool {
        false
    }

    /// Called when navigating away.
    fn on_leave(&mut self) {}
}

/// Container for all page models.
#[derive(Debug, Default)]
pub struct Pages {
    pub home: HomePage,
    pub about: AboutPage,
    pub contact: ContactPage,
}

impl Pages {
    /// The page model for `page`.
    pub fn get(&self, page: Page) -> &dyn PageModel {
        match page {
            Page::Home => &self.home,
            Page::About => &self.about,
            Page::Contact => &self.contact,
        }
    }

    /// Mutable page model for `page`.
    pub fn get_mut(&mut self, page: Page) -> &mut dyn PageModel {
        match page {
            Page::Home => &mut self.home,
            Page::About => &mut self.about,
            Page::Contact => &mut self.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_route_by_identifier() {
        let pages = Pages::default();
        for page in Page::all() {
            assert_eq!(pages.get(page).page(), page);
        }
    }
}
