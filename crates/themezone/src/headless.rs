//! Rendering without a terminal.
//!
//! Used by the `render` subcommand and `--self-check`. Frames are produced
//! by the same [`App`] as the interactive front-end.

use theme_state::{
    MemoryStore, Mode, NavigationSurface, ThemeAuthority, ThemeHandle, select_navigation_surface,
};
use tracing::{debug, info};

use crate::app::App;
use crate::catalog::{CatalogSource, CatalogState};
use crate::content::{about_hero, contact_hero, home_hero};
use crate::messages::Page;
use crate::program::Model;
use crate::text::strip_ansi;

/// Self-check failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelfCheckError {
    /// The frame lacks the page's hero title for the mode.
    #[error("{page} in {mode} mode is missing its title {expected:?}")]
    MissingTitle {
        page: &'static str,
        mode: Mode,
        expected: &'static str,
    },

    /// The frame shows the wrong navigation surface.
    #[error("{page} in {mode} mode should use the {expected} navigation")]
    WrongSurface {
        page: &'static str,
        mode: Mode,
        expected: &'static str,
    },
}

/// Render one frame of `page` with the authority's current mode.
#[must_use]
pub fn render_frame(
    theme: ThemeHandle,
    page: Page,
    catalog: CatalogState,
    width: u16,
    height: u16,
    color: bool,
) -> String {
    let app = App::new(theme, CatalogSource::Bundled)
        .with_size(usize::from(width), usize::from(height))
        .with_page(page)
        .with_catalog(catalog)
        .with_color(color);
    app.view()
}

/// An initialized authority pinned to `mode`, backed by memory only.
#[must_use]
pub fn pinned_authority(mode: Mode) -> ThemeHandle {
    let theme = ThemeAuthority::new(MemoryStore::with_value(mode.as_str())).into_handle();
    theme.initialize();
    theme
}

fn expected_title(page: Page, mode: Mode) -> &'static str {
    match page {
        Page::Home => home_hero(mode).title,
        Page::About => about_hero(mode).title,
        Page::Contact => contact_hero(mode).title,
    }
}

/// Render every page in every mode and check each frame.
///
/// Returns the number of frames checked.
///
/// # Errors
///
/// Returns the first frame that lacks its hero title or shows the wrong
/// navigation surface.
pub fn self_check(catalog: &CatalogState, color: bool) -> Result<usize, SelfCheckError> {
    let mut frames = 0;
    for mode in Mode::all() {
        for page in Page::all() {
            let frame = render_frame(pinned_authority(mode), page, catalog.clone(), 100, 40, color);
            let plain = strip_ansi(&frame);

            let expected = expected_title(page, mode);
            if !plain.contains(expected) {
                return Err(SelfCheckError::MissingTitle {
                    page: page.name(),
                    mode,
                    expected,
                });
            }

            let surface = select_navigation_surface(mode);
            let has_sidebar = plain.contains("Switch Theme");
            if has_sidebar != (surface == NavigationSurface::Sidebar) {
                return Err(SelfCheckError::WrongSurface {
                    page: page.name(),
                    mode,
                    expected: surface.as_str(),
                });
            }

            debug!(page = page.name(), theme = %mode, "Frame checked");
            frames += 1;
        }
    }
    info!(frames, "Self-check passed");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_check_covers_every_frame() {
        let catalog = CatalogState::load(&CatalogSource::Bundled);
        assert_eq!(self_check(&catalog, false), Ok(9));
        assert_eq!(self_check(&catalog, true), Ok(9));
    }

    #[test]
    fn frame_uses_pinned_mode() {
        let frame = render_frame(
            pinned_authority(Mode::Colorful),
            Page::Contact,
            CatalogState::loading(),
            100,
            40,
            false,
        );
        assert!(frame.contains("Let's Connect!"));
        assert!(frame.contains("Theme 3 - Colorful Grid"));
    }

    #[test]
    fn frame_has_requested_height() {
        let frame = render_frame(
            pinned_authority(Mode::Dark),
            Page::About,
            CatalogState::loading(),
            90,
            30,
            false,
        );
        assert_eq!(frame.lines().count(), 30);
    }
}
