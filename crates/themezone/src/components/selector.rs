//! Theme selection control.
//!
//! The header and the sidebar render the same control with different
//! labels. Choosing an entry yields a [`Mode`]; the caller hands it to the
//! theme authority.

use crossterm::event::{KeyCode, KeyEvent};
use theme_state::{Mode, NavigationSurface};

use crate::text::fit;
use crate::theme::Palette;

/// Label for `mode` on `surface`.
#[must_use]
pub const fn label(surface: NavigationSurface, mode: Mode) -> &'static str {
    match (surface, mode) {
        (NavigationSurface::Header, Mode::Light) => "Theme 1 - Minimalist",
        (NavigationSurface::Header, Mode::Dark) => "Theme 2 - Dark Sidebar",
        (NavigationSurface::Header, Mode::Colorful) => "Theme 3 - Colorful Grid",
        (NavigationSurface::Sidebar, Mode::Light) => "Minimalist",
        (NavigationSurface::Sidebar, Mode::Dark) => "Dark Sidebar",
        (NavigationSurface::Sidebar, Mode::Colorful) => "Colorful Grid",
    }
}

/// Result of a key press on an open selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAction {
    /// Key consumed, selector stays open.
    Consumed,
    /// Selector closed without a choice.
    Cancelled,
    /// A mode was chosen; the selector closed.
    Chosen(Mode),
}

/// Drop-down state of the theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSelector {
    open: bool,
    cursor: usize,
}

impl ThemeSelector {
    /// Closed selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            cursor: 0,
        }
    }

    /// Whether the drop-down is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open with the cursor on `current`.
    pub const fn open(&mut self, current: Mode) {
        self.open = true;
        self.cursor = current.index();
    }

    /// Close without choosing.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Mode under the cursor.
    #[must_use]
    pub fn highlighted(&self) -> Mode {
        Mode::from_index(self.cursor).unwrap_or_default()
    }

    /// Handle a key while open.
    pub fn handle_key(&mut self, key: &KeyEvent) -> SelectorAction {
        let count = Mode::all().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = (self.cursor + count - 1) % count;
                SelectorAction::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1) % count;
                SelectorAction::Consumed
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.cursor = index;
                self.open = false;
                SelectorAction::Chosen(self.highlighted())
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.open = false;
                SelectorAction::Chosen(self.highlighted())
            }
            KeyCode::Esc | KeyCode::Char('t') => {
                self.open = false;
                SelectorAction::Cancelled
            }
            _ => SelectorAction::Consumed,
        }
    }

    /// Closed control: the current label with a drop-down hint.
    #[must_use]
    pub fn render_trigger(
        palette: &Palette,
        surface: NavigationSurface,
        current: Mode,
        width: usize,
    ) -> String {
        let text = format!("{} ▾", label(surface, current));
        palette.badge_style().render(&fit(&text, width))
    }

    /// Open drop-down entries, each `width` cells wide.
    #[must_use]
    pub fn render_options(
        &self,
        palette: &Palette,
        surface: NavigationSurface,
        current: Mode,
        width: usize,
    ) -> Vec<String> {
        Mode::all()
            .into_iter()
            .enumerate()
            .map(|(i, mode)| {
                let check = if mode == current { "✓" } else { " " };
                let text = fit(&format!("{check} {}", label(surface, mode)), width);
                if i == self.cursor {
                    palette.selected_style().render(&text)
                } else {
                    palette.sidebar_style().render(&text)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn labels_per_surface() {
        assert_eq!(label(NavigationSurface::Header, Mode::Dark), "Theme 2 - Dark Sidebar");
        assert_eq!(label(NavigationSurface::Sidebar, Mode::Colorful), "Colorful Grid");
    }

    #[test]
    fn opens_on_current_mode() {
        let mut selector = ThemeSelector::new();
        assert!(!selector.is_open());
        selector.open(Mode::Colorful);
        assert!(selector.is_open());
        assert_eq!(selector.highlighted(), Mode::Colorful);
    }

    #[test]
    fn cursor_wraps() {
        let mut selector = ThemeSelector::new();
        selector.open(Mode::Light);
        assert_eq!(selector.handle_key(&key(KeyCode::Up)), SelectorAction::Consumed);
        assert_eq!(selector.highlighted(), Mode::Colorful);
        selector.handle_key(&key(KeyCode::Down));
        assert_eq!(selector.highlighted(), Mode::Light);
    }

    #[test]
    fn enter_chooses_and_closes() {
        let mut selector = ThemeSelector::new();
        selector.open(Mode::Light);
        selector.handle_key(&key(KeyCode::Char('j')));
        assert_eq!(
            selector.handle_key(&key(KeyCode::Enter)),
            SelectorAction::Chosen(Mode::Dark)
        );
        assert!(!selector.is_open());
    }

    #[test]
    fn digits_choose_directly() {
        let mut selector = ThemeSelector::new();
        selector.open(Mode::Light);
        assert_eq!(
            selector.handle_key(&key(KeyCode::Char('3'))),
            SelectorAction::Chosen(Mode::Colorful)
        );
    }

    #[test]
    fn escape_cancels() {
        let mut selector = ThemeSelector::new();
        selector.open(Mode::Dark);
        assert_eq!(selector.handle_key(&key(KeyCode::Esc)), SelectorAction::Cancelled);
        assert!(!selector.is_open());
    }

    #[test]
    fn options_mark_current_and_cursor() {
        let palette = Palette::light().with_color(false);
        let mut selector = ThemeSelector::new();
        selector.open(Mode::Dark);
        let lines = selector.render_options(&palette, NavigationSurface::Header, Mode::Dark, 26);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("✓ Theme 2 - Dark Sidebar"));
        assert!(lines[0].starts_with("  Theme 1 - Minimalist"));
    }
}
