//! Vertical navigation panel for the dark layout.
//!
//! The sidebar hosts page navigation and, while expanded, the theme
//! selector. Collapsing shrinks it to icons and hides the selector.

use theme_state::{Mode, NavigationSurface};

use crate::messages::Page;
use crate::text::fit;
use crate::theme::{Palette, spacing};

use super::selector::ThemeSelector;

/// Sidebar layout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sidebar {
    collapsed: bool,
}

impl Sidebar {
    /// Expanded sidebar.
    #[must_use]
    pub const fn new() -> Self {
        Self { collapsed: false }
    }

    /// Whether the sidebar shows icons only.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Collapse or expand.
    pub const fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Expand.
    pub const fn expand(&mut self) {
        self.collapsed = false;
    }

    /// Whether the theme selector is reachable.
    #[must_use]
    pub const fn shows_selector(&self) -> bool {
        !self.collapsed
    }

    /// Total width including the right border.
    #[must_use]
    pub const fn width(&self) -> usize {
        if self.collapsed {
            spacing::SIDEBAR_COLLAPSED_WIDTH
        } else {
            spacing::SIDEBAR_WIDTH
        }
    }

    /// Render exactly `height` lines of [`Self::width`] cells.
    #[must_use]
    pub fn view(
        &self,
        palette: &Palette,
        page: Page,
        selector: &ThemeSelector,
        current: Mode,
        height: usize,
    ) -> Vec<String> {
        let inner = self.width() - 1;
        let mut rows: Vec<String> = Vec::new();

        let brand = if self.collapsed { " ◆" } else { " ◆ ThemeZone" };
        rows.push(palette.brand_style().render(&fit(brand, inner)));
        rows.push(palette.sidebar_style().render(&fit("", inner)));

        for p in Page::all() {
            let text = if self.collapsed {
                format!(" {}", p.icon())
            } else {
                format!(" {} {}", p.icon(), p.name())
            };
            let style = if p == page {
                palette.nav_active_style()
            } else {
                palette.nav_style()
            };
            rows.push(style.render(&fit(&text, inner)));
        }

        if self.shows_selector() {
            rows.push(palette.sidebar_style().render(&fit("", inner)));
            rows.push(palette.muted_style().render(&fit(" Switch Theme", inner)));
            if selector.is_open() {
                rows.extend(selector.render_options(
                    palette,
                    NavigationSurface::Sidebar,
                    current,
                    inner,
                ));
            } else {
                rows.push(ThemeSelector::render_trigger(
                    palette,
                    NavigationSurface::Sidebar,
                    current,
                    inner,
                ));
            }
        }

        let hint = if self.collapsed { " [ »" } else { " [ collapse" };
        let body = height.saturating_sub(1);
        rows.truncate(body);
        while rows.len() < body {
            rows.push(palette.sidebar_style().render(&fit("", inner)));
        }
        if height > 0 {
            rows.push(palette.muted_style().render(&fit(hint, inner)));
        }

        let edge = palette.border_style().render("│");
        rows.into_iter().map(|row| format!("{row}{edge}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::visible_width;

    fn palette() -> Palette {
        Palette::dark().with_color(false)
    }

    #[test]
    fn toggle_changes_width() {
        let mut sidebar = Sidebar::new();
        assert_eq!(sidebar.width(), spacing::SIDEBAR_WIDTH);
        sidebar.toggle();
        assert!(sidebar.is_collapsed());
        assert_eq!(sidebar.width(), spacing::SIDEBAR_COLLAPSED_WIDTH);
        sidebar.expand();
        assert!(!sidebar.is_collapsed());
    }

    #[test]
    fn expanded_view_lists_pages_and_selector() {
        let lines = Sidebar::new().view(
            &palette(),
            Page::Contact,
            &ThemeSelector::new(),
            Mode::Dark,
            20,
        );
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|l| visible_width(l) == spacing::SIDEBAR_WIDTH));
        let joined = lines.join("\n");
        assert!(joined.contains("ThemeZone"));
        assert!(joined.contains("✉ Contact"));
        assert!(joined.contains("Switch Theme"));
        assert!(joined.contains("Dark Sidebar ▾"));
    }

    #[test]
    fn open_selector_shows_all_modes() {
        let mut selector = ThemeSelector::new();
        selector.open(Mode::Dark);
        let joined = Sidebar::new()
            .view(&palette(), Page::Home, &selector, Mode::Dark, 20)
            .join("\n");
        assert!(joined.contains("  Minimalist"));
        assert!(joined.contains("✓ Dark Sidebar"));
        assert!(joined.contains("  Colorful Grid"));
    }

    #[test]
    fn collapsed_view_hides_selector() {
        let mut sidebar = Sidebar::new();
        sidebar.toggle();
        let lines = sidebar.view(&palette(), Page::Home, &ThemeSelector::new(), Mode::Dark, 12);
        assert!(lines.iter().all(|l| visible_width(l) == spacing::SIDEBAR_COLLAPSED_WIDTH));
        let joined = lines.join("\n");
        assert!(!joined.contains("Switch Theme"));
        assert!(!joined.contains("Home"));
        assert!(joined.contains('⌂'));
    }
}
