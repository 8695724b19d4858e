//! Home page: hero, feature cards and the featured product grid.

use crossterm::event::KeyCode;
use theme_state::Mode;
use tracing::debug;

use super::{PageModel, ViewContext};
use crate::components::{
    blurb_grid, button, cell_width, grid, grid_columns, grid_gap, heading, hero,
    render_product_card,
};
use crate::content::{HOME_CTA, HOME_FEATURES, HOME_FEATURES_HEADING, home_hero};
use crate::messages::{Msg, Page};
use crate::program::Cmd;
use crate::text::{center, wrap};
use crate::theme::{Palette, spacing};

/// Products shown before "View All Products" is pressed.
#[must_use]
pub const fn featured_limit(mode: Mode) -> usize {
    match mode {
        Mode::Colorful => 12,
        Mode::Light | Mode::Dark => 8,
    }
}

/// Widest product grid for `mode`.
#[must_use]
pub const fn max_columns(mode: Mode) -> usize {
    match mode {
        Mode::Dark => 3,
        Mode::Light | Mode::Colorful => 4,
    }
}

/// Home page state.
#[derive(Debug, Clone, Default)]
pub struct HomePage {
    show_all: bool,
}

impl HomePage {
    /// Create the page.
    #[must_use]
    pub const fn new() -> Self {
        Self { show_all: false }
    }

    /// Whether the whole catalog is shown.
    #[must_use]
    pub const fn shows_all(&self) -> bool {
        self.show_all
    }

    fn products(&self, width: usize, ctx: &ViewContext<'_>) -> Vec<String> {
        let palette = ctx.palette;
        let catalog = ctx.catalog;
        let mut lines = Vec::new();

        if catalog.loading {
            lines.push(center(
                &palette.muted_style().render("◐ Loading amazing products..."),
                width,
            ));
            return lines;
        }
        if let Some(error) = &catalog.error {
            lines.push(palette.error_style().render("Oops! Something went wrong"));
            lines.extend(
                wrap(error, width)
                    .into_iter()
                    .map(|line| palette.muted_style().render(&line)),
            );
            return lines;
        }

        lines.push(
            palette
                .muted_style()
                .render(&format!("{} products available", catalog.items.len())),
        );
        lines.push(String::new());

        let mode = palette.mode;
        let limit = featured_limit(mode);
        let shown = if self.show_all {
            catalog.items.len()
        } else {
            limit
        };

        let gap = grid_gap(mode);
        let columns = grid_columns(width, spacing::MIN_CARD_WIDTH, gap, max_columns(mode));
        let cell = cell_width(width, columns, gap);
        let cards = catalog
            .items
            .iter()
            .take(shown)
            .map(|product| render_product_card(palette, product, cell))
            .collect();
        lines.extend(grid(cards, columns, cell, gap));

        if catalog.items.len() > limit {
            let label = if self.show_all {
                "Show Less"
            } else {
                "View All Products"
            };
            lines.push(center(&button(palette, label, false), width));
            lines.push(center(&palette.muted_style().render("press v"), width));
        }
        lines
    }
}

impl PageModel for HomePage {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Msg::Key(key) = msg
            && key.code == KeyCode::Char('v')
        {
            self.show_all = !self.show_all;
            debug!(show_all = self.show_all, "Toggled product list");
        }
        None
    }

    fn view(&self, width: usize, ctx: &ViewContext<'_>) -> Vec<String> {
        let palette: &Palette = ctx.palette;
        let mut lines = hero(palette, &home_hero(palette.mode), width);
        lines.push(center(&button(palette, HOME_CTA, true), width));
        lines.push(String::new());

        lines.push(heading(palette, HOME_FEATURES_HEADING, width));
        lines.push(String::new());
        lines.extend(blurb_grid(palette, &HOME_FEATURES, width, 3));

        lines.push(heading(palette, "Featured Products", width));
        lines.extend(self.products(width, ctx));
        lines
    }

    fn page(&self) -> Page {
        Page::Home
    }

    fn hints(&self) -> &'static str {
        "v view all"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, CatalogState};
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn render(page: &HomePage, mode: Mode, catalog: &CatalogState, width: usize) -> String {
        let palette = Palette::for_mode(mode).with_color(false);
        let ctx = ViewContext {
            palette: &palette,
            catalog,
        };
        page.view(width, &ctx).join("\n")
    }

    fn bundled() -> CatalogState {
        CatalogState::load(&CatalogSource::Bundled)
    }

    #[test]
    fn limits_per_mode() {
        assert_eq!(featured_limit(Mode::Light), 8);
        assert_eq!(featured_limit(Mode::Colorful), 12);
        assert_eq!(max_columns(Mode::Dark), 3);
    }

    #[test]
    fn hero_follows_mode() {
        let page = HomePage::new();
        let catalog = bundled();
        assert!(render(&page, Mode::Light, &catalog, 100).contains("Welcome to ThemeZone"));
        assert!(render(&page, Mode::Dark, &catalog, 100).contains("Professional Dashboard"));
        assert!(render(&page, Mode::Colorful, &catalog, 100).contains("Vibrant Experience!"));
    }

    #[test]
    fn featured_products_are_limited() {
        let page = HomePage::new();
        let catalog = bundled();
        let text = render(&page, Mode::Light, &catalog, 120);
        assert!(text.contains(&format!("{} products available", catalog.items.len())));
        assert_eq!(text.matches("Add to Cart").count(), 8);
        assert!(text.contains("View All Products"));
    }

    #[test]
    fn v_toggles_full_catalog() {
        let mut page = HomePage::new();
        let catalog = bundled();
        let _ = page.update(&Msg::Key(KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE)));
        assert!(page.shows_all());
        let text = render(&page, Mode::Light, &catalog, 120);
        assert_eq!(text.matches("Add to Cart").count(), catalog.items.len());
        assert!(text.contains("Show Less"));
    }

    #[test]
    fn loading_and_error_states() {
        let page = HomePage::new();
        let loading = render(&page, Mode::Dark, &CatalogState::loading(), 80);
        assert!(loading.contains("Loading amazing products..."));

        let failed = CatalogState::from_result(Err("connection refused".to_string()));
        let text = render(&page, Mode::Dark, &failed, 80);
        assert!(text.contains("Oops! Something went wrong"));
        assert!(text.contains("connection refused"));
        assert!(!text.contains("Add to Cart"));
    }
}
