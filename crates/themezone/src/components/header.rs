//! Top navigation header for the light and colorful layouts.

use theme_state::{Mode, NavigationSurface};

use crate::messages::Page;
use crate::text::{pad_right, spread, visible_width};
use crate::theme::Palette;

use super::selector::{ThemeSelector, label};

/// Navigation entry for `page`, bracketed when active.
fn nav_item(palette: &Palette, page: Page, active: bool) -> String {
    if active {
        palette
            .nav_active_style()
            .render(&format!("[{} {}]", page.shortcut(), page.name()))
    } else {
        palette
            .nav_style()
            .render(&format!(" {} {} ", page.shortcut(), page.name()))
    }
}

/// Render the header: brand, navigation and theme selector on the first
/// line, a rule on the second, then the open drop-down (if any)
/// right-aligned beneath.
#[must_use]
pub fn render_header(
    palette: &Palette,
    page: Page,
    selector: &ThemeSelector,
    current: Mode,
    width: usize,
) -> Vec<String> {
    let brand = palette.brand_style().render("◆ ThemeZone");
    let nav = Page::all()
        .into_iter()
        .map(|p| nav_item(palette, p, p == page))
        .collect::<Vec<_>>()
        .join(" ");
    let left = format!("{brand}  {nav}");

    let trigger_width = visible_width(label(NavigationSurface::Header, current)) + 2;
    let trigger = ThemeSelector::render_trigger(
        palette,
        NavigationSurface::Header,
        current,
        trigger_width,
    );

    let top = if visible_width(&left) + trigger_width + 1 <= width {
        spread(&left, &trigger, width)
    } else {
        // Narrow terminals keep navigation and show only the key hint.
        spread(&left, &palette.shortcut_style().render("t"), width)
    };

    let mut lines = vec![
        palette.header_style().render(&pad_right(&top, width)),
        palette.border_style().render(&"─".repeat(width)),
    ];

    if selector.is_open() {
        let option_width = 26.min(width);
        let indent = " ".repeat(width.saturating_sub(option_width));
        lines.extend(
            selector
                .render_options(palette, NavigationSurface::Header, current, option_width)
                .into_iter()
                .map(|option| format!("{indent}{option}")),
        );
    }

    lines
}
