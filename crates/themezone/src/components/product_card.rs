//! Product card for the home page grid.

use theme_state::Mode;

use crate::catalog::Product;
use crate::text::{boxed, center, spread, styled, wrap_clamped};
use crate::theme::Palette;

use super::{button, card_border};

const TITLE_LINES: usize = 2;
const DESCRIPTION_LINES: usize = 3;

/// Description length before truncation, in characters.
#[must_use]
pub const fn description_limit(mode: Mode) -> usize {
    match mode {
        Mode::Colorful => 100,
        Mode::Light | Mode::Dark => 80,
    }
}

/// Cut `description` to `limit` characters, appending `...` when cut.
#[must_use]
pub fn short_description(description: &str, limit: usize) -> String {
    if description.chars().count() <= limit {
        description.to_string()
    } else {
        let head: String = description.chars().take(limit).collect();
        format!("{head}...")
    }
}

/// Format a rating as `★ rate (count)`.
#[must_use]
pub fn rating_label(product: &Product) -> String {
    format!("★ {} ({})", product.rating.rate, product.rating.count)
}

fn padded(mut lines: Vec<String>, height: usize) -> Vec<String> {
    lines.resize(height, String::new());
    lines
}

/// Render a card `width` cells wide. Every card has the same height so
/// grid rows line up.
#[must_use]
pub fn render_product_card(palette: &Palette, product: &Product, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4);

    let title = padded(
        styled(
            wrap_clamped(&product.title, inner, TITLE_LINES),
            palette.heading_style(),
        ),
        TITLE_LINES,
    );
    let description = padded(
        styled(
            wrap_clamped(
                &short_description(&product.description, description_limit(palette.mode)),
                inner,
                DESCRIPTION_LINES,
            ),
            palette.muted_style(),
        ),
        DESCRIPTION_LINES,
    );

    let price = palette.price_style().render(&format!("${:.2}", product.price));
    let rating = palette.accent_style().render(&rating_label(product));

    let mut lines = title;
    lines.push(String::new());
    lines.extend(description);
    lines.push(String::new());
    lines.push(spread(&price, &rating, inner));
    lines.push(
        palette
            .muted_style()
            .render(&format!("Category: {}", product.category)),
    );
    lines.push(String::new());
    lines.push(center(&button(palette, "Add to Cart", true), inner));

    boxed(&lines, width, card_border(palette.mode), palette.border_style())
}
