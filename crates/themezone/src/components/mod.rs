//! Reusable UI components.
//!
//! Components render to `Vec<String>` blocks and take every color from the
//! [`Palette`] of the frame being drawn.

pub mod header;
pub mod product_card;
pub mod selector;
pub mod sidebar;

pub use header::render_header;
pub use product_card::render_product_card;
pub use selector::{SelectorAction, ThemeSelector};
pub use sidebar::Sidebar;

use crate::content::{Blurb, Hero};
use crate::text::{Border, boxed, center, join_horizontal, styled, truncate_ellipsis, wrap};
use crate::theme::Palette;
use theme_state::Mode;

// ============================================================================
// Notices
// ============================================================================

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    /// Informational.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Degraded but working.
    Warning,
    /// Failed action.
    Error,
}

impl StatusLevel {
    /// Icon for this level.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✕",
        }
    }
}

/// A one-line message above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: StatusLevel,
    pub text: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Render a notice as a single line of `width` cells.
#[must_use]
pub fn banner(palette: &Palette, notice: &Notice, width: usize) -> String {
    let style = match notice.level {
        StatusLevel::Success => palette.success_style(),
        StatusLevel::Warning => palette.warning_style(),
        StatusLevel::Error => palette.error_style(),
        StatusLevel::Info => palette.muted_style(),
    };
    let text = truncate_ellipsis(
        &format!(" {} {}", notice.level.icon(), notice.text),
        width,
    );
    style.render(&text)
}

// ============================================================================
// Page building blocks
// ============================================================================

/// Centered hero block: title, subtitle and wrapped description.
#[must_use]
pub fn hero(palette: &Palette, hero: &Hero, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if palette.mode == Mode::Colorful {
        lines.push(String::new());
    }
    lines.push(center(&palette.title_style().render(hero.title), width));
    lines.push(String::new());
    lines.push(center(&palette.muted_style().render(hero.subtitle), width));
    for line in wrap(hero.description, width.min(72)) {
        lines.push(center(&palette.text_style().render(&line), width));
    }
    lines.push(String::new());
    lines
}

/// Section heading, centered in colorful mode.
#[must_use]
pub fn heading(palette: &Palette, text: &str, width: usize) -> String {
    let rendered = palette.heading_style().render(text);
    if palette.mode == Mode::Colorful {
        center(&rendered, width)
    } else {
        rendered
    }
}

/// A button label.
#[must_use]
pub fn button(palette: &Palette, label: &str, primary: bool) -> String {
    let text = format!(" {label} ");
    if primary {
        palette.button_primary_style().render(&text)
    } else {
        palette.button_style().render(&format!("[{text}]"))
    }
}

/// Card border for the mode: double lines for colorful, rounded otherwise.
#[must_use]
pub const fn card_border(mode: Mode) -> Border {
    match mode {
        Mode::Colorful => Border::Double,
        Mode::Light | Mode::Dark => Border::Rounded,
    }
}

/// Space between grid columns.
#[must_use]
pub const fn grid_gap(mode: Mode) -> usize {
    match mode {
        Mode::Dark => 1,
        Mode::Light => 2,
        Mode::Colorful => 3,
    }
}

/// Number of grid columns that fit `width`, capped at `max_columns`.
#[must_use]
pub fn grid_columns(width: usize, min_cell: usize, gap: usize, max_columns: usize) -> usize {
    ((width + gap) / (min_cell + gap)).clamp(1, max_columns.max(1))
}

/// Lay `cells` out in rows of `columns`, each cell `cell_width` wide.
#[must_use]
pub fn grid(cells: Vec<Vec<String>>, columns: usize, cell_width: usize, gap: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut cells = cells.into_iter().peekable();
    while cells.peek().is_some() {
        let row: Vec<(Vec<String>, usize)> = cells
            .by_ref()
            .take(columns.max(1))
            .map(|cell| (cell, cell_width))
            .collect();
        out.extend(join_horizontal(&row, gap));
        out.push(String::new());
    }
    out
}

/// Cell width for `columns` columns in `width` cells.
#[must_use]
pub const fn cell_width(width: usize, columns: usize, gap: usize) -> usize {
    let columns = if columns == 0 { 1 } else { columns };
    width.saturating_sub(gap * (columns - 1)) / columns
}

/// Bordered card with a bold title and a wrapped body.
#[must_use]
pub fn blurb_card(palette: &Palette, blurb: &Blurb, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4);
    let mut lines = vec![palette.heading_style().render(&truncate_ellipsis(blurb.title, inner))];
    lines.extend(styled(wrap(blurb.body, inner), palette.muted_style()));
    boxed(&lines, width, card_border(palette.mode), palette.border_style())
}

/// Grid of blurb cards, at most `max_columns` wide.
#[must_use]
pub fn blurb_grid(
    palette: &Palette,
    blurbs: &[Blurb],
    width: usize,
    max_columns: usize,
) -> Vec<String> {
    let gap = grid_gap(palette.mode);
    let columns = grid_columns(width, 24, gap, max_columns);
    let cell = cell_width(width, columns, gap);
    let cells = blurbs
        .iter()
        .map(|blurb| blurb_card(palette, blurb, cell))
        .collect();
    grid(cells, columns, cell, gap)
}
