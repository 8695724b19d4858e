//! About page.

use theme_state::Mode;

use super::{PageModel, ViewContext};
use crate::components::{
    blurb_grid, card_border, cell_width, grid, grid_columns, grid_gap, heading, hero,
};
use crate::content::{ABOUT_FEATURES, MISSION, TEAM, TECHNOLOGIES, TeamMember, about_hero};
use crate::messages::{Msg, Page};
use crate::program::Cmd;
use crate::text::{boxed, center, styled, truncate_ellipsis, visible_width, wrap};
use crate::theme::Palette;

/// About page. Stateless; everything comes from the mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct AboutPage;

impl AboutPage {
    /// Create the page.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Technology badges flowed into rows of at most `width` cells.
fn badges(palette: &Palette, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    for tech in TECHNOLOGIES {
        let badge = palette.badge_style().render(&format!(" {tech} "));
        let w = visible_width(&badge);
        if used > 0 && used + 1 + w > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        if used > 0 {
            row.push(' ');
            used += 1;
        }
        row.push_str(&badge);
        used += w;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

fn member_card(palette: &Palette, member: &TeamMember, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4);
    let mut lines = vec![
        palette
            .heading_style()
            .render(&truncate_ellipsis(member.name, inner)),
        palette
            .accent_style()
            .render(&truncate_ellipsis(member.role, inner)),
    ];
    lines.extend(styled(wrap(member.description, inner), palette.muted_style()));
    boxed(&lines, width, card_border(palette.mode), palette.border_style())
}

impl PageModel for AboutPage {
    fn update(&mut self, _msg: &Msg) -> Option<Cmd> {
        None
    }

    fn view(&self, width: usize, ctx: &ViewContext<'_>) -> Vec<String> {
        let palette = ctx.palette;
        let mode = palette.mode;
        let mut lines = hero(palette, &about_hero(mode), width);

        lines.push(heading(palette, "Our Mission", width));
        lines.extend(styled(wrap(MISSION, width), palette.text_style()));
        lines.push(String::new());

        lines.push(heading(palette, "Key Features", width));
        lines.push(String::new());
        let feature_columns = if mode == Mode::Colorful { 4 } else { 2 };
        lines.extend(blurb_grid(palette, &ABOUT_FEATURES, width, feature_columns));

        lines.push(heading(palette, "Technologies", width));
        lines.extend(badges(palette, width));
        lines.push(String::new());

        lines.push(heading(palette, "Meet the Team", width));
        lines.push(String::new());
        let gap = grid_gap(mode);
        let columns = grid_columns(width, 24, gap, 3);
        let cell = cell_width(width, columns, gap);
        let cards = TEAM
            .iter()
            .map(|member| member_card(palette, member, cell))
            .collect();
        lines.extend(grid(cards, columns, cell, gap));

        lines.push(center(&palette.heading_style().render("Ready to Explore?"), width));
        lines.push(center(
            &palette
                .muted_style()
                .render("Press 1 to browse featured products or t to try another theme."),
            width,
        ));
        lines
    }

    fn page(&self) -> Page {
        Page::About
    }
}
