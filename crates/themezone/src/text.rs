//! Text measurement and block composition.
//!
//! Frames are built as vectors of lines. Widths are measured in terminal
//! cells with ANSI escape sequences ignored, so styled and plain fragments
//! can be mixed freely when joining blocks side by side.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Style;

/// Visible width of `s` in terminal cells, ignoring CSI escape sequences.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Remove CSI escape sequences (`ESC [ ... final`) from `s`.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in @..~.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else if chars.peek() == Some(&']') {
            // OSC: skip to BEL or ST.
            chars.next();
            while let Some(c) = chars.next() {
                if c == '\x07' {
                    break;
                }
                if c == '\x1b' && chars.peek() == Some(&'\\') {
                    chars.next();
                    break;
                }
            }
        }
    }
    out
}

/// Cut plain `text` to at most `width` cells.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Cut plain `text` to `width` cells, ending in `...` when anything was cut.
#[must_use]
pub fn truncate_ellipsis(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    format!("{}...", truncate(text, width - 3))
}

/// Pad `s` with spaces to `width` visible cells. Never shortens.
#[must_use]
pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

/// Truncate plain `text` and pad it to exactly `width` cells.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    pad_right(&truncate(text, width), width)
}

/// Center `s` in `width` cells.
#[must_use]
pub fn center(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}

/// Place `left` and `right` on one line of `width` cells.
#[must_use]
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = visible_width(left) + visible_width(right);
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

/// Word-wrap plain `text` to `width` cells.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Word-wrap plain `text` to at most `max_lines` lines.
#[must_use]
pub fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = truncate_ellipsis(&format!("{last}..."), width);
        }
    }
    lines
}

/// Apply `style` to each line.
#[must_use]
pub fn styled(lines: Vec<String>, style: Style) -> Vec<String> {
    lines.into_iter().map(|line| style.render(&line)).collect()
}

/// Join blocks side by side.
///
/// Each block is `(lines, width)`; lines are padded to the block width and
/// shorter blocks are padded with blank lines.
#[must_use]
pub fn join_horizontal(blocks: &[(Vec<String>, usize)], gap: usize) -> Vec<String> {
    let height = blocks.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);
    let spacer = " ".repeat(gap);
    (0..height)
        .map(|row| {
            blocks
                .iter()
                .map(|(lines, width)| {
                    let line = lines.get(row).map_or("", String::as_str);
                    pad_right(line, *width)
                })
                .collect::<Vec<_>>()
                .join(&spacer)
        })
        .collect()
}

/// Border glyph sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    /// `╭─╮` corners.
    Rounded,
    /// `╔═╗` double lines.
    Double,
    /// `┌─┐` square corners.
    Normal,
}

impl Border {
    const fn glyphs(self) -> [char; 6] {
        // top-left, top-right, bottom-left, bottom-right, horizontal, vertical
        match self {
            Self::Rounded => ['╭', '╮', '╰', '╯', '─', '│'],
            Self::Double => ['╔', '╗', '╚', '╝', '═', '║'],
            Self::Normal => ['┌', '┐', '└', '┘', '─', '│'],
        }
    }
}

/// Wrap `lines` in a border of total `width` cells with one cell of
/// horizontal padding. Lines must already fit in `width - 4` cells.
#[must_use]
pub fn boxed(lines: &[String], width: usize, border: Border, style: Style) -> Vec<String> {
    let [tl, tr, bl, br, h, v] = border.glyphs();
    let inner = width.saturating_sub(4);
    let rule = h.to_string().repeat(width.saturating_sub(2));
    let side = style.render(&v.to_string());

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(style.render(&format!("{tl}{rule}{tr}")));
    for line in lines {
        out.push(format!("{side} {} {side}", pad_right(line, inner)));
    }
    out.push(style.render(&format!("{bl}{rule}{br}")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_width_ignores_escapes() {
        assert_eq!(visible_width("hello"), 5);
        assert_eq!(visible_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(visible_width("\x1b[38;2;1;2;3mrgb\x1b[39m"), 3);
        assert_eq!(visible_width("\x1b]0;title\x07x"), 1);
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(visible_width("★"), 1);
        assert_eq!(visible_width("日本"), 4);
        assert_eq!(truncate("日本語", 5), "日本");
    }

    #[test]
    fn truncate_ellipsis_marks_cuts() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        assert_eq!(truncate_ellipsis("a longer sentence", 10), "a longe...");
        assert_eq!(truncate_ellipsis("abcdef", 2), "..");
    }

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abcd");
    }

    #[test]
    fn center_and_spread() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(spread("a", "b", 5), "a   b");
        assert_eq!(spread("abc", "def", 4), "abc def");
    }

    #[test]
    fn wrap_clamped_limits_lines() {
        let lines = wrap_clamped("one two three four five six", 9, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."));
        assert!(lines.iter().all(|l| visible_width(l) <= 9));
    }

    #[test]
    fn join_horizontal_pads_blocks() {
        let joined = join_horizontal(
            &[
                (vec!["a".into(), "b".into()], 3),
                (vec!["x".into()], 2),
            ],
            1,
        );
        assert_eq!(joined, vec!["a   x ".to_string(), "b     ".to_string()]);
    }

    #[test]
    fn boxed_has_uniform_width() {
        let lines = boxed(
            &["hi".to_string(), "there".to_string()],
            10,
            Border::Rounded,
            Style::new().plain(true),
        );
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| visible_width(l) == 10));
        assert_eq!(lines[0], "╭────────╮");
        assert_eq!(lines[1], "│ hi     │");
    }
}
