//! Palettes and style helpers for the three presentation modes.
//!
//! Every surface asks the [`Palette`] for a style instead of hardcoding
//! colors, so a frame rendered from one mode snapshot is uniformly themed.

use crossterm::style::{Attribute, Color, ContentStyle};
use theme_state::Mode;

// ============================================================================
// Spacing Constants
// ============================================================================

/// Layout measurements shared by the shell and the pages.
pub mod spacing {
    /// Sidebar width while expanded.
    pub const SIDEBAR_WIDTH: usize = 16;
    /// Sidebar width while collapsed.
    pub const SIDEBAR_COLLAPSED_WIDTH: usize = 5;
    /// Header height (brand row plus rule).
    pub const HEADER_HEIGHT: usize = 2;
    /// Footer height (hints line).
    pub const FOOTER_HEIGHT: usize = 1;
    /// Horizontal content padding for light and dark.
    pub const CONTENT_PADDING: usize = 2;
    /// Horizontal content padding for colorful.
    pub const CONTENT_PADDING_WIDE: usize = 4;
    /// Narrowest product card.
    pub const MIN_CARD_WIDTH: usize = 26;

    /// Content padding for a mode.
    #[must_use]
    pub const fn content_padding(mode: theme_state::Mode) -> usize {
        match mode {
            theme_state::Mode::Colorful => CONTENT_PADDING_WIDE,
            theme_state::Mode::Light | theme_state::Mode::Dark => CONTENT_PADDING,
        }
    }
}

// ============================================================================
// Style
// ============================================================================

/// A terminal text style built from palette tokens.
///
/// A style marked plain renders text unchanged, which is how color output
/// is turned off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<&'static str>,
    bg: Option<&'static str>,
    bold: bool,
    italic: bool,
    underline: bool,
    faint: bool,
    plain: bool,
}

impl Style {
    /// Empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            italic: false,
            underline: false,
            faint: false,
            plain: false,
        }
    }

    /// Set the foreground color (hex token).
    #[must_use]
    pub const fn foreground(mut self, hex: &'static str) -> Self {
        self.fg = Some(hex);
        self
    }

    /// Set the background color (hex token).
    #[must_use]
    pub const fn background(mut self, hex: &'static str) -> Self {
        self.bg = Some(hex);
        self
    }

    /// Bold text.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Italic text.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Underlined text.
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Faint text.
    #[must_use]
    pub const fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Render without escape sequences when `plain` is true.
    #[must_use]
    pub const fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    /// Apply the style to `text`.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        if self.plain || text.is_empty() {
            return text.to_string();
        }

        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.and_then(hex_color);
        style.background_color = self.bg.and_then(hex_color);
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        if self.underline {
            style.attributes.set(Attribute::Underlined);
        }
        if self.faint {
            style.attributes.set(Attribute::Dim);
        }
        style.apply(text).to_string()
    }
}

/// Parse a `#RRGGBB` token.
#[must_use]
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

// ============================================================================
// Palette
// ============================================================================

/// Semantic color tokens for one presentation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Mode this palette belongs to.
    pub mode: Mode,
    /// Whether styles emit color.
    pub color: bool,

    /// Brand color, active navigation, buttons.
    pub primary: &'static str,
    /// Secondary accent.
    pub secondary: &'static str,
    /// Highlight accent (ratings, gradients).
    pub accent: &'static str,

    /// Positive acknowledgments.
    pub success: &'static str,
    /// Warnings such as unsaved preferences.
    pub warning: &'static str,
    /// Failures.
    pub error: &'static str,

    /// Primary text.
    pub text: &'static str,
    /// Secondary text.
    pub text_muted: &'static str,
    /// Text on primary backgrounds.
    pub text_inverse: &'static str,

    /// Main background.
    pub bg: &'static str,
    /// Header, sidebar and card backgrounds.
    pub bg_subtle: &'static str,
    /// Selected entries.
    pub bg_highlight: &'static str,

    /// Dividers and card borders.
    pub border: &'static str,
}

impl Palette {
    /// Minimalist light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            mode: Mode::Light,
            color: true,
            primary: "#18181B",
            secondary: "#52525B",
            accent: "#EAB308",
            success: "#16A34A",
            warning: "#CA8A04",
            error: "#DC2626",
            text: "#09090B",
            text_muted: "#71717A",
            text_inverse: "#FAFAFA",
            bg: "#FFFFFF",
            bg_subtle: "#F4F4F5",
            bg_highlight: "#E4E4E7",
            border: "#D4D4D8",
        }
    }

    /// Dark sidebar palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            mode: Mode::Dark,
            color: true,
            primary: "#6366F1",
            secondary: "#818CF8",
            accent: "#FACC15",
            success: "#22C55E",
            warning: "#F59E0B",
            error: "#EF4444",
            text: "#E2E8F0",
            text_muted: "#94A3B8",
            text_inverse: "#F8FAFC",
            bg: "#0F172A",
            bg_subtle: "#1E293B",
            bg_highlight: "#334155",
            border: "#334155",
        }
    }

    /// Colorful grid palette.
    #[must_use]
    pub const fn colorful() -> Self {
        Self {
            mode: Mode::Colorful,
            color: true,
            primary: "#EC4899",
            secondary: "#8B5CF6",
            accent: "#F59E0B",
            success: "#10B981",
            warning: "#F97316",
            error: "#E11D48",
            text: "#1E1B4B",
            text_muted: "#6D28D9",
            text_inverse: "#FFFFFF",
            bg: "#FFF7ED",
            bg_subtle: "#FCE7F3",
            bg_highlight: "#FBCFE8",
            border: "#F472B6",
        }
    }

    /// Palette for `mode`.
    #[must_use]
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self::light(),
            Mode::Dark => Self::dark(),
            Mode::Colorful => Self::colorful(),
        }
    }

    /// Turn color output on or off.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    const fn style(&self) -> Style {
        Style::new().plain(!self.color)
    }

    // ========================================================================
    // Typography
    // ========================================================================

    /// Page and hero titles.
    #[must_use]
    pub const fn title_style(&self) -> Style {
        match self.mode {
            Mode::Colorful => self.style().bold().foreground(self.primary),
            Mode::Light | Mode::Dark => self.style().bold().foreground(self.text),
        }
    }

    /// Section headings.
    #[must_use]
    pub const fn heading_style(&self) -> Style {
        match self.mode {
            Mode::Colorful => self.style().bold().foreground(self.secondary),
            Mode::Light | Mode::Dark => self.style().bold().foreground(self.text),
        }
    }

    /// Body text.
    #[must_use]
    pub const fn text_style(&self) -> Style {
        self.style().foreground(self.text)
    }

    /// Secondary text.
    #[must_use]
    pub const fn muted_style(&self) -> Style {
        self.style().foreground(self.text_muted)
    }

    /// Key hints.
    #[must_use]
    pub const fn shortcut_style(&self) -> Style {
        self.style().faint().foreground(self.text_muted)
    }

    /// Accent text (ratings, badges).
    #[must_use]
    pub const fn accent_style(&self) -> Style {
        self.style().bold().foreground(self.accent)
    }

    /// Prices.
    #[must_use]
    pub const fn price_style(&self) -> Style {
        match self.mode {
            Mode::Colorful => self.style().bold().foreground(self.primary),
            Mode::Light | Mode::Dark => self.style().bold().foreground(self.text),
        }
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// Positive notices.
    #[must_use]
    pub const fn success_style(&self) -> Style {
        self.style().bold().foreground(self.success)
    }

    /// Warning notices.
    #[must_use]
    pub const fn warning_style(&self) -> Style {
        self.style().bold().foreground(self.warning)
    }

    /// Error notices.
    #[must_use]
    pub const fn error_style(&self) -> Style {
        self.style().bold().foreground(self.error)
    }

    // ========================================================================
    // Containers and controls
    // ========================================================================

    /// Card and panel borders.
    #[must_use]
    pub const fn border_style(&self) -> Style {
        self.style().foreground(self.border)
    }

    /// Focused field borders.
    #[must_use]
    pub const fn border_focus_style(&self) -> Style {
        self.style().foreground(self.primary)
    }

    /// Primary buttons.
    #[must_use]
    pub const fn button_primary_style(&self) -> Style {
        self.style()
            .bold()
            .background(self.primary)
            .foreground(self.text_inverse)
    }

    /// Secondary (outline) buttons.
    #[must_use]
    pub const fn button_style(&self) -> Style {
        self.style().bold().foreground(self.primary)
    }

    /// Badges.
    #[must_use]
    pub const fn badge_style(&self) -> Style {
        self.style()
            .background(self.bg_highlight)
            .foreground(self.text)
    }

    // ========================================================================
    // App chrome
    // ========================================================================

    /// Header bar.
    #[must_use]
    pub const fn header_style(&self) -> Style {
        self.style().background(self.bg_subtle).foreground(self.text)
    }

    /// Brand mark.
    #[must_use]
    pub const fn brand_style(&self) -> Style {
        self.style()
            .bold()
            .background(self.bg_subtle)
            .foreground(self.primary)
    }

    /// Active navigation entry.
    #[must_use]
    pub const fn nav_active_style(&self) -> Style {
        self.style()
            .bold()
            .background(self.primary)
            .foreground(self.text_inverse)
    }

    /// Inactive navigation entry.
    #[must_use]
    pub const fn nav_style(&self) -> Style {
        self.style()
            .background(self.bg_subtle)
            .foreground(self.text_muted)
    }

    /// Sidebar background.
    #[must_use]
    pub const fn sidebar_style(&self) -> Style {
        self.style().background(self.bg_subtle).foreground(self.text)
    }

    /// Selected entry inside an open theme selector.
    #[must_use]
    pub const fn selected_style(&self) -> Style {
        self.style()
            .bold()
            .background(self.bg_highlight)
            .foreground(self.primary)
    }

    /// Footer hints.
    #[must_use]
    pub const fn footer_style(&self) -> Style {
        self.style().foreground(self.text_muted)
    }
}
