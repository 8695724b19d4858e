//! Main application model and routing.
//!
//! The `App` handles:
//! - Global keys (pages, theme selector, sidebar, help, scrolling)
//! - Message routing to page models
//! - Shell rendering for the active mode (header or sidebar, footer)
//!
//! The theme itself lives in the shared [`ThemeHandle`]. Every frame reads
//! one snapshot from it, so a frame never mixes two modes.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use theme_state::{
    Mode, NavigationSurface, Persistence, ThemeHandle, ThemeState, select_navigation_surface,
};
use tracing::{debug, warn};

use crate::catalog::{CatalogSource, CatalogState, load_catalog};
use crate::components::{
    Notice, SelectorAction, Sidebar, StatusLevel, ThemeSelector, banner, render_header,
};
use crate::content::CONTACT_ACK;
use crate::messages::{Msg, Page};
use crate::pages::{ContactPage, PageModel, Pages, ViewContext};
use crate::program::{Cmd, Model};
use crate::text::{Border, boxed, center, fit, join_horizontal};
use crate::theme::{Palette, spacing};

/// Main application state.
#[derive(Debug)]
pub struct App {
    theme: ThemeHandle,
    page: Page,
    pages: Pages,
    catalog: CatalogState,
    catalog_source: CatalogSource,
    width: usize,
    height: usize,
    /// Whether a terminal size has been received.
    ready: bool,
    show_help: bool,
    sidebar: Sidebar,
    selector: ThemeSelector,
    /// First content line shown.
    scroll: usize,
    notice: Option<Notice>,
    color: bool,
}

impl App {
    /// Create the app over a theme authority.
    #[must_use]
    pub fn new(theme: ThemeHandle, catalog_source: CatalogSource) -> Self {
        Self {
            theme,
            page: Page::default(),
            pages: Pages::default(),
            catalog: CatalogState::loading(),
            catalog_source,
            width: 0,
            height: 0,
            ready: false,
            show_help: false,
            sidebar: Sidebar::new(),
            selector: ThemeSelector::new(),
            scroll: 0,
            notice: None,
            color: true,
        }
    }

    /// Turn color output on or off.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Start with a known terminal size.
    #[must_use]
    pub const fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self.ready = true;
        self
    }

    /// Start on `page`.
    #[must_use]
    pub const fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    /// Start with an already loaded catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogState) -> Self {
        self.catalog = catalog;
        self
    }

    /// Override the simulated contact submit delay.
    #[must_use]
    pub fn with_contact_delay(mut self, delay: Duration) -> Self {
        self.pages.contact = ContactPage::new().with_submit_delay(delay);
        self
    }

    /// Active page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Theme selector state.
    #[must_use]
    pub const fn selector(&self) -> &ThemeSelector {
        &self.selector
    }

    /// Sidebar state.
    #[must_use]
    pub const fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Current notice line.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Catalog state.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Whether the help overlay is shown.
    #[must_use]
    pub const fn show_help(&self) -> bool {
        self.show_help
    }

    /// First visible content line.
    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Page models.
    #[must_use]
    pub const fn pages(&self) -> &Pages {
        &self.pages
    }

    fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.pages.get_mut(self.page).on_leave();
        debug!(from = self.page.route(), to = page.route(), "Navigate");
        self.page = page;
        self.scroll = 0;
        self.notice = None;
    }

    /// Whether the theme selector is reachable in the current layout.
    fn selector_visible(&self, mode: Mode) -> bool {
        match select_navigation_surface(mode) {
            NavigationSurface::Header => true,
            NavigationSurface::Sidebar => self.sidebar.shows_selector(),
        }
    }

    /// Hand a chosen mode to the authority.
    fn apply_mode(&mut self, mode: Mode) {
        self.selector.close();
        if mode != Mode::Dark {
            self.sidebar.expand();
        }
        match self.theme.set_mode(mode) {
            Persistence::Saved => {
                if self
                    .notice
                    .as_ref()
                    .is_some_and(|n| n.level == StatusLevel::Warning)
                {
                    self.notice = None;
                }
            }
            Persistence::Unsaved(err) => {
                warn!(error = %err, "Theme preference not persisted");
                self.notice = Some(Notice::new(
                    StatusLevel::Warning,
                    format!("Theme applied but not saved: {err}"),
                ));
            }
        }
    }

    fn on_theme_changed(&mut self, state: ThemeState) {
        debug!(theme = %state.current, initializing = state.is_initializing, "Theme state received");
        self.selector.close();
        if state.current != Mode::Dark {
            self.sidebar.expand();
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Cmd> {
        // Until the saved preference is read, only quitting is allowed.
        if self.theme.is_initializing() {
            return matches!(key.code, KeyCode::Char('q') | KeyCode::Esc).then(Cmd::quit);
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return None;
        }

        if self.selector.is_open() {
            if let SelectorAction::Chosen(mode) = self.selector.handle_key(key) {
                self.apply_mode(mode);
            }
            return None;
        }

        if self.pages.get(self.page).captures_input() {
            return self.pages.get_mut(self.page).update(&Msg::Key(*key));
        }

        let mode = self.theme.current();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Cmd::quit()),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(page) = Page::from_shortcut(c) {
                    self.navigate(page);
                }
            }
            KeyCode::Char('t') => {
                if self.selector_visible(mode) {
                    self.selector.open(mode);
                } else {
                    self.notice = Some(Notice::new(
                        StatusLevel::Info,
                        "Expand the sidebar with [ to switch themes",
                    ));
                }
            }
            KeyCode::Char('[') if mode == Mode::Dark => {
                self.sidebar.toggle();
                self.selector.close();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => {
                let step = (self.height / 2).max(1);
                self.scroll = (self.scroll + step).min(self.max_scroll());
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub((self.height / 2).max(1)),
            KeyCode::Home => self.scroll = 0,
            _ => return self.pages.get_mut(self.page).update(&Msg::Key(*key)),
        }
        None
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Width of the page area and the number of content rows, given the
    /// rows already taken by chrome.
    fn content_width(&self, mode: Mode) -> usize {
        match select_navigation_surface(mode) {
            NavigationSurface::Header => self.width,
            NavigationSurface::Sidebar => self.width.saturating_sub(self.sidebar.width()),
        }
    }

    fn page_lines(&self, palette: &Palette, content_width: usize) -> Vec<String> {
        let pad = spacing::content_padding(palette.mode);
        let inner = content_width.saturating_sub(pad * 2).max(1);
        let ctx = ViewContext {
            palette,
            catalog: &self.catalog,
        };
        let indent = " ".repeat(pad);
        let mut lines = vec![String::new()];
        lines.extend(
            self.pages
                .get(self.page)
                .view(inner, &ctx)
                .into_iter()
                .map(|line| format!("{indent}{line}")),
        );
        lines
    }

    fn chrome_rows(&self, mode: Mode) -> usize {
        let header = match select_navigation_surface(mode) {
            NavigationSurface::Header => spacing::HEADER_HEIGHT,
            NavigationSurface::Sidebar => 0,
        };
        header + spacing::FOOTER_HEIGHT + usize::from(self.notice.is_some())
    }

    fn max_scroll(&self) -> usize {
        let mode = self.theme.current();
        let palette = Palette::for_mode(mode).with_color(false);
        let rows = self.height.saturating_sub(self.chrome_rows(mode));
        self.page_lines(&palette, self.content_width(mode))
            .len()
            .saturating_sub(rows)
    }

    fn render_footer(&self, palette: &Palette) -> String {
        let page_hints = self.pages.get(self.page).hints();
        let sidebar_hint = if palette.mode == Mode::Dark {
            "  [ sidebar"
        } else {
            ""
        };
        let hints = format!(
            " {page_hints}  |  1-3 pages  t theme{sidebar_hint}  j/k scroll  ? help  q quit"
        );
        palette.footer_style().render(&fit(&hints, self.width))
    }

    fn render_help(&self, palette: &Palette) -> String {
        let help = [
            "Keyboard Shortcuts",
            "",
            "1 / 2 / 3    Home, About, Contact",
            "t            Switch theme",
            "[            Collapse sidebar (dark)",
            "j/k ↑/↓      Scroll",
            "PgUp/PgDn    Scroll a page",
            "v            View all products",
            "Tab          Fill in contact form",
            "?            Toggle this help",
            "q / Esc      Quit",
        ];
        let lines: Vec<String> = help.iter().map(|line| (*line).to_string()).collect();
        let box_width = 44.min(self.width);
        let block = boxed(&lines, box_width, Border::Rounded, palette.border_focus_style());
        let top = self.height.saturating_sub(block.len()) / 2;

        let mut out = vec![String::new(); top];
        out.extend(block.iter().map(|line| center(line, self.width)));
        out.join("\n")
    }

    fn render_placeholder(&self, palette: &Palette) -> String {
        let mut out = vec![String::new(); self.height / 2];
        out.push(center(
            &palette.muted_style().render("Loading theme..."),
            self.width,
        ));
        out.join("\n")
    }
}

impl Model for App {
    fn init(&mut self) -> Vec<Cmd> {
        let theme = self.theme.clone();
        let source = self.catalog_source.clone();
        vec![
            Cmd::new(move || Msg::ThemeChanged(theme.initialize())),
            Cmd::new(move || {
                Msg::CatalogLoaded(load_catalog(&source).map_err(|err| err.to_string()))
            }),
        ]
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match msg {
            Msg::Resize { width, height } => {
                self.width = usize::from(width);
                self.height = usize::from(height);
                self.ready = true;
                self.scroll = self.scroll.min(self.max_scroll());
                None
            }
            Msg::ThemeChanged(state) => {
                self.on_theme_changed(state);
                None
            }
            Msg::CatalogLoaded(result) => {
                self.catalog = CatalogState::from_result(result);
                None
            }
            Msg::ContactSent => {
                let cmd = self.pages.contact.update(&Msg::ContactSent);
                self.notice = Some(Notice::new(StatusLevel::Success, CONTACT_ACK));
                cmd
            }
            Msg::Key(key) => self.handle_key(&key),
            Msg::Quit => None,
        }
    }

    fn view(&self) -> String {
        if !self.ready {
            return "Loading...".to_string();
        }

        let state = self.theme.snapshot();
        let mode = state.current;
        let palette = Palette::for_mode(mode).with_color(self.color);

        if state.is_initializing {
            return self.render_placeholder(&palette);
        }
        if self.show_help {
            return self.render_help(&palette);
        }

        let surface = select_navigation_surface(mode);
        let header = match surface {
            NavigationSurface::Header => {
                render_header(&palette, self.page, &self.selector, mode, self.width)
            }
            NavigationSurface::Sidebar => Vec::new(),
        };
        let above_footer = self
            .height
            .saturating_sub(spacing::FOOTER_HEIGHT + usize::from(self.notice.is_some()));
        let rows = above_footer.saturating_sub(header.len());

        let content_width = self.content_width(mode);
        let page_lines = self.page_lines(&palette, content_width);
        let start = self.scroll.min(page_lines.len().saturating_sub(rows));
        let visible: Vec<String> = page_lines.into_iter().skip(start).take(rows).collect();

        let body = match surface {
            NavigationSurface::Header => visible,
            NavigationSurface::Sidebar => {
                let side = self
                    .sidebar
                    .view(&palette, self.page, &self.selector, mode, rows);
                join_horizontal(
                    &[(side, self.sidebar.width()), (visible, content_width)],
                    0,
                )
            }
        };

        let mut lines = header;
        lines.extend(body);
        lines.resize(above_footer.max(lines.len()), String::new());
        if let Some(notice) = &self.notice {
            lines.push(banner(&palette, notice, self.width));
        }
        lines.push(self.render_footer(&palette));
        lines.join("\n")
    }
}
