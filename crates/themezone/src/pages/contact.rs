//! Contact page: form, contact details and FAQ.
//!
//! Submission is simulated. A valid form switches to a sending state and
//! returns a command that completes after a delay with
//! [`Msg::ContactSent`], which resets the form.

use std::thread;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::{PageModel, ViewContext};
use crate::components::{blurb_card, button, heading, hero};
use crate::content::{
    BUSINESS_HOURS, CONTACT_ACK, CONTACT_ACK_DETAIL, CONTACT_CHANNELS, FAQS, contact_hero,
};
use crate::messages::{Msg, Page};
use crate::program::Cmd;
use crate::text::{Border, boxed, join_horizontal, spread, truncate, visible_width, wrap};
use crate::theme::Palette;

/// Default simulated network delay.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Focusable form elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Send,
}

impl Field {
    const ORDER: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Subject,
        Self::Message,
        Self::Send,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
            Self::Send => "Send",
        }
    }

    const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your@email.com",
            Self::Subject => "What's this about?",
            Self::Message => "Your message...",
            Self::Send => "",
        }
    }
}

/// Form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::Send => "",
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Subject => Some(&mut self.subject),
            Field::Message => Some(&mut self.message),
            Field::Send => None,
        }
    }

    /// First problem with the form, if any.
    fn problem(&self) -> Option<&'static str> {
        if [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Some("Please fill in all fields.");
        }
        if !self.email.contains('@') {
            return Some("Please enter a valid email address.");
        }
        None
    }
}

/// Contact page state.
#[derive(Debug, Clone)]
pub struct ContactPage {
    form: ContactForm,
    focus: Option<Field>,
    sending: bool,
    sent: bool,
    validation: Option<&'static str>,
    submit_delay: Duration,
}

impl Default for ContactPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactPage {
    /// Create the page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            form: ContactForm {
                name: String::new(),
                email: String::new(),
                subject: String::new(),
                message: String::new(),
            },
            focus: None,
            sending: false,
            sent: false,
            validation: None,
            submit_delay: SUBMIT_DELAY,
        }
    }

    /// Override the simulated submit delay.
    #[must_use]
    pub const fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    /// Current form values.
    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Focused element.
    #[must_use]
    pub const fn focus(&self) -> Option<Field> {
        self.focus
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        self.sending
    }

    fn submit(&mut self) -> Option<Cmd> {
        if self.sending {
            return None;
        }
        if let Some(problem) = self.form.problem() {
            debug!(problem, "Contact form rejected");
            self.validation = Some(problem);
            return None;
        }
        self.validation = None;
        self.sending = true;
        info!(subject = %self.form.subject, "Contact form submitted");
        let delay = self.submit_delay;
        Some(Cmd::new(move || {
            thread::sleep(delay);
            Msg::ContactSent
        }))
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Cmd> {
        let Some(field) = self.focus else {
            if key.code == KeyCode::Tab {
                self.focus = Some(Field::Name);
                self.sent = false;
            }
            return None;
        };

        match key.code {
            KeyCode::Tab => self.focus = Some(field.next()),
            KeyCode::BackTab => self.focus = Some(field.prev()),
            KeyCode::Esc => self.focus = None,
            KeyCode::Enter if field == Field::Send => return self.submit(),
            KeyCode::Enter => self.focus = Some(field.next()),
            KeyCode::Backspace => {
                if let Some(value) = self.form.value_mut(field) {
                    value.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(value) = self.form.value_mut(field) {
                    value.push(c);
                    self.sent = false;
                    self.validation = None;
                }
            }
            _ => {}
        }
        None
    }

    fn render_field(&self, palette: &Palette, field: Field, width: usize) -> Vec<String> {
        let focused = self.focus == Some(field);
        let inner = width.saturating_sub(4);
        let label = if focused {
            palette.accent_style().render(&format!("› {}", field.label()))
        } else {
            palette.text_style().render(&format!("  {}", field.label()))
        };

        let value = self.form.value(field);
        let mut content = if value.is_empty() {
            vec![palette.muted_style().render(&truncate(field.placeholder(), inner))]
        } else if field == Field::Message {
            wrap(value, inner)
        } else {
            // Single-line inputs show the tail of long values.
            let chars: Vec<char> = value.chars().collect();
            let mut start = 0;
            while visible_width(&chars[start..].iter().collect::<String>()) > inner.saturating_sub(1) {
                start += 1;
            }
            vec![chars[start..].iter().collect()]
        };
        if focused && let Some(last) = content.last_mut() {
            if value.is_empty() {
                *last = "▏".to_string();
            } else {
                last.push('▏');
            }
        }
        if field == Field::Message {
            content.resize(content.len().max(3), String::new());
        }

        let border = if focused {
            palette.border_focus_style()
        } else {
            palette.border_style()
        };
        let mut lines = vec![label];
        lines.extend(boxed(&content, width, Border::Normal, border));
        lines
    }

    fn render_form(&self, palette: &Palette, width: usize) -> Vec<String> {
        let mut lines = vec![palette.heading_style().render("Send us a Message"), String::new()];
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            lines.extend(self.render_field(palette, field, width));
        }
        lines.push(String::new());

        let label = if self.sending {
            "Sending..."
        } else {
            "Send Message"
        };
        lines.push(button(palette, label, self.focus == Some(Field::Send)));

        if let Some(problem) = self.validation {
            lines.push(palette.error_style().render(problem));
        }
        if self.sent {
            lines.push(palette.success_style().render(&format!("✓ {CONTACT_ACK}")));
            lines.push(palette.muted_style().render(CONTACT_ACK_DETAIL));
        }
        lines
    }

    fn render_info(palette: &Palette, width: usize) -> Vec<String> {
        let mut lines = vec![palette.heading_style().render("Contact Information"), String::new()];
        for channel in CONTACT_CHANNELS {
            lines.push(palette.accent_style().render(channel.title));
            lines.extend(wrap(channel.value, width));
            lines.push(palette.muted_style().render(&truncate(channel.description, width)));
            lines.push(String::new());
        }
        lines.push(palette.heading_style().render("Business Hours"));
        for (days, hours) in BUSINESS_HOURS {
            lines.push(spread(days, &palette.muted_style().render(hours), width));
        }
        lines
    }
}

impl PageModel for ContactPage {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::ContactSent => {
                info!("Contact message delivered");
                self.form = ContactForm::default();
                self.sending = false;
                self.sent = true;
                self.focus = None;
                None
            }
            _ => None,
        }
    }

    fn view(&self, width: usize, ctx: &ViewContext<'_>) -> Vec<String> {
        let palette = ctx.palette;
        let mut lines = hero(palette, &contact_hero(palette.mode), width);

        if width >= 80 {
            let form_width = width * 3 / 5;
            let info_width = width - form_width - 4;
            lines.extend(join_horizontal(
                &[
                    (self.render_form(palette, form_width), form_width),
                    (Self::render_info(palette, info_width), info_width),
                ],
                4,
            ));
        } else {
            lines.extend(self.render_form(palette, width));
            lines.push(String::new());
            lines.extend(Self::render_info(palette, width));
        }
        lines.push(String::new());

        lines.push(heading(palette, "Frequently Asked Questions", width));
        lines.push(String::new());
        for faq in &FAQS {
            lines.extend(blurb_card(palette, faq, width));
        }
        lines
    }

    fn page(&self) -> Page {
        Page::Contact
    }

    fn hints(&self) -> &'static str {
        if self.focus.is_some() {
            "tab next  shift+tab prev  esc done"
        } else {
            "tab fill in form"
        }
    }

    fn captures_input(&self) -> bool {
        self.focus.is_some()
    }

    fn on_leave(&mut self) {
        self.focus = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogState;
    use theme_state::Mode;

    fn key(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(page: &mut ContactPage, text: &str) {
        for c in text.chars() {
            let _ = page.update(&key(KeyCode::Char(c)));
        }
    }

    fn fill(page: &mut ContactPage) {
        let _ = page.update(&key(KeyCode::Tab));
        type_text(page, "Ada");
        let _ = page.update(&key(KeyCode::Tab));
        type_text(page, "ada@example.com");
        let _ = page.update(&key(KeyCode::Tab));
        type_text(page, "Hello");
        let _ = page.update(&key(KeyCode::Tab));
        type_text(page, "Love the themes");
        let _ = page.update(&key(KeyCode::Tab));
    }

    fn render(page: &ContactPage, mode: Mode, width: usize) -> String {
        let palette = Palette::for_mode(mode).with_color(false);
        let catalog = CatalogState::loading();
        let ctx = ViewContext {
            palette: &palette,
            catalog: &catalog,
        };
        page.view(width, &ctx).join("\n")
    }

    #[test]
    fn tab_cycles_focus() {
        let mut page = ContactPage::new();
        assert!(!page.captures_input());
        let _ = page.update(&key(KeyCode::Tab));
        assert_eq!(page.focus(), Some(Field::Name));
        assert!(page.captures_input());
        let _ = page.update(&key(KeyCode::BackTab));
        assert_eq!(page.focus(), Some(Field::Send));
        let _ = page.update(&key(KeyCode::Tab));
        assert_eq!(page.focus(), Some(Field::Name));
        let _ = page.update(&key(KeyCode::Esc));
        assert_eq!(page.focus(), None);
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut page = ContactPage::new();
        let _ = page.update(&key(KeyCode::Tab));
        type_text(&mut page, "Adx");
        let _ = page.update(&key(KeyCode::Backspace));
        type_text(&mut page, "a");
        assert_eq!(page.form().name, "Ada");
        assert!(page.form().email.is_empty());
    }

    #[test]
    fn empty_form_is_rejected() {
        let mut page = ContactPage::new();
        for _ in 0..5 {
            let _ = page.update(&key(KeyCode::Tab));
        }
        assert_eq!(page.focus(), Some(Field::Send));
        assert!(page.update(&key(KeyCode::Enter)).is_none());
        assert!(!page.is_sending());
        assert!(render(&page, Mode::Light, 100).contains("Please fill in all fields."));
    }

    #[test]
    fn submit_sends_then_resets() {
        let mut page = ContactPage::new().with_submit_delay(Duration::ZERO);
        fill(&mut page);
        let cmd = page.update(&key(KeyCode::Enter)).expect("submit command");
        assert!(page.is_sending());
        assert!(render(&page, Mode::Dark, 100).contains("Sending..."));

        let msg = cmd.execute().expect("completion message");
        assert_eq!(msg, Msg::ContactSent);
        let _ = page.update(&msg);
        assert!(!page.is_sending());
        assert_eq!(page.form(), &ContactForm::default());
        assert!(render(&page, Mode::Dark, 100).contains(CONTACT_ACK));
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut page = ContactPage::new();
        let _ = page.update(&key(KeyCode::Tab));
        type_text(&mut page, "Ada");
        let _ = page.update(&key(KeyCode::Tab));
        type_text(&mut page, "nope");
        let _ = page.update(&key(KeyCode::Tab));
        type_text(&mut page, "Hi");
        let _ = page.update(&key(KeyCode::Tab));
        type_text(&mut page, "Body");
        let _ = page.update(&key(KeyCode::Tab));
        assert!(page.update(&key(KeyCode::Enter)).is_none());
        assert!(render(&page, Mode::Light, 60).contains("Please enter a valid email address."));
    }

    #[test]
    fn view_shows_details_and_faq() {
        let page = ContactPage::new();
        let text = render(&page, Mode::Colorful, 100);
        assert!(text.contains("Let's Connect!"));
        assert!(text.contains("hello@themezone.dev"));
        assert!(text.contains("Monday - Friday"));
        assert!(text.contains("How do I switch themes?"));
        assert!(text.contains("Your name"));
    }
}
