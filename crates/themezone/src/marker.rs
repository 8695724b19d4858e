//! Terminal-level presentation marker.

use std::io::{self, Write};

use crossterm::{execute, terminal::SetTitle};
use theme_state::{Mode, PresentationMarker};
use tracing::debug;

/// Marks the active mode in the terminal window title.
///
/// This is the process-global marker for the interactive front-end: it
/// is visible outside the frame and always names the mode last applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalTitle;

impl TerminalTitle {
    /// Title text for `mode`.
    #[must_use]
    pub fn title(mode: Mode) -> String {
        match mode.root_class() {
            "" => "ThemeZone".to_string(),
            class => format!("ThemeZone [{class}]"),
        }
    }
}

impl PresentationMarker for TerminalTitle {
    fn apply(&self, mode: Mode) {
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, SetTitle(Self::title(mode))).and_then(|()| stdout.flush()) {
            debug!(error = %err, "Could not set terminal title");
        }
    }
}
