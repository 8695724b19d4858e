//! Program lifecycle and event loop.
//!
//! [`Program`] owns the terminal while a [`Model`] runs: it enters raw mode,
//! forwards crossterm events and command results to the model as [`Msg`]s
//! and redraws whenever the rendered view changes.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::{debug, trace};

use crate::messages::Msg;

/// Errors that can occur while running a program.
#[derive(thiserror::Error, Debug)]
pub enum ProgramError {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    #[error("failed to {action} raw mode: {source}")]
    RawMode {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    /// Failed to enter or leave the alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreen {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to write a frame.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] for program operations.
pub type Result<T> = std::result::Result<T, ProgramError>;

/// A deferred side effect that may produce a message.
///
/// Commands run on their own thread so a slow command never blocks input
/// handling or rendering.
pub struct Cmd(Box<dyn FnOnce() -> Option<Msg> + Send + 'static>);

impl std::fmt::Debug for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Cmd")
    }
}

impl Cmd {
    /// Command producing a message.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Msg + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Msg> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Command that stops the program.
    #[must_use]
    pub fn quit() -> Self {
        Self::new(|| Msg::Quit)
    }

    /// Run the command on the current thread.
    #[must_use]
    pub fn execute(self) -> Option<Msg> {
        (self.0)()
    }
}

/// An application driven by [`Program`].
pub trait Model {
    /// Commands to run at startup.
    fn init(&mut self) -> Vec<Cmd>;

    /// Handle a message, returning an optional command.
    fn update(&mut self, msg: Msg) -> Option<Cmd>;

    /// Render the current state as newline-separated lines.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Input polling rate.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            fps: 30,
        }
    }
}

/// Runs a [`Model`] against the terminal.
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
}

impl<M: Model> Program<M> {
    /// Create a program for `model`.
    pub fn new(model: M) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            model,
            options: ProgramOptions::default(),
            tx,
            rx,
        }
    }

    /// Enable or disable the alternate screen.
    #[must_use]
    pub const fn with_alt_screen(mut self, alt_screen: bool) -> Self {
        self.options.alt_screen = alt_screen;
        self
    }

    /// Set the input polling rate.
    #[must_use]
    pub const fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps;
        self
    }

    /// Sender for injecting messages from other threads.
    ///
    /// Theme subscriptions use this to wake the loop on every change.
    pub fn sender(&self) -> Sender<Msg> {
        self.tx.clone()
    }

    /// Run on stdout and return the final model.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or written to.
    pub fn run(self) -> Result<M> {
        self.run_with_writer(io::stdout())
    }

    /// Run on a custom writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or written to.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();

        enable_raw_mode().map_err(|source| ProgramError::RawMode {
            action: "enable",
            source,
        })?;

        if options.alt_screen {
            if let Err(source) = execute!(writer, EnterAlternateScreen) {
                let _ = disable_raw_mode();
                return Err(ProgramError::AltScreen {
                    action: "enter",
                    source,
                });
            }
        }

        let _ = execute!(writer, Hide);
        debug!(alt_screen = options.alt_screen, "Terminal acquired");

        let result = self.event_loop(&mut writer);

        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
        debug!("Terminal released");

        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        if let Ok((width, height)) = terminal::size() {
            let _ = self.tx.send(Msg::Resize { width, height });
        }

        for cmd in self.model.init() {
            self.handle_command(cmd);
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame = Duration::from_secs_f64(1.0 / f64::from(self.options.fps.max(1)));

        loop {
            if event::poll(frame).map_err(ProgramError::EventPoll)? {
                match event::read().map_err(ProgramError::EventPoll)? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            return Ok(self.model);
                        }
                        let _ = self.tx.send(Msg::Key(key));
                    }
                    Event::Resize(width, height) => {
                        // Terminal contents are undefined after a resize.
                        last_view.clear();
                        let _ = self.tx.send(Msg::Resize { width, height });
                    }
                    _ => {}
                }
            }

            let mut needs_render = false;
            while let Ok(msg) = self.rx.try_recv() {
                if msg == Msg::Quit {
                    return Ok(self.model);
                }
                trace!(?msg, "Dispatching message");
                if let Some(cmd) = self.model.update(msg) {
                    self.handle_command(cmd);
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    fn handle_command(&self, cmd: Cmd) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            if let Some(msg) = cmd.execute() {
                let _ = tx.send(msg);
            }
        });
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();
        if view == *last_view {
            return Ok(());
        }

        queue!(writer, Clear(ClearType::All)).map_err(ProgramError::Render)?;
        for (row, line) in view.lines().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(writer, MoveTo(0, row)).map_err(ProgramError::Render)?;
            write!(writer, "{line}").map_err(ProgramError::Render)?;
        }
        writer.flush().map_err(ProgramError::Render)?;

        *last_view = view;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_executes_closure() {
        let cmd = Cmd::new(|| Msg::ContactSent);
        assert_eq!(cmd.execute(), Some(Msg::ContactSent));
    }

    #[test]
    fn optional_cmd_may_be_silent() {
        assert_eq!(Cmd::new_optional(|| None).execute(), None);
    }

    #[test]
    fn quit_cmd_produces_quit() {
        assert_eq!(Cmd::quit().execute(), Some(Msg::Quit));
    }

    #[test]
    fn program_error_messages() {
        let err = ProgramError::RawMode {
            action: "enable",
            source: io::Error::other("not a tty"),
        };
        assert_eq!(err.to_string(), "failed to enable raw mode: not a tty");
    }

    struct Counter(u32);

    impl Model for Counter {
        fn init(&mut self) -> Vec<Cmd> {
            Vec::new()
        }

        fn update(&mut self, _msg: Msg) -> Option<Cmd> {
            self.0 += 1;
            None
        }

        fn view(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn sender_reaches_queue() {
        let program = Program::new(Counter(0)).with_alt_screen(false).with_fps(60);
        program.sender().send(Msg::ContactSent).unwrap();
        assert_eq!(program.rx.try_recv().unwrap(), Msg::ContactSent);
        assert!(!program.options.alt_screen);
        assert_eq!(program.options.fps, 60);
    }
}
