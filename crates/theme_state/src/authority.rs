//! The theme state authority.
//!
//! [`ThemeAuthority`] owns the one [`ThemeState`] of a running application.
//! It is shared as an `Arc` handle and is the only thing allowed to change
//! the active mode or touch the preference store.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::channel::{Channel, ListenerId, Subscription, ThemeListener};
use crate::error::{StoreError, ThemeError};
use crate::marker::PresentationMarker;
use crate::mode::Mode;
use crate::store::PreferenceStore;

/// Shared handle to the authority.
pub type ThemeHandle = Arc<ThemeAuthority>;

/// The authoritative theme record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeState {
    /// Active mode.
    pub current: Mode,
    /// True until the persisted preference has been read once.
    ///
    /// While set, `current` is the default and not necessarily the user's
    /// saved choice; consumers render a neutral placeholder instead.
    pub is_initializing: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            current: Mode::default(),
            is_initializing: true,
        }
    }
}

/// Outcome of the write-through that follows a mode change.
///
/// The in-memory mode is applied either way; `Unsaved` only means the
/// choice may not survive a restart.
#[must_use]
#[derive(Debug)]
pub enum Persistence {
    /// The store holds the new value.
    Saved,
    /// The store rejected the write.
    Unsaved(StoreError),
}

impl Persistence {
    /// Whether the write-through succeeded.
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// The write error, if any.
    pub const fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Saved => None,
            Self::Unsaved(err) => Some(err),
        }
    }
}

/// Counters for persistence health.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Completed `initialize` calls.
    pub initializations: u32,
    /// Store reads that failed and were treated as absent.
    pub read_failures: u32,
    /// Stored values discarded because they were not a mode name.
    pub discarded_values: u32,
    /// Mode names rejected by `set_mode_named`.
    pub rejected_names: u32,
    /// Successful write-throughs.
    pub writes: u64,
    /// Failed write-throughs.
    pub write_failures: u64,
    /// Message of the most recent write failure.
    pub last_write_error: Option<String>,
}

/// Sole owner and mutator of the application's [`ThemeState`].
pub struct ThemeAuthority {
    state: RwLock<ThemeState>,
    store: Box<dyn PreferenceStore>,
    marker: Option<Box<dyn PresentationMarker>>,
    channel: Arc<Channel>,
    diagnostics: Mutex<Diagnostics>,
}

impl fmt::Debug for ThemeAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeAuthority")
            .field("state", &*self.state.read())
            .field("marker", &self.marker.is_some())
            .field("channel", &self.channel)
            .finish()
    }
}

impl ThemeAuthority {
    /// Create an authority over `store`, in the initializing state.
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self {
            state: RwLock::new(ThemeState::default()),
            store: Box::new(store),
            marker: None,
            channel: Arc::new(Channel::new()),
            diagnostics: Mutex::new(Diagnostics::default()),
        }
    }

    /// Install the global presentation marker.
    pub fn with_marker(mut self, marker: impl PresentationMarker + 'static) -> Self {
        self.marker = Some(Box::new(marker));
        self
    }

    /// Wrap in a shared handle.
    pub fn into_handle(self) -> ThemeHandle {
        Arc::new(self)
    }

    /// Load the persisted preference and leave the initializing state.
    ///
    /// A stored mode name replaces `current`; an absent, unreadable or
    /// unrecognized value leaves `current` untouched. Meant to run once at
    /// startup; running it again repeats the same read and validation.
    pub fn initialize(&self) -> ThemeState {
        let (before, after) = {
            let mut state = self.state.write();
            let before = *state;

            let raw = match self.store.try_read() {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(error = %err, "Theme preference unreadable, using current mode");
                    self.diagnostics.lock().read_failures += 1;
                    None
                }
            };

            if let Some(raw) = raw {
                match raw.parse::<Mode>() {
                    Ok(mode) => state.current = mode,
                    Err(_) => {
                        warn!(
                            theme.stored = %raw,
                            theme.fallback = %state.current,
                            "Discarding unrecognized stored theme"
                        );
                        self.diagnostics.lock().discarded_values += 1;
                    }
                }
            }

            state.is_initializing = false;
            self.apply_marker(state.current);

            let after = *state;
            if after != before {
                self.channel.enqueue(after);
            }
            (before, after)
        };

        let mut diagnostics = self.diagnostics.lock();
        diagnostics.initializations += 1;
        let repeat = diagnostics.initializations > 1;
        drop(diagnostics);

        if repeat {
            debug!(theme.mode = %after.current, "Theme authority re-initialized");
        } else {
            info!(theme.mode = %after.current, "Theme authority initialized");
        }
        if after != before {
            self.channel.drain();
        }
        after
    }

    /// Active mode. Before initialization this is the default.
    pub fn current(&self) -> Mode {
        self.state.read().current
    }

    /// Whether the persisted preference is still unread.
    pub fn is_initializing(&self) -> bool {
        self.state.read().is_initializing
    }

    /// Copy of the full state, for a consistent first render.
    pub fn snapshot(&self) -> ThemeState {
        *self.state.read()
    }

    /// Change the active mode and write it through to the store.
    ///
    /// The mode is applied in memory before the store is written, so a
    /// failed write never rolls back the change. Subscribers are notified
    /// only when the mode actually changed.
    pub fn set_mode(&self, mode: Mode) -> Persistence {
        let (from, changed, persistence) = {
            let mut state = self.state.write();
            let from = state.current;
            state.current = mode;

            let persistence = match self.store.write(mode.as_str()) {
                Ok(()) => {
                    self.diagnostics.lock().writes += 1;
                    Persistence::Saved
                }
                Err(err) => {
                    warn!(theme.mode = %mode, error = %err, "Theme change not persisted");
                    let mut diagnostics = self.diagnostics.lock();
                    diagnostics.write_failures += 1;
                    diagnostics.last_write_error = Some(err.to_string());
                    Persistence::Unsaved(err)
                }
            };

            self.apply_marker(mode);

            let changed = from != mode;
            if changed {
                self.channel.enqueue(*state);
            }
            (from, changed, persistence)
        };

        if changed {
            info!(theme.from = %from, theme.to = %mode, "Theme switched");
            self.channel.drain();
        }
        persistence
    }

    /// Change the active mode by name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidMode`] for names outside the mode set;
    /// the state is left unchanged.
    pub fn set_mode_named(&self, name: &str) -> Result<Persistence, ThemeError> {
        match name.parse::<Mode>() {
            Ok(mode) => Ok(self.set_mode(mode)),
            Err(err) => {
                warn!(theme.requested = %name, "Rejected invalid theme mode");
                self.diagnostics.lock().rejected_names += 1;
                Err(err)
            }
        }
    }

    /// Register a callback for every state change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ThemeState) + Send + Sync + 'static,
    {
        self.subscribe_listener(Arc::new(callback))
    }

    /// Register a shared listener for every state change.
    pub fn subscribe_listener(&self, listener: Arc<dyn ThemeListener>) -> Subscription {
        let id = self.channel.register(listener);
        Subscription::new(id, &self.channel)
    }

    /// Remove a listener registered through a detached subscription.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.channel.remove(id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.channel.listener_count()
    }

    /// Persistence health counters.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics.lock().clone()
    }

    fn apply_marker(&self, mode: Mode) {
        if let Some(marker) = &self.marker {
            marker.apply(mode);
        }
    }
}
