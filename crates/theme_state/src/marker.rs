//! Global presentation marker.
//!
//! Styling layers that do not subscribe to change notifications read a
//! single process-level marker instead. The authority applies it on every
//! successful change, so it always names the mode that was just set.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::mode::Mode;

/// Receives the active mode whenever the authority changes it.
///
/// Implementations must be idempotent: applying the same mode twice leaves
/// the same result as applying it once.
pub trait PresentationMarker: Send + Sync {
    /// Reflect `mode` in the global presentation.
    fn apply(&self, mode: Mode);
}

impl<F> PresentationMarker for F
where
    F: Fn(Mode) + Send + Sync,
{
    fn apply(&self, mode: Mode) {
        self(mode);
    }
}

/// Root class marker holding exactly one class at a time.
///
/// Light clears the marker; dark and colorful set `theme-dark` and
/// `theme-colorful`. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct RootClass {
    class: Arc<RwLock<&'static str>>,
}

impl RootClass {
    /// Empty marker (light presentation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Class currently applied; empty for light.
    pub fn class(&self) -> &'static str {
        *self.class.read()
    }
}

impl PresentationMarker for RootClass {
    fn apply(&self, mode: Mode) {
        *self.class.write() = mode.root_class();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_class_tracks_latest_mode() {
        let marker = RootClass::new();
        assert_eq!(marker.class(), "");

        marker.apply(Mode::Dark);
        assert_eq!(marker.class(), "theme-dark");

        marker.apply(Mode::Colorful);
        assert_eq!(marker.class(), "theme-colorful");

        marker.apply(Mode::Light);
        assert_eq!(marker.class(), "");
    }

    #[test]
    fn root_class_is_idempotent() {
        let marker = RootClass::new();
        marker.apply(Mode::Dark);
        marker.apply(Mode::Dark);
        assert_eq!(marker.class(), "theme-dark");
    }

    #[test]
    fn closures_are_markers() {
        let seen = Arc::new(RwLock::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let marker = move |mode: Mode| sink.write().push(mode);
        marker.apply(Mode::Colorful);
        assert_eq!(*seen.read(), vec![Mode::Colorful]);
    }
}
