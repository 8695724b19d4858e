//! Integration tests for the theme authority.
//!
//! Tests verify:
//! - Set/get and exclusivity of the active mode
//! - Rejection of names outside the mode set
//! - Restoration across restarts (memory and file stores)
//! - Idempotent initialization and fallback for bad stored values
//! - Ordered delivery to multiple subscribers, including reentrant changes

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use proptest::prelude::*;
use theme_state::{
    FileStore, MemoryStore, Mode, NavigationSurface, PreferenceStore, RootClass, ThemeAuthority,
    ThemeError, ThemeState, select_navigation_surface,
};

fn ready(store: &MemoryStore) -> ThemeAuthority {
    let auth = ThemeAuthority::new(store.clone());
    auth.initialize();
    auth
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Light), Just(Mode::Dark), Just(Mode::Colorful)]
}

mod set_get_tests {
    use super::*;

    #[test]
    fn test_get_returns_last_set_mode() {
        let auth = ready(&MemoryStore::new());
        for mode in [Mode::Dark, Mode::Colorful, Mode::Light, Mode::Colorful] {
            let _ = auth.set_mode(mode);
            assert_eq!(auth.current(), mode);
            assert_eq!(auth.snapshot().current, mode);
        }
    }

    #[test]
    fn test_exactly_one_surface_per_mode() {
        let auth = ready(&MemoryStore::new());
        let marker = RootClass::new();
        let auth_with_marker = ThemeAuthority::new(MemoryStore::new()).with_marker(marker.clone());
        auth_with_marker.initialize();

        for mode in Mode::all() {
            let _ = auth.set_mode(mode);
            let _ = auth_with_marker.set_mode(mode);

            let surface = select_navigation_surface(auth.current());
            let expected = if mode == Mode::Dark {
                NavigationSurface::Sidebar
            } else {
                NavigationSurface::Header
            };
            assert_eq!(surface, expected);
            assert_eq!(marker.class(), mode.root_class());
        }
    }

    #[test]
    fn test_unknown_names_leave_state_and_store_untouched() {
        let store = MemoryStore::new();
        let auth = ready(&store);
        let _ = auth.set_mode(Mode::Colorful);
        let writes = store.writes();

        for name in ["neon", "", "Dark", "LIGHT", " colorful", "theme-dark"] {
            let err = auth.set_mode_named(name).unwrap_err();
            assert_eq!(err, ThemeError::InvalidMode(name.to_string()));
            assert_eq!(auth.current(), Mode::Colorful);
        }
        assert_eq!(store.writes(), writes);
        assert_eq!(store.value().as_deref(), Some("colorful"));
    }
}

mod startup_tests {
    use super::*;

    #[test]
    fn test_restart_restores_last_mode() {
        let store = MemoryStore::new();
        {
            let auth = ready(&store);
            let _ = auth.set_mode(Mode::Dark);
        }

        let restarted = ThemeAuthority::new(store.clone());
        assert!(restarted.is_initializing());
        let state = restarted.initialize();
        assert_eq!(
            state,
            ThemeState {
                current: Mode::Dark,
                is_initializing: false
            }
        );
    }

    #[test]
    fn test_initialize_twice_is_stable() {
        let store = MemoryStore::with_value("colorful");
        let auth = ThemeAuthority::new(store.clone());
        let first = auth.initialize();
        let second = auth.initialize();
        assert_eq!(first, second);
        assert_eq!(second.current, Mode::Colorful);
        assert_eq!(auth.diagnostics().initializations, 2);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_bad_stored_value_falls_back_to_light() {
        let store = MemoryStore::with_value("neon");
        let auth = ThemeAuthority::new(store.clone());
        let state = auth.initialize();
        assert_eq!(state.current, Mode::Light);
        assert!(!state.is_initializing);
        // The bad value is not rewritten until the user picks a mode.
        assert_eq!(store.value().as_deref(), Some("neon"));
    }

    #[test]
    fn test_placeholder_window_ends_on_initialize() {
        let auth = ThemeAuthority::new(MemoryStore::with_value("dark"));
        let flips = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&flips);
        let _sub = auth.subscribe(move |state| sink.lock().push(state.is_initializing));

        assert!(auth.snapshot().is_initializing);
        auth.initialize();
        assert_eq!(*flips.lock(), vec![false]);
    }
}

mod broadcast_tests {
    use super::*;

    #[test]
    fn test_two_subscribers_see_same_sequence() {
        let auth = ready(&MemoryStore::new());
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&first);
        let _a = auth.subscribe(move |state| sink.lock().push(state.current));
        let sink = Arc::clone(&second);
        let _b = auth.subscribe(move |state| sink.lock().push(state.current));

        let _ = auth.set_mode(Mode::Dark);
        let _ = auth.set_mode(Mode::Colorful);

        assert_eq!(*first.lock(), vec![Mode::Dark, Mode::Colorful]);
        assert_eq!(*first.lock(), *second.lock());
    }

    #[test]
    fn test_reentrant_change_is_delivered_after_current_one() {
        let auth = Arc::new(ready(&MemoryStore::new()));
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        // The first subscriber reacts to dark by switching to colorful. The
        // second subscriber must still see dark before colorful.
        let sink = Arc::clone(&first);
        let weak = Arc::downgrade(&auth);
        let _a = auth.subscribe(move |state| {
            sink.lock().push(state.current);
            if state.current == Mode::Dark {
                if let Some(auth) = weak.upgrade() {
                    let _ = auth.set_mode(Mode::Colorful);
                }
            }
        });
        let sink = Arc::clone(&second);
        let _b = auth.subscribe(move |state| sink.lock().push(state.current));

        let _ = auth.set_mode(Mode::Dark);

        assert_eq!(*first.lock(), vec![Mode::Dark, Mode::Colorful]);
        assert_eq!(*second.lock(), vec![Mode::Dark, Mode::Colorful]);
        assert_eq!(auth.current(), Mode::Colorful);
    }

    #[test]
    fn test_concurrent_changes_reach_everyone_in_one_order() {
        let auth = Arc::new(ready(&MemoryStore::new()));
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&first);
        let _a = auth.subscribe(move |state| sink.lock().push(state.current));
        let sink = Arc::clone(&second);
        let _b = auth.subscribe(move |state| sink.lock().push(state.current));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let auth = Arc::clone(&auth);
                thread::spawn(move || {
                    for j in 0..25 {
                        let mode = Mode::all()[(i + j) % 3];
                        let _ = auth.set_mode(mode);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let first = first.lock().clone();
        let second = second.lock().clone();
        assert_eq!(first, second);
        assert_eq!(first.last().copied().unwrap_or(Mode::Light), auth.current());
    }

    #[test]
    fn test_dropped_subscription_stops_delivery() {
        let auth = ready(&MemoryStore::new());
        let seen = Arc::new(Mutex::new(0_u32));
        let counter = Arc::clone(&seen);
        let sub = auth.subscribe(move |_| *counter.lock() += 1);

        let _ = auth.set_mode(Mode::Dark);
        sub.unsubscribe();
        let _ = auth.set_mode(Mode::Light);

        assert_eq!(*seen.lock(), 1);
        assert_eq!(auth.listener_count(), 0);
    }
}

mod file_store_tests {
    use super::*;

    #[test]
    fn test_end_to_end_with_file_store() {
        let dir = tempfile::tempdir().unwrap();

        let auth = ThemeAuthority::new(FileStore::in_dir(dir.path()));
        assert_eq!(auth.initialize().current, Mode::Light);
        assert!(auth.set_mode(Mode::Colorful).is_saved());
        drop(auth);

        let store = FileStore::in_dir(dir.path());
        assert_eq!(store.read().as_deref(), Some("colorful"));

        let restarted = ThemeAuthority::new(store);
        assert_eq!(restarted.initialize().current, Mode::Colorful);
    }

    #[test]
    fn test_unwritable_file_store_keeps_memory_change() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let auth = ThemeAuthority::new(FileStore::in_dir(&blocker));
        auth.initialize();
        let outcome = auth.set_mode(Mode::Dark);

        assert!(!outcome.is_saved());
        assert_eq!(auth.current(), Mode::Dark);
        assert_eq!(auth.diagnostics().write_failures, 1);
    }
}

proptest! {
    #[test]
    fn test_any_sequence_ends_on_last_mode(modes in proptest::collection::vec(mode_strategy(), 1..20)) {
        let store = MemoryStore::new();
        let auth = ready(&store);
        for mode in &modes {
            let _ = auth.set_mode(*mode);
        }
        let last = *modes.last().unwrap();
        prop_assert_eq!(auth.current(), last);
        prop_assert_eq!(store.value(), Some(last.as_str().to_string()));

        let restarted = ThemeAuthority::new(store.clone());
        prop_assert_eq!(restarted.initialize().current, last);
    }

    #[test]
    fn test_non_mode_names_are_rejected(name in "[a-zA-Z -]{0,12}") {
        prop_assume!(!matches!(name.as_str(), "light" | "dark" | "colorful"));
        let store = MemoryStore::new();
        let auth = ready(&store);
        let _ = auth.set_mode(Mode::Dark);

        prop_assert!(auth.set_mode_named(&name).is_err());
        prop_assert_eq!(auth.current(), Mode::Dark);
        let saved = store.value();
        prop_assert_eq!(saved.as_deref(), Some("dark"));
    }
}
