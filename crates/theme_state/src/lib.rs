#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::return_self_not_must_use)]

//! # theme_state
//!
//! A process-wide authority for the active presentation mode of an
//! application.
//!
//! The authority holds one of three modes ([`Mode::Light`], [`Mode::Dark`],
//! [`Mode::Colorful`]), writes every change through to a durable
//! [`PreferenceStore`], restores the saved choice on startup, applies a
//! global [`PresentationMarker`] and broadcasts each change to subscribers
//! in a single ordered stream.
//!
//! ## Quick start
//!
//! ```rust
//! use theme_state::{MemoryStore, Mode, ThemeAuthority};
//!
//! let store = MemoryStore::with_value("dark");
//! let theme = ThemeAuthority::new(store.clone()).into_handle();
//!
//! let state = theme.initialize();
//! assert_eq!(state.current, Mode::Dark);
//! assert!(!state.is_initializing);
//!
//! let _sub = theme.subscribe(|state| println!("now {}", state.current));
//! assert!(theme.set_mode(Mode::Colorful).is_saved());
//! assert_eq!(store.value().as_deref(), Some("colorful"));
//! ```
//!
//! ## Startup
//!
//! Until [`ThemeAuthority::initialize`] has run, [`ThemeState::is_initializing`]
//! is `true` and `current` is only the default. Consumers should render a
//! neutral placeholder instead of a themed view during that window.

pub mod authority;
pub mod channel;
pub mod error;
pub mod layout;
pub mod marker;
pub mod mode;
pub mod store;

pub use authority::{Diagnostics, Persistence, ThemeAuthority, ThemeHandle, ThemeState};
pub use channel::{ListenerId, Subscription, ThemeListener};
pub use error::{StoreError, ThemeError};
pub use layout::{NavigationSurface, select_navigation_surface};
pub use marker::{PresentationMarker, RootClass};
pub use mode::Mode;
pub use store::{FileStore, MemoryStore, PREFERENCES_FILE, PreferenceStore, STORAGE_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Mode, NavigationSurface, Persistence, PreferenceStore, Subscription, ThemeAuthority,
        ThemeHandle, ThemeState, select_navigation_surface,
    };
}
