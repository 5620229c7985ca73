//! Tinct Theme System
//!
//! A theme preference store with persistence, presentation-surface
//! mirroring, and OS dark-mode sync.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Preference state**: theme name, light/dark mode, spacing density,
//!   table border toggle, session-only sidebar flag
//! - **Persistence**: durable key-value storage (in-memory or TOML file),
//!   read once at mount, written through on every change
//! - **Surface sync**: a one-way mapping from state to root element
//!   attributes (`data-theme`, `data-spacing`, `data-table-border`, and
//!   the `dark` class)
//! - **OS sync**: a subscribe/unsubscribe color scheme signal, followed
//!   while mode is `sync`
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tinct_theme::{
//!     FixedScheme, MemoryStore, MemorySurface, ThemeMode, ThemeStore,
//! };
//!
//! let surface = MemorySurface::new();
//! let store = ThemeStore::new(
//!     Arc::new(MemoryStore::new()),
//!     Box::new(surface.clone()),
//!     Arc::new(FixedScheme::default()),
//! );
//! store.mount();
//!
//! store.set_theme("luxury");
//! assert_eq!(surface.attr("data-theme"), Some("luxury".to_string()));
//!
//! store.set_mode(ThemeMode::Dark);
//! assert_eq!(surface.attr("data-theme"), Some("dark".to_string()));
//!
//! store.unmount();
//! ```
//!
//! # Architecture
//!
//! The store is an explicit object: storage, surface, and scheme source
//! are injected at construction, and the mount/unmount lifecycle is
//! stated rather than implied by a framework. Effective-theme derivation
//! is a pure function of `(mode, stored name, OS scheme)` and is
//! recomputed on every transition.

pub mod color;
pub mod platform;
pub mod preference;
pub mod presets;
pub mod scheme;
pub mod state;
pub mod storage;
pub mod surface;

#[cfg(feature = "watcher")]
pub mod watcher;

// Re-export commonly used types
pub use color::Color;
pub use platform::{detect_system_color_scheme, Platform};
pub use preference::{
    resolve_effective, SpacingDensity, ThemeMode, ThemePreference, DARK_THEME,
};
pub use presets::{Palette, ThemePreset};
pub use scheme::{
    ColorScheme, FixedScheme, SchemeListener, SchemeSource, SchemeSubscription, SharedScheme,
};
pub use state::ThemeStore;
pub use storage::{keys, FileStore, MemoryStore, PreferenceStore};
pub use surface::{MemorySurface, NullSurface, PresentationSurface, RootAttrs};

#[cfg(feature = "watcher")]
pub use watcher::{SystemSchemeWatcher, WatcherConfig};
