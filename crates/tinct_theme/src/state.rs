//! Theme preference store
//!
//! `ThemeStore` is the single source of truth for the display theme. It is
//! an explicit object handed to whichever subtree needs it — collaborators
//! (storage, surface, scheme source) are injected at construction, and the
//! lifecycle is explicit: [`ThemeStore::mount`] seeds state from storage
//! and acquires the OS scheme subscription, [`ThemeStore::unmount`]
//! releases it unconditionally.
//!
//! The store is a cheap clone-to-share handle; clones operate on the same
//! underlying state.
//!
//! All operations are synchronous and idempotent. The display setters
//! re-derive the effective theme, rewrite the full surface snapshot, and
//! write storage through; the sidebar flag is in-memory only.

use crate::preference::{SpacingDensity, ThemeMode, ThemePreference, DARK_THEME};
use crate::scheme::{ColorScheme, SchemeListener, SchemeSource, SchemeSubscription};
use crate::storage::{keys, PreferenceStore};
use crate::surface::{PresentationSurface, RootAttrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tracing::debug;

struct StoreInner {
    /// Current in-memory preference values.
    pref: RwLock<ThemePreference>,

    /// Durable key-value storage.
    storage: Arc<dyn PreferenceStore>,

    /// Rendering target for the attribute mirror.
    surface: Mutex<Box<dyn PresentationSurface>>,

    /// OS color scheme signal.
    scheme: Arc<dyn SchemeSource>,

    /// Live OS subscription while mounted in sync mode.
    subscription: Mutex<Option<SchemeSubscription>>,

    /// Guard against double initialization.
    mounted: AtomicBool,
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        // Subscription release is unconditional even when the owner forgot
        // to unmount.
        if let Some(sub) = self.subscription.lock().unwrap().take() {
            self.scheme.unsubscribe(sub);
        }
    }
}

/// Theme preference store handle.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    /// Create a store with default initial preferences.
    pub fn new(
        storage: Arc<dyn PreferenceStore>,
        surface: Box<dyn PresentationSurface>,
        scheme: Arc<dyn SchemeSource>,
    ) -> Self {
        Self::with_initial(
            storage,
            surface,
            scheme,
            ThemePreference::DEFAULT_THEME,
            ThemeMode::Default,
        )
    }

    /// Create a store with explicit initial theme and mode.
    ///
    /// The initial values hold until [`ThemeStore::mount`], which seeds
    /// state from storage (the initial mode stays in effect when no mode
    /// was persisted).
    pub fn with_initial(
        storage: Arc<dyn PreferenceStore>,
        surface: Box<dyn PresentationSurface>,
        scheme: Arc<dyn SchemeSource>,
        theme: impl Into<String>,
        mode: ThemeMode,
    ) -> Self {
        let pref = ThemePreference {
            theme: theme.into(),
            mode,
            ..ThemePreference::default()
        };
        Self {
            inner: Arc::new(StoreInner {
                pref: RwLock::new(pref),
                storage,
                surface: Mutex::new(surface),
                scheme,
                subscription: Mutex::new(None),
                mounted: AtomicBool::new(false),
            }),
        }
    }

    /// Current in-memory preference values.
    pub fn state(&self) -> ThemePreference {
        self.inner.pref.read().unwrap().clone()
    }

    /// The theme identifier the surface is showing, derived fresh.
    pub fn effective_theme(&self) -> String {
        let pref = self.inner.pref.read().unwrap();
        crate::preference::resolve_effective(pref.mode, &pref.theme, self.inner.scheme.current())
            .to_string()
    }

    // ========== Lifecycle ==========

    /// Seed state from storage and acquire the OS subscription.
    ///
    /// Runs once per store; later calls are no-ops. Persisted theme,
    /// spacing, and table-border values are applied through the same
    /// routines the setters use, with defaults when absent; a persisted
    /// mode takes precedence over the constructor's.
    pub fn mount(&self) {
        if self.inner.mounted.swap(true, Ordering::SeqCst) {
            return;
        }

        let stored_theme = self.inner.storage.get(keys::THEME);
        let stored_spacing = self
            .inner
            .storage
            .get(keys::SPACING)
            .and_then(|s| SpacingDensity::from_id(&s));
        let stored_border = self
            .inner
            .storage
            .get(keys::TABLE_BORDER)
            .map(|s| parse_flag(&s));

        let seed_theme = stored_theme
            .as_deref()
            .unwrap_or(ThemePreference::DEFAULT_THEME)
            .to_string();
        {
            let mut pref = self.inner.pref.write().unwrap();
            pref.theme = seed_theme.clone();
            if let Some(mode) = self
                .inner
                .storage
                .get(keys::THEME_MODE)
                .and_then(|m| ThemeMode::from_id(&m))
            {
                pref.mode = mode;
            }
        }

        self.apply_theme(&seed_theme, None);
        self.apply_spacing(stored_spacing.unwrap_or_default());
        self.apply_table_border(stored_border.unwrap_or(true));
        self.reconcile_subscription();

        debug!(
            "ThemeStore::mount: state={:?} effective={}",
            self.state(),
            self.effective_theme()
        );
    }

    /// Release the OS subscription. Safe to call regardless of mode.
    pub fn unmount(&self) {
        if let Some(sub) = self.inner.subscription.lock().unwrap().take() {
            self.inner.scheme.unsubscribe(sub);
        }
        self.inner.mounted.store(false, Ordering::SeqCst);
        debug!("ThemeStore::unmount");
    }

    // ========== Setters ==========

    /// Set the stored theme name.
    ///
    /// The name is persisted unless the resolved mode currently forces
    /// `"dark"`, in which case only the in-memory value changes and the
    /// surface keeps showing `"dark"`.
    pub fn set_theme(&self, name: &str) {
        debug!("ThemeStore::set_theme: {name}");
        self.inner.pref.write().unwrap().theme = name.to_string();
        self.apply_theme(name, None);
    }

    /// Change the light/dark resolution mode.
    ///
    /// Re-resolves the effective theme under the new mode, persists the
    /// mode, and reconciles the OS subscription (held only while mounted
    /// in sync mode).
    pub fn set_mode(&self, mode: ThemeMode) {
        let current = self.state();
        if current.mode == mode {
            return;
        }
        debug!("ThemeStore::set_mode: {} -> {}", current.mode, mode);
        self.apply_theme(&current.theme, Some(mode));
        self.reconcile_subscription();
    }

    /// Set the spacing density.
    pub fn set_spacing(&self, spacing: SpacingDensity) {
        debug!("ThemeStore::set_spacing: {spacing}");
        self.apply_spacing(spacing);
    }

    /// Toggle table borders.
    pub fn set_table_border(&self, flag: bool) {
        debug!("ThemeStore::set_table_border: {flag}");
        self.apply_table_border(flag);
    }

    /// Session-only sidebar layout flag: state only, no surface write, no
    /// persistence.
    pub fn set_sidebar_expanded(&self, flag: bool) {
        debug!("ThemeStore::set_sidebar_expanded: {flag}");
        self.inner.pref.write().unwrap().sidebar_expanded = flag;
    }

    // ========== Internal apply routines ==========

    /// Apply a theme name, optionally switching mode.
    ///
    /// Mirrors the surface from the full preference snapshot. The raw name
    /// is written to state and storage only when the resolved mode does not
    /// force dark; a mode passed in is always adopted and persisted.
    fn apply_theme(&self, requested: &str, new_mode: Option<ThemeMode>) {
        let os = self.inner.scheme.current();
        let attrs = {
            let mut pref = self.inner.pref.write().unwrap();
            if let Some(mode) = new_mode {
                pref.mode = mode;
                self.inner.storage.set(keys::THEME_MODE, mode.id());
            }
            if !pref.mode.forces_dark(os) {
                pref.theme = requested.to_string();
                self.inner.storage.set(keys::THEME, requested);
            }
            RootAttrs::derive(&pref, os)
        };
        self.sync_surface(&attrs);
    }

    fn apply_spacing(&self, spacing: SpacingDensity) {
        let os = self.inner.scheme.current();
        let attrs = {
            let mut pref = self.inner.pref.write().unwrap();
            pref.spacing = spacing;
            self.inner.storage.set(keys::SPACING, spacing.id());
            RootAttrs::derive(&pref, os)
        };
        self.sync_surface(&attrs);
    }

    fn apply_table_border(&self, flag: bool) {
        let os = self.inner.scheme.current();
        let attrs = {
            let mut pref = self.inner.pref.write().unwrap();
            pref.table_border = flag;
            self.inner
                .storage
                .set(keys::TABLE_BORDER, if flag { "true" } else { "false" });
            RootAttrs::derive(&pref, os)
        };
        self.sync_surface(&attrs);
    }

    fn sync_surface(&self, attrs: &RootAttrs) {
        self.inner.surface.lock().unwrap().apply(attrs);
    }

    // ========== OS scheme handling ==========

    /// Hold a subscription exactly while the mounted store is in sync mode.
    fn reconcile_subscription(&self) {
        let want = self.inner.pref.read().unwrap().mode == ThemeMode::Sync
            && self.inner.mounted.load(Ordering::SeqCst);
        let mut sub = self.inner.subscription.lock().unwrap();
        if want && sub.is_none() {
            let weak = Arc::downgrade(&self.inner);
            let listener: SchemeListener = Arc::new(move |scheme| {
                if let Some(inner) = weak.upgrade() {
                    ThemeStore { inner }.handle_scheme_change(scheme);
                }
            });
            *sub = Some(self.inner.scheme.subscribe(listener));
            debug!("ThemeStore: subscribed to OS color scheme");
        } else if !want {
            if let Some(existing) = sub.take() {
                self.inner.scheme.unsubscribe(existing);
                debug!("ThemeStore: unsubscribed from OS color scheme");
            }
        }
    }

    /// OS preference changed while in sync mode.
    ///
    /// Dark forces the effective theme to `"dark"` without rewriting the
    /// persisted name; light re-applies whatever name storage currently
    /// holds.
    fn handle_scheme_change(&self, scheme: ColorScheme) {
        debug!("ThemeStore::handle_scheme_change: {scheme:?}");
        if scheme.is_dark() {
            self.apply_theme(DARK_THEME, None);
        } else {
            let stored = self
                .inner
                .storage
                .get(keys::THEME)
                .unwrap_or_else(|| ThemePreference::DEFAULT_THEME.to_string());
            self.apply_theme(&stored, None);
        }
    }
}

/// Absent or unparseable values default the flag on.
fn parse_flag(value: &str) -> bool {
    value != "false"
}
