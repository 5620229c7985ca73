//! OS color scheme signal
//!
//! `SchemeSource` abstracts the operating system's "prefers dark" signal:
//! a current value plus a subscribe/unsubscribe pair delivering change
//! events. The store queries it on every derivation and, in sync mode,
//! holds a subscription for the lifetime of its mount.

use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Light or dark color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Change listener invoked with the new scheme.
pub type SchemeListener = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// Handle returned by [`SchemeSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SchemeSubscription(u64);

/// The OS preference signal collaborator.
pub trait SchemeSource: Send + Sync {
    /// Current scheme, queried synchronously.
    fn current(&self) -> ColorScheme;

    /// Register a change listener; the returned handle releases it.
    fn subscribe(&self, listener: SchemeListener) -> SchemeSubscription;

    /// Release a previously registered listener. Unknown handles are a no-op.
    fn unsubscribe(&self, subscription: SchemeSubscription);
}

/// A source pinned to a single scheme that never changes.
///
/// Useful for headless rendering contexts and tests that do not exercise
/// sync mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScheme(pub ColorScheme);

impl SchemeSource for FixedScheme {
    fn current(&self) -> ColorScheme {
        self.0
    }

    fn subscribe(&self, _listener: SchemeListener) -> SchemeSubscription {
        SchemeSubscription(0)
    }

    fn unsubscribe(&self, _subscription: SchemeSubscription) {}
}

struct SharedSchemeInner {
    current: ColorScheme,
    next_id: u64,
    listeners: FxHashMap<u64, SchemeListener>,
}

/// A settable in-memory scheme source that fans out change events.
///
/// This is the delivery side of the OS signal: the system watcher (or a
/// test) pushes scheme changes in with [`SharedScheme::set`], and every
/// subscriber is notified. Listeners run on the caller's thread, outside
/// the internal lock, so they may freely call back into the source.
pub struct SharedScheme {
    inner: Mutex<SharedSchemeInner>,
}

impl SharedScheme {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            inner: Mutex::new(SharedSchemeInner {
                current: initial,
                next_id: 1,
                listeners: FxHashMap::default(),
            }),
        }
    }

    /// Update the scheme, notifying subscribers when it actually changed.
    pub fn set(&self, scheme: ColorScheme) {
        let listeners: Vec<SchemeListener> = {
            let mut inner = self.inner.lock().unwrap();
            if inner.current == scheme {
                return;
            }
            debug!("SharedScheme::set: {:?} -> {:?}", inner.current, scheme);
            inner.current = scheme;
            inner.listeners.values().cloned().collect()
        };

        for listener in listeners {
            listener(scheme);
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }
}

impl Default for SharedScheme {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

impl SchemeSource for SharedScheme {
    fn current(&self) -> ColorScheme {
        self.inner.lock().unwrap().current
    }

    fn subscribe(&self, listener: SchemeListener) -> SchemeSubscription {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, listener);
        SchemeSubscription(id)
    }

    fn unsubscribe(&self, subscription: SchemeSubscription) {
        self.inner.lock().unwrap().listeners.remove(&subscription.0);
    }
}
