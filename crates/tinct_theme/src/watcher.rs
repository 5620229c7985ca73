//! System color scheme watcher
//!
//! Polls the OS dark-mode preference on a background thread and feeds
//! changes into a [`SharedScheme`] fan-out, which notifies subscribed
//! stores. Only compiled with the `watcher` feature.

use crate::platform::detect_system_color_scheme;
use crate::scheme::SharedScheme;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, warn};

/// Watcher tuning.
#[derive(Clone, Copy, Debug)]
pub struct WatcherConfig {
    /// How often the OS preference is probed.
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
        }
    }
}

/// Background poller for the system color scheme.
pub struct SystemSchemeWatcher {
    scheme: Arc<SharedScheme>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SystemSchemeWatcher {
    /// Probe once and start polling.
    pub fn spawn(config: WatcherConfig) -> Self {
        let scheme = Arc::new(SharedScheme::new(detect_system_color_scheme()));
        let stop = Arc::new(AtomicBool::new(false));

        let thread_scheme = Arc::clone(&scheme);
        let thread_stop = Arc::clone(&stop);
        let handle = std::thread::Builder::new()
            .name("tinct-scheme-watcher".to_string())
            .spawn(move || {
                debug!("scheme watcher started, interval {:?}", config.poll_interval);
                while !thread_stop.load(Ordering::SeqCst) {
                    std::thread::sleep(config.poll_interval);
                    if thread_stop.load(Ordering::SeqCst) {
                        break;
                    }
                    thread_scheme.set(detect_system_color_scheme());
                }
                debug!("scheme watcher stopped");
            });

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("failed to spawn scheme watcher thread: {err}");
                None
            }
        };

        Self {
            scheme,
            stop,
            handle,
        }
    }

    /// The scheme source fed by this watcher. Hand this to the store.
    pub fn scheme(&self) -> Arc<SharedScheme> {
        Arc::clone(&self.scheme)
    }

    /// Stop polling and wait for the thread to finish.
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SystemSchemeWatcher {
    fn drop(&mut self) {
        // Dropped watchers stop on their next wakeup without blocking the
        // dropping thread.
        self.stop.store(true, Ordering::SeqCst);
    }
}
