//! Platform detection for the system color scheme
//!
//! Probes the host OS for its current dark-mode preference. Detection is
//! best-effort: on platforms without a known probe (or when the probe
//! fails) the scheme falls back to light.

use crate::scheme::ColorScheme;
use std::process::Command;
use tracing::debug;

/// Host operating system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOS
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

/// Detect the current OS color scheme.
pub fn detect_system_color_scheme() -> ColorScheme {
    let scheme = match Platform::current() {
        Platform::MacOS => detect_macos(),
        Platform::Linux => detect_linux(),
        // No probe wired up for Windows/other targets yet.
        Platform::Windows | Platform::Other => ColorScheme::Light,
    };
    debug!("detect_system_color_scheme: {:?}", scheme);
    scheme
}

/// macOS reports `AppleInterfaceStyle = Dark` only when dark mode is on;
/// the key is absent (non-zero exit) in light mode.
fn detect_macos() -> ColorScheme {
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            if String::from_utf8_lossy(&out.stdout).contains("Dark") {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            }
        }
        _ => ColorScheme::Light,
    }
}

/// GNOME exposes `color-scheme` as `'prefer-dark'` / `'default'`.
fn detect_linux() -> ColorScheme {
    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            if String::from_utf8_lossy(&out.stdout).contains("dark") {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            }
        }
        _ => ColorScheme::Light,
    }
}
