//! Theme preference model
//!
//! `ThemePreference` is the full in-memory state owned by the store: the
//! stored theme name, the light/dark resolution mode, the spacing density,
//! the table border toggle, and the session-only sidebar flag.
//!
//! The effective theme (what the presentation surface actually shows) is a
//! pure function of `(mode, stored name, OS color scheme)` — see
//! [`resolve_effective`]. It is recomputed on every transition, never cached.

use crate::scheme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Reserved theme identifier the dark modes force onto the surface.
pub const DARK_THEME: &str = "dark";

/// Light/dark resolution policy.
///
/// - `Default`: no forcing, the stored theme name is used as-is
/// - `Light`: treated like `Default` (explicit "never dark")
/// - `Dark`: the effective theme is always `"dark"`
/// - `Sync`: follow the operating system's color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Default,
    Light,
    Dark,
    Sync,
}

impl ThemeMode {
    /// Stable mode id for persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Sync => "sync",
        }
    }

    /// Parse a persisted mode id. Unrecognized values yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "default" => Some(Self::Default),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "sync" => Some(Self::Sync),
            _ => None,
        }
    }

    /// Full mode list.
    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 4] = [
            ThemeMode::Default,
            ThemeMode::Light,
            ThemeMode::Dark,
            ThemeMode::Sync,
        ];
        &MODES
    }

    /// Whether this mode forces the effective theme to `"dark"` under the
    /// given OS color scheme.
    pub fn forces_dark(self, os: ColorScheme) -> bool {
        match self {
            Self::Dark => true,
            Self::Sync => os.is_dark(),
            Self::Default | Self::Light => false,
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Named UI density preset, orthogonal to theme color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingDensity {
    #[default]
    Compact,
    Comfort,
    Relax,
}

impl SpacingDensity {
    /// Stable density id for persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfort => "comfort",
            Self::Relax => "relax",
        }
    }

    /// Parse a persisted density id. Unrecognized values yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "compact" => Some(Self::Compact),
            "comfort" => Some(Self::Comfort),
            "relax" => Some(Self::Relax),
            _ => None,
        }
    }

    /// Full density list.
    pub fn all() -> &'static [SpacingDensity] {
        const DENSITIES: [SpacingDensity; 3] = [
            SpacingDensity::Compact,
            SpacingDensity::Comfort,
            SpacingDensity::Relax,
        ];
        &DENSITIES
    }
}

impl Display for SpacingDensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Full in-memory preference state.
///
/// `sidebar_expanded` is a session-only layout flag: it is never persisted
/// and never mirrored onto the presentation surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: String,
    pub mode: ThemeMode,
    pub spacing: SpacingDensity,
    pub table_border: bool,
    pub sidebar_expanded: bool,
}

impl ThemePreference {
    /// Theme name used when nothing is stored.
    pub const DEFAULT_THEME: &'static str = "default";
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            theme: Self::DEFAULT_THEME.to_string(),
            mode: ThemeMode::Default,
            spacing: SpacingDensity::Compact,
            table_border: true,
            sidebar_expanded: false,
        }
    }
}

/// Derive the effective theme from mode, stored name, and OS scheme.
///
/// Forced-dark modes resolve to the reserved [`DARK_THEME`] identifier
/// regardless of the stored name; otherwise the stored name is used
/// verbatim.
pub fn resolve_effective(mode: ThemeMode, stored_theme: &str, os: ColorScheme) -> &str {
    if mode.forces_dark(os) {
        DARK_THEME
    } else {
        stored_theme
    }
}
