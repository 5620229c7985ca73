//! Presentation surface sync
//!
//! One-way "state → surface" mirroring. [`RootAttrs::derive`] is the pure
//! mapping from a preference snapshot (plus the OS scheme) to the root
//! element's attributes; [`PresentationSurface`] is whatever applies them —
//! a DOM binding, a template renderer, a test recorder. The store only ever
//! writes the surface, it never reads it back.

use crate::preference::{resolve_effective, SpacingDensity, ThemeMode, ThemePreference, DARK_THEME};
use crate::scheme::ColorScheme;
use std::sync::{Arc, Mutex};

/// Attribute written with the effective theme name.
pub const ATTR_THEME: &str = "data-theme";
/// Attribute written with the spacing density id.
pub const ATTR_SPACING: &str = "data-spacing";
/// Attribute written with the table border flag.
pub const ATTR_TABLE_BORDER: &str = "data-table-border";
/// Class toggled on the root element under forced dark.
pub const DARK_CLASS: &str = "dark";

/// Root element attribute snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct RootAttrs {
    /// Effective theme (after mode-based override).
    pub theme: String,
    pub spacing: SpacingDensity,
    pub table_border: bool,
    /// Whether the `dark` class is present. Only the dark-capable modes
    /// (`Dark`, `Sync`) ever set it; an explicitly stored `"dark"` theme
    /// under `Default` mode does not.
    pub dark: bool,
}

impl RootAttrs {
    /// The pure mapping function: preference snapshot → surface attributes.
    pub fn derive(pref: &ThemePreference, os: ColorScheme) -> Self {
        let effective = resolve_effective(pref.mode, &pref.theme, os);
        let dark_capable = matches!(pref.mode, ThemeMode::Dark | ThemeMode::Sync);
        Self {
            theme: effective.to_string(),
            spacing: pref.spacing,
            table_border: pref.table_border,
            dark: dark_capable && effective == DARK_THEME,
        }
    }

    /// Attribute pairs in stable order.
    pub fn entries(&self) -> [(&'static str, String); 3] {
        [
            (ATTR_THEME, self.theme.clone()),
            (ATTR_SPACING, self.spacing.id().to_string()),
            (ATTR_TABLE_BORDER, self.table_border.to_string()),
        ]
    }

    /// Classes present on the root element.
    pub fn classes(&self) -> &'static [&'static str] {
        if self.dark {
            &[DARK_CLASS]
        } else {
            &[]
        }
    }

    /// Render as an HTML attribute string, e.g.
    /// `data-theme="dark" data-spacing="compact" data-table-border="true" class="dark"`.
    pub fn html_attrs(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.entries() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("{name}=\"{value}\""));
        }
        if self.dark {
            out.push_str(&format!(" class=\"{DARK_CLASS}\""));
        }
        out
    }
}

/// The rendering target collaborator. Applying the same snapshot twice must
/// leave the surface unchanged (whole-state writes, no accumulation).
pub trait PresentationSurface: Send {
    fn apply(&mut self, attrs: &RootAttrs);
}

/// Surface that remembers the last applied snapshot.
///
/// Clones share the same slot, so a test or demo can keep one handle while
/// the store owns another.
#[derive(Clone, Default)]
pub struct MemorySurface {
    last: Arc<Mutex<Option<RootAttrs>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied snapshot, if any.
    pub fn last(&self) -> Option<RootAttrs> {
        self.last.lock().unwrap().clone()
    }

    /// Value of a single attribute on the surface.
    pub fn attr(&self, name: &str) -> Option<String> {
        let last = self.last.lock().unwrap();
        let attrs = last.as_ref()?;
        attrs
            .entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Whether the root currently carries the `dark` class.
    pub fn has_dark_class(&self) -> bool {
        self.last
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|attrs| attrs.dark)
    }
}

impl PresentationSurface for MemorySurface {
    fn apply(&mut self, attrs: &RootAttrs) {
        *self.last.lock().unwrap() = Some(attrs.clone());
    }
}

/// Surface that discards every write.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl PresentationSurface for NullSurface {
    fn apply(&mut self, _attrs: &RootAttrs) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pref(theme: &str, mode: ThemeMode) -> ThemePreference {
        ThemePreference {
            theme: theme.to_string(),
            mode,
            ..ThemePreference::default()
        }
    }

    #[test]
    fn test_forced_dark_sets_theme_and_class() {
        let attrs = RootAttrs::derive(&pref("luxury", ThemeMode::Dark), ColorScheme::Light);
        assert_eq!(attrs.theme, "dark");
        assert!(attrs.dark);
        assert_eq!(attrs.classes(), [DARK_CLASS]);
    }

    #[test]
    fn test_stored_dark_under_default_mode_has_no_dark_class() {
        // data-theme says "dark" but only the dark-capable modes toggle the
        // class, matching the surface contract.
        let attrs = RootAttrs::derive(&pref("dark", ThemeMode::Default), ColorScheme::Light);
        assert_eq!(attrs.theme, "dark");
        assert!(!attrs.dark);
        assert!(attrs.classes().is_empty());
    }

    #[test]
    fn test_sync_follows_os_scheme() {
        let p = pref("cupcake", ThemeMode::Sync);
        let light = RootAttrs::derive(&p, ColorScheme::Light);
        assert_eq!(light.theme, "cupcake");
        assert!(!light.dark);

        let dark = RootAttrs::derive(&p, ColorScheme::Dark);
        assert_eq!(dark.theme, "dark");
        assert!(dark.dark);
    }

    #[test]
    fn test_html_attrs_shape() {
        let attrs = RootAttrs::derive(&pref("default", ThemeMode::Dark), ColorScheme::Light);
        assert_eq!(
            attrs.html_attrs(),
            "data-theme=\"dark\" data-spacing=\"compact\" data-table-border=\"true\" class=\"dark\""
        );
    }

    #[test]
    fn test_memory_surface_records_last_write() {
        let surface = MemorySurface::new();
        let mut handle = surface.clone();
        handle.apply(&RootAttrs::derive(
            &pref("luxury", ThemeMode::Default),
            ColorScheme::Light,
        ));
        assert_eq!(surface.attr(ATTR_THEME), Some("luxury".to_string()));
        assert!(!surface.has_dark_class());
    }
}
