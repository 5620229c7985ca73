//! Built-in theme presets
//!
//! The catalog the stock UI ships with: a light default, the reserved dark
//! theme, and two accent presets (luxury, cupcake). Each preset carries the
//! nine semantic palette colors styling layers key off of, exportable as
//! CSS custom properties.

use crate::color::Color;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Stock light theme.
    Default,
    /// The reserved dark theme the dark modes force.
    Dark,
    /// Gold-on-black dark accent preset.
    Luxury,
    /// Pastel light preset.
    Cupcake,
}

impl ThemePreset {
    /// Stable preset id — the value stored as the theme name.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Luxury => "luxury",
            Self::Cupcake => "cupcake",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Dark => "Dark",
            Self::Luxury => "Luxury",
            Self::Cupcake => "Cupcake",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::Default,
            ThemePreset::Dark,
            ThemePreset::Luxury,
            ThemePreset::Cupcake,
        ];
        &PRESETS
    }

    /// Look up a preset by its stored id.
    pub fn find(id: &str) -> Option<ThemePreset> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Whether this preset is a dark palette.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::Luxury)
    }

    /// The preset's semantic palette.
    pub fn palette(self) -> Palette {
        match self {
            Self::Default => default_palette(),
            Self::Dark => dark_palette(),
            Self::Luxury => luxury_palette(),
            Self::Cupcake => cupcake_palette(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The nine semantic colors a preset defines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub neutral: Color,
    /// Base surface color.
    pub base: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    /// Generate a CSS variable map from the palette.
    ///
    /// Keys are variable names without the `--` prefix; values are CSS
    /// color strings.
    pub fn css_variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::with_capacity(9);
        vars.insert("primary".into(), self.primary.to_css_string());
        vars.insert("secondary".into(), self.secondary.to_css_string());
        vars.insert("accent".into(), self.accent.to_css_string());
        vars.insert("neutral".into(), self.neutral.to_css_string());
        vars.insert("base-100".into(), self.base.to_css_string());
        vars.insert("info".into(), self.info.to_css_string());
        vars.insert("success".into(), self.success.to_css_string());
        vars.insert("warning".into(), self.warning.to_css_string());
        vars.insert("error".into(), self.error.to_css_string());
        vars
    }
}

fn default_palette() -> Palette {
    Palette {
        primary: Color::from_hex(0x570DF8),
        secondary: Color::from_hex(0xF000B8),
        accent: Color::from_hex(0x37CDBE),
        neutral: Color::from_hex(0x3D4451),
        base: Color::WHITE,
        info: Color::from_hex(0x3ABFF8),
        success: Color::from_hex(0x36D399),
        warning: Color::from_hex(0xFBBD23),
        error: Color::from_hex(0xF87272),
    }
}

fn dark_palette() -> Palette {
    Palette {
        primary: Color::from_hex(0x661AE6),
        secondary: Color::from_hex(0xD926AA),
        accent: Color::from_hex(0x1FB2A5),
        neutral: Color::from_hex(0x191D24),
        base: Color::from_hex(0x2A303C),
        info: Color::from_hex(0x3ABFF8),
        success: Color::from_hex(0x36D399),
        warning: Color::from_hex(0xFBBD23),
        error: Color::from_hex(0xF87272),
    }
}

fn luxury_palette() -> Palette {
    Palette {
        primary: Color::WHITE,
        secondary: Color::from_hex(0x152747),
        accent: Color::from_hex(0x513448),
        neutral: Color::from_hex(0x331800),
        base: Color::from_hex(0x09090B),
        info: Color::from_hex(0x66C6FF),
        success: Color::from_hex(0x87D039),
        warning: Color::from_hex(0xE2D562),
        error: Color::from_hex(0xFF6F6F),
    }
}

fn cupcake_palette() -> Palette {
    Palette {
        primary: Color::from_hex(0x65C3C8),
        secondary: Color::from_hex(0xEF9FBC),
        accent: Color::from_hex(0xEEAF3A),
        neutral: Color::from_hex(0x291334),
        base: Color::from_hex(0xFAF7F5),
        info: Color::from_hex(0x3ABFF8),
        success: Color::from_hex(0x36D399),
        warning: Color::from_hex(0xFBBD23),
        error: Color::from_hex(0xF87272),
    }
}
