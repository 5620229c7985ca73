//! Button component
//!
//! A stateless interactive element: pick a visual variant from the closed
//! enumeration, add caller classes, forward a click handler and any
//! passthrough attributes unchanged. Nothing here holds state or touches
//! the theme store.
//!
//! # Example
//!
//! ```rust
//! use tinct_cn::cn;
//! use tinct_cn::ButtonVariant;
//!
//! let el = cn::button("Save")
//!     .variant(ButtonVariant::Success)
//!     .class("w-full")
//!     .build();
//! assert_eq!(el.class_attr(), "btn btn-success w-full");
//! ```

use crate::class::ClassList;
use crate::element::{ClickHandler, Element};
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tracing::debug;

/// Button visual variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
    Ghost,
    Success,
    Error,
}

impl ButtonVariant {
    /// Stable variant id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Ghost => "ghost",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// The utility class this variant appends to the base `btn` class.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Accent => "btn-accent",
            Self::Ghost => "btn-ghost",
            Self::Success => "btn-success",
            Self::Error => "btn-error",
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [ButtonVariant] {
        const VARIANTS: [ButtonVariant; 6] = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Accent,
            ButtonVariant::Ghost,
            ButtonVariant::Success,
            ButtonVariant::Error,
        ];
        &VARIANTS
    }

    /// Parse a variant id. Unrecognized values yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.id() == id)
    }
}

impl Display for ButtonVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Button builder. Create with [`crate::cn::button`].
pub struct Button {
    label: String,
    variant: Option<ButtonVariant>,
    extra_classes: ClassList,
    attrs: Vec<(String, String)>,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Some(ButtonVariant::default()),
            extra_classes: ClassList::new(),
            attrs: Vec::new(),
            on_click: None,
        }
    }

    /// Select the visual variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Select the variant by id.
    ///
    /// Unrecognized ids degrade to the base class only — no variant class
    /// is appended and nothing fails.
    pub fn variant_id(mut self, id: &str) -> Self {
        self.variant = ButtonVariant::from_id(id);
        if self.variant.is_none() {
            debug!("unknown button variant id {id:?}, rendering base class only");
        }
        self
    }

    /// Append caller-supplied classes (whitespace-separated).
    pub fn class(mut self, classes: &str) -> Self {
        self.extra_classes.extend_str(classes);
        self
    }

    /// Forward an arbitrary attribute unchanged.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Forward the click handler.
    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    /// Compose the final element: `btn`, the variant class, then caller
    /// classes.
    pub fn build(self) -> Element {
        let mut el = Element::new("button");
        el.add_classes("btn");
        if let Some(variant) = self.variant {
            el.add_classes(variant.class_name());
        }
        el.add_classes(&self.extra_classes.to_attr());
        for (name, value) in self.attrs {
            el.set_attr(name, value);
        }
        el.set_text(self.label);
        if let Some(handler) = self.on_click {
            el.set_on_click(handler);
        }
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_primary() {
        let el = Button::new("Button").build();
        assert_eq!(el.class_attr(), "btn btn-primary");
    }

    #[test]
    fn test_variant_id_round_trip() {
        for variant in ButtonVariant::all() {
            assert_eq!(ButtonVariant::from_id(variant.id()), Some(*variant));
        }
        assert_eq!(ButtonVariant::from_id("link"), None);
    }
}
