//! Renderable markup description
//!
//! Components build an [`Element`] — tag, composed classes, passthrough
//! attributes, text content, and a forwarded click handler. The host
//! decides how to realize it: render the HTML string, diff it into a DOM,
//! or invoke `click` directly in tests.

use crate::class::ClassList;
use std::fmt;
use std::sync::Arc;

/// Forwarded activation handler.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// A single markup element.
#[derive(Clone, Default)]
pub struct Element {
    tag: &'static str,
    classes: ClassList,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    on_click: Option<ClickHandler>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Append classes (whitespace-separated).
    pub fn add_classes(&mut self, classes: &str) {
        self.classes.extend_str(classes);
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn set_on_click(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    /// The composed `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.to_attr()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Value of a passthrough attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Invoke the forwarded click handler; a no-op when none was set.
    pub fn click(&self) {
        if let Some(handler) = &self.on_click {
            handler();
        }
    }

    /// Render as HTML. Classes come first, then passthrough attributes in
    /// insertion order; text content is escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", self.class_attr()));
        }
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {name}=\"{}\"", escape(value)));
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        out.push_str(&format!("</{}>", self.tag));
        out
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("attrs", &self.attrs)
            .field("text", &self.text)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
