//! Tinct Component Kit
//!
//! Stateless presentational components that compose utility class names
//! and render to a plain markup description. Components are independent
//! leaves: they never read the theme store — styling layers pick up the
//! root element attributes the store maintains.
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_cn::cn;
//! use tinct_cn::ButtonVariant;
//!
//! let save = cn::button("Save")
//!     .variant(ButtonVariant::Accent)
//!     .class("w-full")
//!     .on_click(|| println!("saved"))
//!     .build();
//!
//! assert_eq!(
//!     save.to_html(),
//!     "<button class=\"btn btn-accent w-full\">Save</button>"
//! );
//! save.click();
//! ```

pub mod class;
pub mod components;
pub mod element;

pub use class::ClassList;
pub use components::{Button, ButtonVariant};
pub use element::{ClickHandler, Element};

/// Component constructors.
pub mod cn {
    use crate::components::Button;

    /// Create a button with the given label.
    pub fn button(label: impl Into<String>) -> Button {
        Button::new(label)
    }
}
