//! Render every button variant under each built-in theme preset.
//!
//! ```sh
//! cargo run -p tinct_cn --example button_gallery
//! ```

use tinct_cn::{cn, ButtonVariant};
use tinct_theme::ThemePreset;

fn main() {
    for preset in ThemePreset::all() {
        println!("<section data-theme=\"{}\">", preset.id());
        for variant in ButtonVariant::all() {
            let el = cn::button(format!("Button {}", variant.id()))
                .variant(*variant)
                .build();
            println!("  {}", el.to_html());
        }
        // Unknown ids keep the base class and render fine.
        let plain = cn::button("Button custom").variant_id("custom").build();
        println!("  {}", plain.to_html());
        println!("</section>");
    }
}
