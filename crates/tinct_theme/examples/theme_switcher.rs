//! Drive a theme store through its modes and print the surface after each
//! step.
//!
//! ```sh
//! cargo run -p tinct_theme --example theme_switcher
//! ```

use std::sync::Arc;
use tinct_theme::{
    ColorScheme, MemoryStore, MemorySurface, SharedScheme, SpacingDensity, ThemeMode, ThemeStore,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let scheme = Arc::new(SharedScheme::new(ColorScheme::Light));
    let surface = MemorySurface::new();
    let store = ThemeStore::new(
        Arc::new(MemoryStore::new()),
        Box::new(surface.clone()),
        Arc::clone(&scheme) as Arc<dyn tinct_theme::SchemeSource>,
    );
    store.mount();

    let show = |step: &str| {
        if let Some(attrs) = surface.last() {
            println!("{step:<32} <html {}>", attrs.html_attrs());
        }
    };

    show("mount");

    store.set_theme("luxury");
    show("set_theme(luxury)");

    store.set_spacing(SpacingDensity::Relax);
    show("set_spacing(relax)");

    store.set_mode(ThemeMode::Dark);
    show("set_mode(dark)");

    store.set_mode(ThemeMode::Sync);
    show("set_mode(sync), OS light");

    scheme.set(ColorScheme::Dark);
    show("OS switches to dark");

    scheme.set(ColorScheme::Light);
    show("OS back to light");

    store.unmount();
}
