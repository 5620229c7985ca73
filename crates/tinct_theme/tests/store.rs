use std::sync::Arc;
use tinct_theme::{
    keys, ColorScheme, MemoryStore, MemorySurface, PreferenceStore, SchemeSource, SharedScheme,
    SpacingDensity, ThemeMode, ThemeStore,
};

fn mounted_store(
    storage: Arc<MemoryStore>,
    scheme: Arc<SharedScheme>,
) -> (ThemeStore, MemorySurface) {
    let surface = MemorySurface::new();
    let store = ThemeStore::new(storage, Box::new(surface.clone()), scheme);
    store.mount();
    (store, surface)
}

#[test]
fn mode_reads_back_last_set_value() {
    let (store, _surface) = mounted_store(
        Arc::new(MemoryStore::new()),
        Arc::new(SharedScheme::default()),
    );

    for mode in [
        ThemeMode::Light,
        ThemeMode::Dark,
        ThemeMode::Sync,
        ThemeMode::Default,
    ] {
        store.set_mode(mode);
        assert_eq!(store.state().mode, mode, "mode {mode} should stick");
    }
}

#[test]
fn dark_mode_forces_surface_theme_regardless_of_stored_name() {
    let (store, surface) = mounted_store(
        Arc::new(MemoryStore::new()),
        Arc::new(SharedScheme::default()),
    );

    store.set_theme("luxury");
    store.set_mode(ThemeMode::Dark);
    assert_eq!(surface.attr("data-theme"), Some("dark".to_string()));
    assert!(surface.has_dark_class());

    // A new name under forced dark changes state but not the surface.
    store.set_theme("cupcake");
    assert_eq!(store.state().theme, "cupcake");
    assert_eq!(surface.attr("data-theme"), Some("dark".to_string()));
}

#[test]
fn forced_dark_skips_persisting_the_raw_name() {
    let storage = Arc::new(MemoryStore::new());
    let (store, _surface) = mounted_store(Arc::clone(&storage), Arc::new(SharedScheme::default()));

    store.set_theme("luxury");
    store.set_mode(ThemeMode::Dark);
    store.set_theme("cupcake");

    // Storage still holds the last name persisted outside forced dark.
    assert_eq!(storage.get(keys::THEME), Some("luxury".to_string()));
    assert_eq!(storage.get(keys::THEME_MODE), Some("dark".to_string()));
}

#[test]
fn sync_mode_follows_os_scheme_changes() {
    let storage = Arc::new(MemoryStore::new());
    let scheme = Arc::new(SharedScheme::new(ColorScheme::Dark));
    let (store, surface) = mounted_store(Arc::clone(&storage), Arc::clone(&scheme));

    store.set_theme("luxury");
    store.set_mode(ThemeMode::Sync);
    assert_eq!(surface.attr("data-theme"), Some("dark".to_string()));
    assert_eq!(store.effective_theme(), "dark");

    // OS drops dark: effective reverts to the persisted name.
    scheme.set(ColorScheme::Light);
    assert_eq!(surface.attr("data-theme"), Some("luxury".to_string()));
    assert!(!surface.has_dark_class());

    // OS back to dark: forced again, persisted name untouched.
    scheme.set(ColorScheme::Dark);
    assert_eq!(surface.attr("data-theme"), Some("dark".to_string()));
    assert_eq!(storage.get(keys::THEME), Some("luxury".to_string()));
}

#[test]
fn sync_mode_with_nothing_persisted_reverts_to_default() {
    let scheme = Arc::new(SharedScheme::new(ColorScheme::Dark));
    let surface = MemorySurface::new();
    let store = ThemeStore::with_initial(
        Arc::new(MemoryStore::new()),
        Box::new(surface.clone()),
        Arc::clone(&scheme) as Arc<dyn SchemeSource>,
        "default",
        ThemeMode::Sync,
    );
    store.mount();
    assert_eq!(surface.attr("data-theme"), Some("dark".to_string()));

    scheme.set(ColorScheme::Light);
    assert_eq!(surface.attr("data-theme"), Some("default".to_string()));
}

#[test]
fn spacing_setter_is_idempotent() {
    let (store, surface) = mounted_store(
        Arc::new(MemoryStore::new()),
        Arc::new(SharedScheme::default()),
    );

    store.set_spacing(SpacingDensity::Relax);
    let state_once = store.state();
    let surface_once = surface.last();

    store.set_spacing(SpacingDensity::Relax);
    assert_eq!(store.state(), state_once);
    assert_eq!(surface.last(), surface_once);
    assert_eq!(surface.attr("data-spacing"), Some("relax".to_string()));
}

#[test]
fn theme_round_trips_through_a_fresh_mount() {
    let storage = Arc::new(MemoryStore::new());
    {
        let (store, _surface) =
            mounted_store(Arc::clone(&storage), Arc::new(SharedScheme::default()));
        store.set_theme("luxury");
        store.unmount();
    }

    // Simulated reload: a new store over the same storage.
    let (store, surface) = mounted_store(Arc::clone(&storage), Arc::new(SharedScheme::default()));
    assert_eq!(store.state().theme, "luxury");
    assert_eq!(surface.attr("data-theme"), Some("luxury".to_string()));
}

#[test]
fn persisted_mode_is_restored_at_mount() {
    let storage = Arc::new(MemoryStore::new());
    {
        let (store, _surface) =
            mounted_store(Arc::clone(&storage), Arc::new(SharedScheme::default()));
        store.set_theme("cupcake");
        store.set_mode(ThemeMode::Dark);
    }

    let (store, surface) = mounted_store(Arc::clone(&storage), Arc::new(SharedScheme::default()));
    assert_eq!(store.state().mode, ThemeMode::Dark);
    assert_eq!(store.state().theme, "cupcake");
    assert_eq!(surface.attr("data-theme"), Some("dark".to_string()));
}

#[test]
fn sidebar_flag_never_touches_storage() {
    let storage = Arc::new(MemoryStore::new());
    let (store, _surface) = mounted_store(Arc::clone(&storage), Arc::new(SharedScheme::default()));

    let slots = [
        keys::THEME,
        keys::THEME_MODE,
        keys::SPACING,
        keys::TABLE_BORDER,
    ];
    let before: Vec<Option<String>> = slots.iter().map(|k| storage.get(k)).collect();

    store.set_sidebar_expanded(true);
    assert!(store.state().sidebar_expanded);

    let after: Vec<Option<String>> = slots.iter().map(|k| storage.get(k)).collect();
    assert_eq!(before, after);
}

#[test]
fn table_border_persists_and_mirrors() {
    let storage = Arc::new(MemoryStore::new());
    let (store, surface) = mounted_store(Arc::clone(&storage), Arc::new(SharedScheme::default()));

    assert_eq!(surface.attr("data-table-border"), Some("true".to_string()));
    store.set_table_border(false);
    assert_eq!(surface.attr("data-table-border"), Some("false".to_string()));
    assert_eq!(storage.get(keys::TABLE_BORDER), Some("false".to_string()));

    // And restored on reload.
    let (store, _surface) = mounted_store(Arc::clone(&storage), Arc::new(SharedScheme::default()));
    assert!(!store.state().table_border);
}

#[test]
fn subscription_tracks_sync_mode_and_unmount() {
    let scheme = Arc::new(SharedScheme::default());
    let (store, _surface) = mounted_store(Arc::new(MemoryStore::new()), Arc::clone(&scheme));
    assert_eq!(scheme.listener_count(), 0);

    store.set_mode(ThemeMode::Sync);
    assert_eq!(scheme.listener_count(), 1);

    store.set_mode(ThemeMode::Light);
    assert_eq!(scheme.listener_count(), 0);

    store.set_mode(ThemeMode::Sync);
    assert_eq!(scheme.listener_count(), 1);
    store.unmount();
    assert_eq!(scheme.listener_count(), 0);

    // Scheme flips after teardown must not resurrect the store's state.
    scheme.set(ColorScheme::Dark);
    assert_eq!(store.state().mode, ThemeMode::Sync);
}

#[test]
fn mount_is_idempotent() {
    let scheme = Arc::new(SharedScheme::default());
    let surface = MemorySurface::new();
    let store = ThemeStore::with_initial(
        Arc::new(MemoryStore::new()),
        Box::new(surface.clone()),
        Arc::clone(&scheme) as Arc<dyn SchemeSource>,
        "default",
        ThemeMode::Sync,
    );
    store.mount();
    store.mount();
    assert_eq!(scheme.listener_count(), 1);
}
